//! Common utilities shared by the API process and the operator tools.
//!
//! This crate provides:
//! - Unified error handling with HTTP response conversion
//! - Startup environment validation and typed configuration

pub mod config;
pub mod error;

pub use config::{validate_env, AppConfig, EnvRequirement, JwtConfig, ServerConfig, REQUIRED_ENV};
pub use error::{AppError, AppResult};
