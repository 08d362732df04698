//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the API process and the operator tools.

pub mod constants;
pub mod error;
pub mod notification;
pub mod seed;

pub use constants::*;
pub use error::DomainError;
pub use notification::{NewNotification, Notification, NotificationType};
pub use seed::sample_notifications;
