//! Startup configuration: required environment checks and typed settings.
//!
//! The validator works on an explicit key/value snapshot rather than the
//! live process environment, so callers decide where values come from.

use std::collections::HashMap;

use domain::{
    DEFAULT_JWT_EXPIRATION_HOURS, ENV_GEMINI_API_KEY, ENV_JWT_REFRESH_SECRET, ENV_JWT_SECRET,
    ENV_MONGODB_URI, MIN_JWT_SECRET_LENGTH,
};

use crate::error::{AppError, AppResult};

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// A variable the process cannot start without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvRequirement {
    pub key: &'static str,
    /// Minimum length in characters, if the value is a secret
    pub min_length: Option<usize>,
}

impl EnvRequirement {
    pub const fn present(key: &'static str) -> Self {
        Self {
            key,
            min_length: None,
        }
    }

    pub const fn secret(key: &'static str, min_length: usize) -> Self {
        Self {
            key,
            min_length: Some(min_length),
        }
    }
}

/// Every variable checked at startup, in reporting order.
pub const REQUIRED_ENV: &[EnvRequirement] = &[
    EnvRequirement::present(ENV_MONGODB_URI),
    EnvRequirement::secret(ENV_JWT_SECRET, MIN_JWT_SECRET_LENGTH),
    EnvRequirement::secret(ENV_JWT_REFRESH_SECRET, MIN_JWT_SECRET_LENGTH),
    EnvRequirement::present(ENV_GEMINI_API_KEY),
];

/// Check `env` against [`REQUIRED_ENV`].
///
/// All missing variables are reported together. Length checks only run once
/// every variable is present, and every undersized secret is reported.
pub fn validate_env(env: &HashMap<String, String>) -> AppResult<()> {
    validate_requirements(env, REQUIRED_ENV)
}

/// Check `env` against an arbitrary requirement table.
pub fn validate_requirements(
    env: &HashMap<String, String>,
    requirements: &[EnvRequirement],
) -> AppResult<()> {
    let missing: Vec<&str> = requirements
        .iter()
        .filter(|req| lookup(env, req.key).is_none())
        .map(|req| req.key)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    let undersized: Vec<String> = requirements
        .iter()
        .filter_map(|req| {
            let min = req.min_length?;
            let len = lookup(env, req.key).map_or(0, |v| v.chars().count());
            (len < min).then(|| format!("{} must be at least {} characters long", req.key, min))
        })
        .collect();

    if !undersized.is_empty() {
        return Err(AppError::configuration(undersized.join("; ")));
    }

    Ok(())
}

/// Non-empty value for `key`.
fn lookup<'a>(env: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    env.get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// JWT configuration for authentication.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub refresh_secret: String,
    pub expiration_hours: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("refresh_secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Application configuration, built only from a validated environment.
#[derive(Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub jwt: JwtConfig,
    gemini_api_key: String,
    pub server: ServerConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mongodb_uri", &"[REDACTED]")
            .field("jwt", &self.jwt)
            .field("gemini_api_key", &"[REDACTED]")
            .field("server", &self.server)
            .finish()
    }
}

impl AppConfig {
    /// Load `.env`, snapshot the process environment and validate it.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_map(&env)
    }

    /// Validate `env` and build the typed configuration from it.
    pub fn from_map(env: &HashMap<String, String>) -> AppResult<Self> {
        validate_env(env)?;

        let required = |key: &str| -> AppResult<String> {
            lookup(env, key)
                .map(str::to_string)
                .ok_or_else(|| AppError::configuration(format!("{} is not set", key)))
        };

        Ok(Self {
            mongodb_uri: required(ENV_MONGODB_URI)?,
            jwt: JwtConfig {
                secret: required(ENV_JWT_SECRET)?,
                refresh_secret: required(ENV_JWT_REFRESH_SECRET)?,
                expiration_hours: parse_or(env, "JWT_EXPIRATION_HOURS", DEFAULT_JWT_EXPIRATION_HOURS),
            },
            gemini_api_key: required(ENV_GEMINI_API_KEY)?,
            server: ServerConfig {
                host: lookup(env, "SERVER_HOST")
                    .unwrap_or(DEFAULT_SERVER_HOST)
                    .to_string(),
                port: parse_or(env, "SERVER_PORT", DEFAULT_SERVER_PORT),
            },
        })
    }

    /// Get the recipe assistant API key.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
}

fn parse_or<T: std::str::FromStr>(env: &HashMap<String, String>, key: &str, default: T) -> T {
    lookup(env, key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
