//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables. The token signing
//! secret has no fallback: a process without `JWT_SECRET` refuses to start.

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RUST_LOG: &str = "agriloop=info,tower_http=info";

/// Configuration errors. Messages name the variable, never its value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid {
                key: "LOG_FORMAT",
                reason: format!("expected `pretty` or `json`, got `{other}`"),
            }),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,

    /// Runtime configuration
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,

    /// Empty means permissive CORS (local development)
    pub cors_allowed_origins: Vec<String>,
}

// Hand-written so the secret never reaches a log line.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("log_format", &self.log_format)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or(ConfigError::Missing(key))?;
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(key));
            }
            Ok(value)
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match optional("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                reason: format!("`{raw}` is not a port number"),
            })?,
            None => DEFAULT_PORT,
        };

        let log_format = match optional("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let cors_allowed_origins = optional("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: optional("JWT_ISSUER"),
            jwt_audience: optional("JWT_AUDIENCE"),
            database_url: required("DATABASE_URL")?,
            port,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
            log_format,
            cors_allowed_origins,
        })
    }
}
