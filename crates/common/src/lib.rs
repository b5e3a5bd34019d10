//! Shared utilities, configuration, and error handling for AgriLoop
//!
//! - Environment-driven configuration (the signing secret is mandatory)
//! - The handler-level error type and its JSON response shape
//! - Request extractors shared by the domain crates

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, ConfigError, LogFormat};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
