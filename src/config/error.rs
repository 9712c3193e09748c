//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Host must be a literal IP address")]
    InvalidHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid canonical base URL: must start with http:// or https://")]
    InvalidCanonicalBase,

    #[error("Publisher name cannot be empty")]
    EmptyPublisher,

    #[error("Alt text suggestion count must be between 1 and 8")]
    InvalidAltCount,

    #[error("Fetch timeout must be between 1 and 120 seconds")]
    InvalidFetchTimeout,

    #[error("Minimum body word count must be greater than zero")]
    InvalidMinBodyWords,
}
