//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `SEO_DESK`
//! prefix and nested fields use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use seo_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let addr = config.server.socket_addr().expect("Invalid bind address");
//! println!("Server running on {addr}");
//! ```

mod ai;
mod error;
mod fetch;
mod publication;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use fetch::FetchConfig;
pub use publication::{PublicationConfig, MAX_ALT_TEXT_COUNT};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has workable defaults; the service starts with no
/// environment at all and runs in heuristics-only mode.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI rewriter configuration (optional OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Publication branding and editorial defaults
    #[serde(default)]
    pub publication: PublicationConfig,

    /// URL-mode fetch configuration
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SEO_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SEO_DESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SEO_DESK__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SEO_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.publication.validate()?;
        self.fetch.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
