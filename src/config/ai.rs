//! AI rewriter configuration
//!
//! The rewriter is optional: when no API key is configured the service
//! falls back to heuristic derivation for every request.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI rewriter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key, redacted in Debug output. Absent means
    /// heuristics-only operation.
    pub openai_api_key: Option<Secret<String>>,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the chat completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on retryable failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Maximum tokens to request per rewrite
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a rewriter is configured
    pub fn is_enabled(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Validate AI configuration
    ///
    /// An absent key is valid; a present key with a bogus timeout is not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}

fn default_max_tokens() -> u32 {
    800
}
