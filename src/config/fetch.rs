//! Article fetch configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for URL-mode article fetching
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User agent sent with fetch requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Minimum word count for an extraction to be considered a full article
    #[serde(default = "default_min_body_words")]
    pub min_body_words: usize,
}

impl FetchConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate fetch configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidFetchTimeout);
        }
        if self.min_body_words == 0 {
            return Err(ValidationError::InvalidMinBodyWords);
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            min_body_words: default_min_body_words(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; SEO-Desk/1.0)".to_string()
}

fn default_timeout() -> u64 {
    12
}

fn default_min_body_words() -> usize {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.min_body_words, 30);
        assert!(config.user_agent.contains("SEO-Desk"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = FetchConfig {
            timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = FetchConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_min_words() {
        let config = FetchConfig {
            min_body_words: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
