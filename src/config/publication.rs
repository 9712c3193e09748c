//! Publication defaults
//!
//! Branding and editorial defaults applied when a request doesn't override
//! them: publisher name, byline, section, and the canonical URL base used
//! to build suggested article URLs.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Section;

/// Most alt-text suggestions one article may carry. Validation holds the
/// configured default to this bound and request overrides are clamped to it.
pub const MAX_ALT_TEXT_COUNT: usize = 8;

/// Publication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationConfig {
    /// Publisher organization name (used in JSON-LD)
    #[serde(default = "default_publisher")]
    pub publisher: String,

    /// Default byline when a request carries none
    #[serde(default = "default_author")]
    pub default_author: String,

    /// Default article section
    #[serde(default)]
    pub default_section: Section,

    /// Canonical base URL, e.g. "https://www.patrika.com"
    #[serde(default = "default_canonical_base")]
    pub canonical_base: String,

    /// Number of image alt-text suggestions per article
    #[serde(default = "default_alt_count")]
    pub alt_text_count: usize,
}

impl PublicationConfig {
    /// Canonical base with any trailing slash removed.
    pub fn canonical_base_trimmed(&self) -> &str {
        self.canonical_base.trim_end_matches('/')
    }

    /// Validate publication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.publisher.trim().is_empty() {
            return Err(ValidationError::EmptyPublisher);
        }
        if !self.canonical_base.starts_with("http://")
            && !self.canonical_base.starts_with("https://")
        {
            return Err(ValidationError::InvalidCanonicalBase);
        }
        if self.alt_text_count == 0 || self.alt_text_count > MAX_ALT_TEXT_COUNT {
            return Err(ValidationError::InvalidAltCount);
        }
        Ok(())
    }
}

impl Default for PublicationConfig {
    fn default() -> Self {
        Self {
            publisher: default_publisher(),
            default_author: default_author(),
            default_section: Section::default(),
            canonical_base: default_canonical_base(),
            alt_text_count: default_alt_count(),
        }
    }
}

fn default_publisher() -> String {
    "Rajasthan Patrika".to_string()
}

fn default_author() -> String {
    "Patrika News Desk".to_string()
}

fn default_canonical_base() -> String {
    "https://www.patrika.com".to_string()
}

fn default_alt_count() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_defaults() {
        let config = PublicationConfig::default();
        assert_eq!(config.publisher, "Rajasthan Patrika");
        assert_eq!(config.default_section, Section::National);
        assert_eq!(config.alt_text_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_canonical_base_trimmed() {
        let config = PublicationConfig {
            canonical_base: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.canonical_base_trimmed(), "https://example.com");
    }

    #[test]
    fn test_validation_rejects_empty_publisher() {
        let config = PublicationConfig {
            publisher: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_canonical_base() {
        let config = PublicationConfig {
            canonical_base: "www.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_alt_count() {
        let config = PublicationConfig {
            alt_text_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
