//! Article Source Port - Interface for fetching article text from URLs.

use async_trait::async_trait;

/// Article content pulled out of a web page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Page title or first H1, if any.
    pub title: Option<String>,
    /// Extracted body text, paragraphs joined with newlines.
    pub body: String,
    /// Canonical URL declared by the page, if any.
    pub canonical: Option<String>,
}

/// Port for fetching and extracting article text.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch `url` and extract the article content from it.
    async fn fetch(&self, url: &str) -> Result<ExtractedArticle, ExtractError>;
}

/// Article extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// URL was malformed or used an unsupported scheme.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Request failed or the server returned an error status.
    #[error("fetch failed for {url}: {message}")]
    FetchFailed {
        /// The URL that failed.
        url: String,
        /// Error details.
        message: String,
    },

    /// Request timed out.
    #[error("fetch timed out for {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Page was fetched but no usable article body was found.
    #[error("no article content found at {url}")]
    NoContent {
        /// The URL with no extractable content.
        url: String,
    },
}

impl ExtractError {
    /// Creates a fetch failure error.
    pub fn fetch_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a no-content error.
    pub fn no_content(url: impl Into<String>) -> Self {
        Self::NoContent { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_the_url() {
        let err = ExtractError::fetch_failed("https://example.com/a", "503");
        assert!(err.to_string().contains("https://example.com/a"));

        let err = ExtractError::no_content("https://example.com/b");
        assert_eq!(
            err.to_string(),
            "no article content found at https://example.com/b"
        );
    }
}
