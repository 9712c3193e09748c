//! Article input value object.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::{clean_text, word_count};
use crate::domain::foundation::DomainError;

/// Maximum word count for a leading line to be treated as a headline.
const MAX_HEADLINE_WORDS: usize = 12;

static ARTICLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*-{3,}\s*$").expect("article separator regex"));

/// One article submitted for analysis.
///
/// The body is always normalized via [`clean_text`]. A pasted article may
/// carry its original headline on the first line; a fetched one carries the
/// extracted page title and canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Original headline, when one was supplied or extracted.
    pub title: Option<String>,
    /// Normalized body text.
    pub body: String,
    /// Canonical URL, when known (URL mode).
    pub canonical: Option<String>,
}

impl Article {
    /// Builds an article from pasted text.
    ///
    /// When the input has at least two lines and the first is short enough
    /// to be a headline (≤ 12 words), that line is recorded as the original
    /// title. The body keeps the full text either way.
    pub fn from_pasted(raw: &str) -> Result<Self, DomainError> {
        let body = clean_text(raw);
        if body.is_empty() {
            return Err(DomainError::empty_article());
        }

        let lines: Vec<&str> = body.lines().collect();
        let title = match lines.as_slice() {
            [first, _, ..] if word_count(first) <= MAX_HEADLINE_WORDS => {
                Some((*first).to_string())
            }
            _ => None,
        };

        Ok(Self {
            title,
            body,
            canonical: None,
        })
    }

    /// Builds an article from a fetched page.
    pub fn from_extraction(
        title: Option<String>,
        body: &str,
        canonical: Option<String>,
    ) -> Result<Self, DomainError> {
        let body = clean_text(body);
        if body.is_empty() {
            return Err(DomainError::empty_article());
        }
        Ok(Self {
            title: title.filter(|t| !t.trim().is_empty()),
            body,
            canonical,
        })
    }

    /// Splits a pasted submission into individual articles.
    ///
    /// Articles are separated by lines of three or more hyphens. Empty
    /// segments are skipped; an input with no usable segment yields an
    /// empty vector.
    pub fn split_pasted(raw: &str) -> Vec<Self> {
        ARTICLE_SEPARATOR
            .split(raw)
            .filter_map(|part| Self::from_pasted(part).ok())
            .collect()
    }

    /// Word count of the normalized body.
    pub fn body_words(&self) -> usize {
        word_count(&self.body)
    }
}
