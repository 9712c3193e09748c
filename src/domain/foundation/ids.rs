//! Strongly-typed identifier value objects.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Where an article came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleOrigin {
    /// Fetched from a published URL.
    Url,
    /// Pasted into the request body.
    Pasted,
}

impl ArticleOrigin {
    fn prefix(&self) -> &'static str {
        match self {
            ArticleOrigin::Url => "URLART",
            ArticleOrigin::Pasted => "PASTEART",
        }
    }
}

/// Identifier for one analyzed article.
///
/// Shaped `PREFIX-YYYYmmddHHMMSS-xxxxxxxx` so export filenames sort by
/// submission time; the UUID suffix keeps concurrent submissions distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Generates a fresh id for the given origin.
    pub fn generate(origin: ArticleOrigin) -> Self {
        let stamp = Utc::now().format("%Y%m%d%H%M%S");
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}-{}", origin.prefix(), stamp, &suffix[..8]))
    }

    /// Wraps an existing id string (round-tripped through an export request).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
