//! Article section value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Editorial section an article belongs to.
///
/// Drives the internal link catalog, the JSON-LD `articleSection` field,
/// and the suggested canonical URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    National,
    Rajasthan,
    Business,
    Sports,
    Entertainment,
}

impl Section {
    /// Section name as used in JSON-LD and exports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::National => "National",
            Section::Rajasthan => "Rajasthan",
            Section::Business => "Business",
            Section::Sports => "Sports",
            Section::Entertainment => "Entertainment",
        }
    }

    /// Lowercase path segment for canonical URLs.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Section::National => "national",
            Section::Rajasthan => "rajasthan",
            Section::Business => "business",
            Section::Sports => "sports",
            Section::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "national" => Ok(Section::National),
            "rajasthan" => Ok(Section::Rajasthan),
            "business" => Ok(Section::Business),
            "sports" => Ok(Section::Sports),
            "entertainment" => Ok(Section::Entertainment),
            other => Err(format!("unknown section: {}", other)),
        }
    }
}
