//! Internal link suggestions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::Section;

/// A suggested internal link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    /// Anchor text to use.
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl InternalLink {
    /// Creates a new internal link.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Per-section catalog of internal links worth suggesting.
#[derive(Debug, Clone, Default)]
pub struct LinkCatalog {
    by_section: HashMap<Section, Vec<InternalLink>>,
}

impl LinkCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The publication's built-in catalog.
    pub fn defaults() -> Self {
        let mut catalog = Self::new();
        catalog.add(
            Section::National,
            InternalLink::new(
                "Congress News",
                "https://www.patrika.com/national-news/congress/",
            ),
        );
        catalog.add(
            Section::National,
            InternalLink::new(
                "National Politics",
                "https://www.patrika.com/national-news/politics/",
            ),
        );
        catalog.add(
            Section::Rajasthan,
            InternalLink::new("Jaipur News", "https://www.patrika.com/jaipur-news/"),
        );
        catalog
    }

    /// Adds a link to a section.
    pub fn add(&mut self, section: Section, link: InternalLink) {
        self.by_section.entry(section).or_default().push(link);
    }

    /// Links suggested for a section (empty when none are cataloged).
    pub fn for_section(&self, section: Section) -> &[InternalLink] {
        self.by_section
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
