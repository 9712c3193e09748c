//! Primary entity guessing.
//!
//! Finds the subject a headline should lead with: a known public figure or
//! organization when one is mentioned, otherwise the most frequent
//! Titlecase name in the text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::stopwords::is_stopword;

/// Returned when no entity can be found.
pub const FALLBACK_ENTITY: &str = "Breaking News";

/// Entities recognized outright, checked before frequency analysis.
const KNOWN_ENTITIES: &[&str] = &[
    "Shashi Tharoor",
    "Veer Savarkar",
    "Congress",
    "BJP",
    "Rajasthan",
    "Jaipur",
    "Delhi",
];

/// Byline/caption words that disqualify a Titlecase candidate.
const AUTHOR_NOISE: &[&str] = &[
    "by", "staff", "reporter", "updated", "written", "photo", "image", "author",
];

static MULTI_TITLECASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]+\s+[A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)\b")
        .expect("multi-word titlecase regex")
});

static SINGLE_TITLECASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-zA-Z]{2,})\b").expect("single titlecase regex"));

fn contains_author_noise(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    AUTHOR_NOISE.iter().any(|noise| lower.contains(noise))
}

/// Best guess at the article's primary entity.
///
/// Known entities win outright. Otherwise multi-word Titlecase sequences
/// (weight 2) and standalone Titlecase words (weight 1) are tallied, with
/// byline noise filtered out. Falls back to [`FALLBACK_ENTITY`].
pub fn primary_entity(text: &str) -> String {
    if text.trim().is_empty() {
        return FALLBACK_ENTITY.to_string();
    }

    let lower_text = text.to_lowercase();
    for known in KNOWN_ENTITIES {
        if lower_text.contains(&known.to_lowercase()) {
            return (*known).to_string();
        }
    }

    let mut freq: HashMap<String, usize> = HashMap::new();

    for cap in MULTI_TITLECASE.captures_iter(text) {
        let candidate = cap[1].to_string();
        if contains_author_noise(&candidate) {
            continue;
        }
        *freq.entry(candidate).or_insert(0) += 2;
    }

    for cap in SINGLE_TITLECASE.captures_iter(text) {
        let candidate = cap[1].to_string();
        let lower = candidate.to_lowercase();
        if is_stopword(&lower) || AUTHOR_NOISE.contains(&lower.as_str()) {
            continue;
        }
        *freq.entry(candidate).or_insert(0) += 1;
    }

    freq.into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(entity, _)| entity)
        .unwrap_or_else(|| FALLBACK_ENTITY.to_string())
}
