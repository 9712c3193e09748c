//! Image alt-text suggestions.

use super::entity::primary_entity;
use super::headline::clamp;
use super::keywords::top_keywords;

/// Maximum alt text length in characters.
pub const MAX_ALT_LEN: usize = 80;

/// Suggests `count` alt texts built from the primary entity and top keywords.
pub fn alt_texts(text: &str, count: usize) -> Vec<String> {
    let entity = primary_entity(text);
    let kws = top_keywords(text, 4);

    let mut parts = vec![entity];
    parts.extend(kws.into_iter().take(2));
    let base = parts.join(" ").trim().to_string();
    let base = if base.is_empty() {
        "news image".to_string()
    } else {
        base
    };

    (1..=count)
        .map(|i| clamp(&format!("{} - scene {}", base, i), MAX_ALT_LEN))
        .collect()
}
