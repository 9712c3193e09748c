//! Headline cleanup and title suggestion.

use once_cell::sync::Lazy;
use regex::Regex;

use super::entity::{primary_entity, FALLBACK_ENTITY};
use super::keywords::top_keywords;
use crate::domain::article::first_sentence;

/// Maximum suggested title length in characters.
pub const MAX_TITLE_LEN: usize = 60;

/// Words taken from the first sentence when building a title from scratch.
const LEAD_WORDS: usize = 12;

static AUTHOR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[Bb]y[:\s]+[A-Z][\w\s.-]{1,50}$").expect("author suffix regex"));

static SEPARATOR_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[|—–:]+.*$").expect("separator tail regex"));

static TRAILING_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([Uu]pdated.*|[Ff]eatured.*|[Pp]hoto.*)$").expect("trailing noise regex")
});

/// Clamps a string to `max` characters, trimming trailing whitespace.
pub fn clamp(s: &str, max: usize) -> String {
    s.chars().take(max).collect::<String>().trim_end().to_string()
}

/// Strips byline suffixes, site-name separators, and update/photo tails
/// from a scraped or pasted headline.
pub fn clean_headline(title: &str) -> String {
    let mut t = title.trim().to_string();
    t = AUTHOR_SUFFIX.replace(&t, "").trim().to_string();
    t = SEPARATOR_TAIL.replace(&t, "").trim().to_string();
    t = TRAILING_NOISE.replace(&t, "").trim().to_string();
    t
}

fn titlecase_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Suggests an SEO title for the article.
///
/// A usable original headline is cleaned and, when there's room, enriched
/// with the top keyword. Otherwise the title is built from the first
/// sentence, led by the primary entity when one is found.
pub fn suggest_title(body: &str, original_title: Option<&str>) -> String {
    if let Some(original) = original_title {
        let cleaned = clean_headline(original);
        if cleaned.chars().count() >= 6 {
            let kws = top_keywords(body, 2);
            if let Some(first_kw) = kws.first() {
                if !cleaned.to_lowercase().contains(first_kw.as_str()) {
                    let candidate = format!("{} — {}", cleaned, titlecase_word(first_kw));
                    if candidate.chars().count() <= MAX_TITLE_LEN {
                        return clamp(&candidate, MAX_TITLE_LEN);
                    }
                }
            }
            return clamp(&cleaned, MAX_TITLE_LEN);
        }
    }

    let lead: String = first_sentence(body)
        .split_whitespace()
        .take(LEAD_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    let entity = primary_entity(body);
    let kws = top_keywords(body, 2);

    let title = if entity != FALLBACK_ENTITY {
        format!("{}: {}", entity, lead)
    } else if let Some(first_kw) = kws.first() {
        format!("{} — {}", lead, titlecase_word(first_kw))
    } else {
        lead
    };

    clamp(title.trim(), MAX_TITLE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_char_boundaries() {
        // Devanagari chars are multi-byte; byte slicing would panic.
        let clamped = clamp("कांग्रेस अधिवेशन में बड़ा फैसला हुआ आज", 10);
        assert!(clamped.chars().count() <= 10);
    }

    #[test]
    fn clamp_trims_trailing_space() {
        assert_eq!(clamp("hello world", 6), "hello");
    }

    #[test]
    fn clean_headline_strips_byline() {
        assert_eq!(
            clean_headline("Minister resigns after vote By: Ramesh Kumar"),
            "Minister resigns after vote"
        );
    }

    #[test]
    fn clean_headline_strips_site_separator() {
        assert_eq!(
            clean_headline("Big verdict today | Example Times"),
            "Big verdict today"
        );
    }

    #[test]
    fn clean_headline_strips_updated_tail() {
        assert_eq!(
            clean_headline("Election results declared Updated 5 minutes ago"),
            "Election results declared"
        );
    }

    #[test]
    fn original_title_is_kept_when_usable() {
        let body = "The cabinet approved the new infrastructure plan today.";
        let title = suggest_title(body, Some("Cabinet approves infrastructure plan"));
        assert!(title.starts_with("Cabinet approves infrastructure plan"));
        assert!(title.chars().count() <= MAX_TITLE_LEN);
    }

    #[test]
    fn missing_keyword_is_appended_when_it_fits() {
        let body = "budget budget budget talks continued";
        let title = suggest_title(body, Some("Talks continued late"));
        assert!(title.contains("Budget"), "got: {}", title);
    }

    #[test]
    fn entity_leads_generated_title() {
        let body = "Congress announced its candidate list for the state polls. More seats follow.";
        let title = suggest_title(body, None);
        assert!(title.starts_with("Congress:"), "got: {}", title);
    }

    #[test]
    fn generated_title_never_exceeds_limit() {
        let body = "word ".repeat(100);
        let title = suggest_title(&body, None);
        assert!(title.chars().count() <= MAX_TITLE_LEN);
    }

    #[test]
    fn too_short_original_is_ignored() {
        let body = "Congress leaders met in Jaipur to discuss the campaign.";
        let title = suggest_title(body, Some("Ab"));
        assert!(title.starts_with("Congress:"));
    }
}
