//! URL slug generation.

use deunicode::deunicode;

use super::headline::clamp;
use super::stopwords::is_en_stopword;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 64;

/// Derives a URL-safe slug from a title.
///
/// The title is transliterated to ASCII (Hindi and typographic characters
/// included), lowercased, reduced to `[a-z0-9_-]` segments, and stripped
/// of English stopword segments. The result is clamped to 64 characters
/// and never starts or ends with a hyphen.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase();

    let kept: String = ascii
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let hyphenated = kept.replace(' ', "-");
    let segments: Vec<&str> = hyphenated
        .split('-')
        .filter(|seg| !seg.is_empty() && !is_en_stopword(seg))
        .collect();

    clamp(&segments.join("-"), MAX_SLUG_LEN)
        .trim_matches('-')
        .to_string()
}

/// Returns a slug satisfying the slug rules, re-deriving it when the
/// supplied value does not.
///
/// A well-formed slug passes through untouched, so externally supplied
/// slugs (e.g. from an AI rewrite plan) are kept when they are usable.
pub fn normalize_slug(candidate: &str) -> String {
    if is_well_formed(candidate) {
        candidate.to_string()
    } else {
        slugify(candidate)
    }
}

fn is_well_formed(slug: &str) -> bool {
    !slug.is_empty()
        && slug.chars().count() <= MAX_SLUG_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title_slugifies() {
        assert_eq!(
            slugify("Cabinet approves new metro line"),
            "cabinet-approves-new-metro-line"
        );
    }

    #[test]
    fn stopword_segments_are_dropped() {
        assert_eq!(slugify("The verdict of the court"), "verdict-court");
    }

    #[test]
    fn punctuation_is_removed() {
        assert_eq!(slugify("Breaking: votes, counted!"), "breaking-votes-counted");
    }

    #[test]
    fn hindi_title_transliterates() {
        let slug = slugify("कांग्रेस अधिवेशन");
        assert!(!slug.is_empty());
        assert!(slug.is_ascii(), "got: {}", slug);
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn slug_never_exceeds_limit() {
        let long = "word ".repeat(50);
        assert!(slugify(&long).chars().count() <= MAX_SLUG_LEN);
    }

    #[test]
    fn no_leading_or_trailing_hyphen() {
        let slug = slugify("--- spaced out title ---");
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn underscores_are_preserved() {
        assert_eq!(slugify("file_name update"), "file_name-update");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn normalize_keeps_well_formed_slugs() {
        assert_eq!(
            normalize_slug("jaipur-metro-phase-2"),
            "jaipur-metro-phase-2"
        );
        assert_eq!(normalize_slug("file_name-update"), "file_name-update");
    }

    #[test]
    fn normalize_rederives_malformed_slugs() {
        assert_eq!(
            normalize_slug("Invalid Slug!! With Spaces"),
            "invalid-slug-spaces"
        );
        assert_eq!(normalize_slug("-edge-hyphens-"), "edge-hyphens");
    }

    #[test]
    fn normalize_shortens_overlong_slugs() {
        let long = "segment-".repeat(20);
        let normalized = normalize_slug(&long);
        assert!(normalized.chars().count() <= MAX_SLUG_LEN);
        assert!(!normalized.ends_with('-'));
    }
}
