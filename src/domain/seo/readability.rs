//! Readability checks.
//!
//! Cheap structural heuristics, not a full readability score: long
//! paragraphs, long articles without subheadings, and missing section
//! structure each produce an editorial note.

use crate::domain::article::{paragraphs, tokenize};

/// Paragraphs longer than this (in characters, on average) get flagged.
const MAX_AVG_PARAGRAPH_CHARS: usize = 500;

/// Articles with more tokens than this should be sectioned.
const MAX_UNSECTIONED_TOKENS: usize = 800;

/// Editorial notes about the article's readability.
///
/// Always returns at least one note; when everything passes, the note is
/// a confirmation.
pub fn readability_notes(text: &str) -> Vec<String> {
    let mut notes = Vec::new();

    let paras = paragraphs(text);
    if !paras.is_empty() {
        let avg_len: usize =
            paras.iter().map(|p| p.chars().count()).sum::<usize>() / paras.len();
        if avg_len > MAX_AVG_PARAGRAPH_CHARS {
            notes.push(
                "Keep paragraphs short (3-4 lines); split the long ones.".to_string(),
            );
        }
    }

    if tokenize(text).len() > MAX_UNSECTIONED_TOKENS {
        notes.push(
            "Shorten the intro and break the article into sections with H2/H3 subheadings."
                .to_string(),
        );
    }

    let has_headings = ["\n##", "\n###", "H2", "H3"].iter().any(|h| text.contains(h));
    if !has_headings {
        notes.push(
            "Add at least two subheadings: background, statements/reactions, context."
                .to_string(),
        );
    }

    if notes.is_empty() {
        notes.push(
            "Readability looks fine; keep paragraphs short and subheadings clear.".to_string(),
        );
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_paragraphs_are_flagged() {
        let text = "x".repeat(600);
        let notes = readability_notes(&text);
        assert!(notes.iter().any(|n| n.contains("paragraphs short")));
    }

    #[test]
    fn long_articles_need_sections() {
        let text = format!("{}\nH2 present", "word ".repeat(900));
        let notes = readability_notes(&text);
        assert!(notes.iter().any(|n| n.contains("H2/H3")));
    }

    #[test]
    fn missing_headings_are_flagged() {
        let notes = readability_notes("Short piece without any structure markers.");
        assert!(notes.iter().any(|n| n.contains("subheadings")));
    }

    #[test]
    fn clean_article_gets_positive_note() {
        let text = "Short intro.\n## Background\nDetails here.";
        let notes = readability_notes(text);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("Readability looks fine"));
    }

    #[test]
    fn notes_are_never_empty() {
        assert!(!readability_notes("").is_empty());
    }
}
