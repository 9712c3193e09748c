//! Plain-text utilities shared by the SEO heuristics.
//!
//! All functions treat the article as Unicode text; Hindi (Devanagari)
//! and English content flow through the same paths. The sentence splitter
//! recognizes the danda (`।`) alongside ASCII sentence enders.

use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation stripped from token edges.
const EDGE_PUNCT: &[char] = &[
    '.', ',', ':', ';', '!', '?', '\'', '"', '(', ')', '[', ']', '{', '}', '“', '”', '‘', '’',
    '-', '–', '—', '|', '/', '\\',
];

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[।.?!]\s+").expect("sentence splitter regex"));

/// Normalizes article text.
///
/// Whitespace inside each line collapses to single spaces; blank lines are
/// dropped so that every remaining line is one paragraph. Carriage returns
/// are removed.
pub fn clean_text(raw: &str) -> String {
    raw.replace('\r', "")
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits cleaned text into paragraphs (one per line after [`clean_text`]).
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Lowercased tokens with edge punctuation stripped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(EDGE_PUNCT))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits text into sentences on `.`, `?`, `!`, or the danda `।`.
///
/// The ending punctuation stays attached to its sentence; only the
/// whitespace after it is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for found in SENTENCE_END.find_iter(trimmed) {
        let ender_len = trimmed[found.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let sentence = trimmed[start..found.start() + ender_len].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = found.end();
    }

    let tail = trimmed[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// First sentence of the text, or the whole text when it has no sentence break.
pub fn first_sentence(text: &str) -> &str {
    split_sentences(text).first().copied().unwrap_or(text)
}
