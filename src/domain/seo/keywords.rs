//! Keyword extraction by token frequency.

use std::collections::HashMap;

use super::stopwords::is_stopword;
use crate::domain::article::tokenize;

/// Boilerplate terms that never make useful keywords for a news desk.
const NOISE_TERMS: &[&str] = &[
    "news",
    "india",
    "indian",
    "said",
    "statement",
    "khabar",
    "patrika",
];

/// Top `n` keywords by frequency.
///
/// Candidates are alphabetic, non-stopword tokens minus the noise
/// blacklist. Ties break alphabetically so the result is stable.
pub fn top_keywords(text: &str, n: usize) -> Vec<String> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        if is_stopword(&token) || token.chars().any(|c| !c.is_alphabetic()) {
            continue;
        }
        if NOISE_TERMS.contains(&token.as_str()) {
            continue;
        }
        *freq.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(n).map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_frequent_words_rank_first() {
        let text = "budget budget budget minister minister parliament";
        let kws = top_keywords(text, 2);
        assert_eq!(kws, vec!["budget", "minister"]);
    }

    #[test]
    fn stopwords_are_excluded() {
        let text = "the the the the economy economy";
        let kws = top_keywords(text, 3);
        assert_eq!(kws, vec!["economy"]);
    }

    #[test]
    fn noise_terms_are_excluded() {
        let text = "news news news said said election election";
        let kws = top_keywords(text, 5);
        assert_eq!(kws, vec!["election"]);
    }

    #[test]
    fn numeric_tokens_are_excluded() {
        let text = "2024 2024 2024 verdict verdict";
        let kws = top_keywords(text, 5);
        assert_eq!(kws, vec!["verdict"]);
    }

    #[test]
    fn ties_break_alphabetically() {
        let text = "zebra apple";
        let kws = top_keywords(text, 2);
        assert_eq!(kws, vec!["apple", "zebra"]);
    }

    #[test]
    fn hindi_keywords_survive() {
        let text = "कांग्रेस कांग्रेस अधिवेशन";
        let kws = top_keywords(text, 2);
        assert_eq!(kws[0], "कांग्रेस");
    }

    #[test]
    fn empty_text_yields_no_keywords() {
        assert!(top_keywords("", 6).is_empty());
    }
}
