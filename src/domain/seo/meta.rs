//! Meta description suggestion.

use once_cell::sync::Lazy;
use regex::Regex;

use super::headline::clamp;
use super::keywords::top_keywords;

/// Maximum meta description length in characters.
pub const MAX_META_LEN: usize = 160;

/// Words taken from the lead of the article.
const SNIPPET_WORDS: usize = 30;

static TRAILING_BYLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(By\s+[A-Z][\w\s.]{1,40})$").expect("trailing byline regex"));

/// Suggests a meta description: the article lead plus a keyword tail.
pub fn suggest_meta(body: &str) -> String {
    let words: Vec<&str> = body.split_whitespace().collect();
    let take = words.len().min(SNIPPET_WORDS);
    let snippet = words[..take].join(" ");

    let kws = top_keywords(body, 3);
    let meta = if kws.is_empty() {
        snippet
    } else {
        format!("{} | Keywords: {}", snippet, kws.join(", "))
    };

    let meta = TRAILING_BYLINE.replace(meta.trim(), "").trim().to_string();
    clamp(&meta, MAX_META_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_contains_lead_and_keywords() {
        let body = "The state budget allocates record funds to rural schools. Teachers welcomed the budget move.";
        let meta = suggest_meta(body);
        assert!(meta.starts_with("The state budget"));
        assert!(meta.contains("Keywords:"));
        assert!(meta.contains("budget"));
    }

    #[test]
    fn meta_never_exceeds_limit() {
        let body = "word ".repeat(200);
        let meta = suggest_meta(&body);
        assert!(meta.chars().count() <= MAX_META_LEN);
    }

    #[test]
    fn short_body_uses_all_words() {
        let meta = suggest_meta("Tiny body.");
        assert!(meta.starts_with("Tiny body."));
    }

    #[test]
    fn empty_body_gives_empty_meta() {
        assert_eq!(suggest_meta(""), "");
    }
}
