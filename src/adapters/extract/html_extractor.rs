//! HTML Extractor - Implementation of ArticleSource over HTTP.
//!
//! Fetches a page and pulls out the article text with layered heuristics:
//! `<article>` paragraphs first, then content-looking `<div>`s, then any
//! body paragraph long enough to be prose. The page title is superseded by
//! the first `<h1>` when one exists.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::ports::{ArticleSource, ExtractError, ExtractedArticle};

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Failed to parse title selector - this is a bug"));
static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("Failed to parse h1 selector - this is a bug"));
static ARTICLE_P_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article p").expect("Failed to parse article selector - this is a bug")
});
static DIV_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div").expect("Failed to parse div selector - this is a bug"));
static P_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Failed to parse p selector - this is a bug"));
static BODY_P_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body p").expect("Failed to parse body selector - this is a bug"));
static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"link[rel="canonical"]"#)
        .expect("Failed to parse canonical selector - this is a bug")
});

/// Class/id values that mark a content container.
static CONTENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(article|story|content|post|main|entry)").unwrap());

/// Content-div paragraphs must add up to more than this many words.
const MIN_DIV_BODY_WORDS: usize = 50;

/// Fallback body paragraphs must individually be longer than this many characters.
const MIN_LOOSE_PARAGRAPH_CHARS: usize = 30;

/// HTTP-backed article source.
pub struct HtmlExtractor {
    client: Client,
    user_agent: String,
    timeout: Duration,
}

impl HtmlExtractor {
    /// Creates a new extractor.
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
            timeout,
        })
    }
}

#[async_trait]
impl ArticleSource for HtmlExtractor {
    async fn fetch(&self, url: &str) -> Result<ExtractedArticle, ExtractError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ExtractError::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExtractError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    ExtractError::fetch_failed(url, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::fetch_failed(
                url,
                format!("status {}", status),
            ));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractError::fetch_failed(url, e.to_string()))?;

        debug!(url, bytes = html.len(), timeout = ?self.timeout, "page fetched");

        // scraper's Html is not Send, so parsing happens after the awaits.
        extract_from_html(&html, url)
    }
}

/// Extracts title, body, and canonical URL from a fetched page.
fn extract_from_html(html: &str, url: &str) -> Result<ExtractedArticle, ExtractError> {
    let document = Html::parse_document(html);

    let mut title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty());
    if let Some(h1) = document
        .select(&H1_SELECTOR)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
    {
        title = Some(h1);
    }

    let body = article_paragraphs(&document)
        .or_else(|| content_div_paragraphs(&document))
        .or_else(|| loose_paragraphs(&document))
        .unwrap_or_default();

    if body.is_empty() {
        return Err(ExtractError::no_content(url));
    }

    let canonical = document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string);

    Ok(ExtractedArticle {
        title,
        body,
        canonical,
    })
}

/// Paragraphs inside an `<article>` element.
fn article_paragraphs(document: &Html) -> Option<String> {
    let text = join_paragraphs(document.select(&ARTICLE_P_SELECTOR), 0);
    (!text.is_empty()).then_some(text)
}

/// Paragraphs inside a `<div>` whose class or id looks like a content container.
fn content_div_paragraphs(document: &Html) -> Option<String> {
    for div in document.select(&DIV_SELECTOR) {
        let marked = ["class", "id"]
            .iter()
            .filter_map(|attr| div.value().attr(attr))
            .any(|value| CONTENT_MARKER.is_match(value));
        if !marked {
            continue;
        }

        let ps: Vec<ElementRef> = div.select(&P_SELECTOR).collect();
        if ps.len() < 2 {
            continue;
        }

        let text = join_paragraphs(ps.into_iter(), 0);
        if text.split_whitespace().count() > MIN_DIV_BODY_WORDS {
            return Some(text);
        }
    }
    None
}

/// Any body paragraph long enough to be prose rather than chrome.
fn loose_paragraphs(document: &Html) -> Option<String> {
    let text = join_paragraphs(
        document.select(&BODY_P_SELECTOR),
        MIN_LOOSE_PARAGRAPH_CHARS,
    );
    (!text.is_empty()).then_some(text)
}

/// Joins non-empty paragraph texts with blank lines, dropping paragraphs
/// at or under `min_chars`.
fn join_paragraphs<'a>(
    elements: impl Iterator<Item = ElementRef<'a>>,
    min_chars: usize,
) -> String {
    elements
        .map(|p| element_text(p))
        .filter(|text| text.chars().count() > min_chars)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Whitespace-normalized text content of an element.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
