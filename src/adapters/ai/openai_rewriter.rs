//! OpenAI Rewriter - Implementation of RewriteProvider for OpenAI's API.
//!
//! Sends the article with a JSON-only prompt to the chat completions
//! endpoint and parses the response into a rewrite plan. Transient failures
//! are retried with exponential backoff.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::warn;

use crate::domain::article::Article;
use crate::domain::seo::{Heading, SuggestionDraft};
use crate::ports::{RewriteError, RewriteProvider, RewriterInfo};

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```(?:json)?\s*").unwrap());
static FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```$").unwrap());

/// Configuration for the OpenAI rewriter.
#[derive(Debug, Clone)]
pub struct OpenAiRewriterConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl OpenAiRewriterConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_key(Secret::new(api_key.into()))
    }

    /// Creates a configuration from an already-wrapped API key, so callers
    /// holding a `Secret` never have to expose it.
    pub fn from_key(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
            max_tokens: 800,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-backed rewrite provider.
pub struct OpenAiRewriter {
    config: OpenAiRewriterConfig,
    client: Client,
}

impl OpenAiRewriter {
    /// Creates a new rewriter with the given configuration.
    pub fn new(config: OpenAiRewriterConfig) -> Result<Self, RewriteError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RewriteError::InvalidRequest(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Builds the JSON-only rewrite prompt.
    fn build_prompt(article: &Article) -> String {
        let original_title = article.title.as_deref().unwrap_or("");
        format!(
            r#"You are an expert news editor and SEO specialist for a Hindi+English newspaper.
Input: raw news article body below, and optionally the scraped original title.
Task: produce a JSON object ONLY (no extra commentary) with these fields:
- title: a Google/SEO-friendly headline (Hindi or Hinglish allowed). 50-60 characters if possible.
- meta: an SEO meta description (150-160 chars ideal).
- slug: url-safe slug (lowercase, hyphen-separated).
- keywords: an array of 5 short keywords/phrases.
- headings: an array of section objects. Each section object: {{ "h2": "<H2 text>", "h3": ["sub1", "sub2", ...] }}. Provide at least 2 H2s if appropriate.
- paragraphs: an array of paragraph strings - rewrite the article into clear short paragraphs (3-6 lines each). Keep factual content same; do not invent facts. If facts missing, keep neutral.
- notes: short array of readability/SEO notes (2-4 items).

Constraints:
- Do NOT add new factual claims that aren't in the body. If something is unclear, keep it neutral.
- Produce clean JSON only. Use Unicode (Hindi) where natural.
- Keep title and meta within recommended lengths (truncate if necessary).
- Use the original_title as hint for tone/subject if present.

Original title:
{original_title}

Article body:
{body}

Respond with JSON only."#,
            original_title = original_title,
            body = article.body,
        )
    }

    async fn send_request(&self, article: &Article) -> Result<Response, RewriteError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a helpful assistant.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::build_prompt(article),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: 0.2,
        };

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RewriteError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    RewriteError::network(format!("connection failed: {}", e))
                } else {
                    RewriteError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, RewriteError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(RewriteError::AuthenticationFailed),
            429 => Err(RewriteError::rate_limited(Self::parse_retry_after(
                &error_body,
            ))),
            400 => {
                if error_body.contains("maximum context length")
                    || error_body.contains("context_length_exceeded")
                {
                    Err(RewriteError::ContextTooLong)
                } else {
                    Err(RewriteError::InvalidRequest(error_body))
                }
            }
            500..=599 => Err(RewriteError::unavailable(format!(
                "server error {}: {}",
                status, error_body
            ))),
            _ => Err(RewriteError::network(format!(
                "unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from the error body, defaulting to 30 seconds.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = msg.find("try again in ") {
                    let rest = &msg[idx + 13..];
                    if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                        if let Ok(secs) = rest[..num_end].parse::<u32>() {
                            return secs;
                        }
                    }
                }
            }
        }
        30
    }

    async fn parse_response(&self, response: Response) -> Result<SuggestionDraft, RewriteError> {
        let response = self.handle_response_status(response).await?;

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| RewriteError::parse(format!("failed to parse response: {}", e)))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RewriteError::parse("no choices in response"))?;

        parse_rewrite_plan(&choice.message.content)
    }
}

/// Parses the model output (possibly code-fenced) into a rewrite plan.
fn parse_rewrite_plan(content: &str) -> Result<SuggestionDraft, RewriteError> {
    let trimmed = content.trim();
    let without_open = FENCE_OPEN.replace(trimmed, "");
    let json_text = FENCE_CLOSE.replace(&without_open, "");

    let payload: RewritePayload = serde_json::from_str(&json_text)
        .map_err(|e| RewriteError::parse(format!("invalid rewrite JSON: {}", e)))?;

    Ok(SuggestionDraft {
        title: payload.title,
        meta: payload.meta,
        slug: payload.slug,
        keywords: payload.keywords,
        headings: payload
            .headings
            .into_iter()
            .map(|h| Heading { h2: h.h2, h3: h.h3 })
            .collect(),
        paragraphs: payload.paragraphs,
        notes: payload.notes,
    })
}

#[async_trait]
impl RewriteProvider for OpenAiRewriter {
    async fn rewrite(&self, article: &Article) -> Result<SuggestionDraft, RewriteError> {
        let mut last_error = RewriteError::network("no attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(article).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(plan) => return Ok(plan),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        warn!(error = %err, retry = retry_count, "rewrite attempt failed, retrying");
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    warn!(error = %err, retry = retry_count, "rewrite request failed, retrying");
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn provider_info(&self) -> RewriterInfo {
        RewriterInfo::new("openai", &self.config.model)
    }
}

// ----- OpenAI API types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// The JSON shape the model is asked to return. Every field is optional
/// so a partially filled plan still parses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RewritePayload {
    title: String,
    meta: String,
    slug: String,
    keywords: Vec<String>,
    headings: Vec<HeadingPayload>,
    paragraphs: Vec<String>,
    notes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeadingPayload {
    h2: String,
    h3: Vec<String>,
}
