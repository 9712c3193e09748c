//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM rewrite providers (OpenAI, mock)
//! - `extract` - URL fetching and article extraction
//! - `export` - Bundle rendering (DOCX, HTML, JSON-LD, CSV)
//! - `http` - REST API

pub mod ai;
pub mod export;
pub mod extract;
pub mod http;
