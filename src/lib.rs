//! SEO Desk - Newsroom SEO Suggestion Service
//!
//! This crate derives SEO artifacts (headline, meta description, keywords,
//! URL slug, NewsArticle JSON-LD, internal links, alt text, readability
//! notes) from news articles and renders them as DOCX, JSON-LD, HTML, or CSV.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
