//! SEO derivation heuristics.
//!
//! Everything in this module is pure and deterministic: given the same
//! article text, the same bundle comes out. The optional LLM rewriter
//! (see `ports::rewrite_provider`) layers on top and falls back here.

mod alt_text;
mod entity;
mod headline;
mod keywords;
mod links;
mod meta;
mod readability;
mod slug;
mod stopwords;
mod suggestion;

pub use alt_text::{alt_texts, MAX_ALT_LEN};
pub use entity::{primary_entity, FALLBACK_ENTITY};
pub use headline::{clamp, clean_headline, suggest_title, MAX_TITLE_LEN};
pub use keywords::top_keywords;
pub use links::{InternalLink, LinkCatalog};
pub use meta::{suggest_meta, MAX_META_LEN};
pub use readability::readability_notes;
pub use slug::{normalize_slug, slugify, MAX_SLUG_LEN};
pub use stopwords::{is_en_stopword, is_stopword};
pub use suggestion::{Heading, SuggestionBundle, SuggestionDraft};
