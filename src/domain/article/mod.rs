//! Article input model: normalization, tokenization, and splitting.

mod input;
mod text;

pub use input::Article;
pub use text::{clean_text, first_sentence, paragraphs, split_sentences, tokenize, word_count};
