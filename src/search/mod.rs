//! Semantic matching with synonym expansion
//!
//! This module provides the matching engine shared by search, post listing
//! and question answering:
//! - Tokenizer for normalizing text into word tokens
//! - Synonym registry with overlapping class support
//! - Semantic bags (token sets expanded through the registry)
//! - Overlap scoring and stable ranking

mod bag;
mod ranker;
mod scorer;
mod synonyms;
mod tokenizer;

pub use bag::SemanticBag;
pub use ranker::{rank, ScoredResult};
pub use scorer::{score, score_text};
pub use synonyms::{SynonymClass, SynonymRegistry, DEFAULT_SYNONYM_CLASSES};
pub use tokenizer::{is_unsegmented, tokenize};
