//! Community Match Server
//!
//! Backend for a community platform where posts and communities are
//! matched against free text with a synonym-aware overlap score.
//!
//! # Features
//!
//! - **Semantic Matching**: Tokenization plus a closed synonym dictionary
//! - **Ranking**: Stable, zero-filtered ranking shared by search and listing
//! - **Question Answering**: Answers composed from the best recent posts
//! - **REST API**: Axum endpoints for posts, communities, search and QA
//!
//! # Modules
//!
//! - `search`: Tokenizer, synonym registry, semantic bags, scoring and ranking
//! - `nlp`: Question answering over recent posts
//! - `types`: Core data structures (Post, Community, QaAnswer)
//! - `store`: Storage trait and in-memory implementation
//! - `api`: HTTP router and handlers
//! - `config`: Environment configuration and ranking limits
//! - `error`: Configuration and storage errors
//! - `utils`: Utility functions (timestamps)
//!
//! # Example
//!
//! ```
//! use community_match::search::{score_text, SynonymRegistry};
//!
//! let registry = SynonymRegistry::builtin();
//! assert!(score_text(&registry, "吃饭", "推荐一家餐馆") > 0.0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod nlp;
pub mod search;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::{RankingLimits, ServerConfig};
pub use error::{ConfigError, StoreError};
pub use nlp::answer_question;
pub use search::{rank, score, ScoredResult, SemanticBag, SynonymClass, SynonymRegistry};
pub use store::{ContentStore, MemoryStore};
pub use types::{Community, Document, Post, QaAnswer, QaReference};
