//! Error types
//!
//! The matching engine itself is total and never fails; errors only come
//! from loading configuration and from the storage layer.

use thiserror::Error;

/// Failure to load startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Storage failures, mapped to HTTP statuses at the API boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("community '{0}' not found")]
    UnknownCommunity(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
