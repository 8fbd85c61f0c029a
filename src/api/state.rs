//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use crate::config::{RankingLimits, ServerConfig};
use crate::search::SynonymRegistry;
use crate::store::ContentStore;

/// State shared by every request handler
pub struct AppState {
    /// Community and post storage
    pub store: Arc<dyn ContentStore>,

    /// Read-only synonym registry, built once at startup
    pub registry: Arc<SynonymRegistry>,

    /// Result caps for search and question answering
    pub limits: RankingLimits,

    /// Overall timeout for a request (document fetch + scoring)
    pub request_timeout: Duration,
}

impl AppState {
    /// Create state with default limits and timeout
    pub fn new(store: Arc<dyn ContentStore>, registry: Arc<SynonymRegistry>) -> Self {
        let defaults = ServerConfig::default();
        Self {
            store,
            registry,
            limits: defaults.limits,
            request_timeout: defaults.request_timeout,
        }
    }

    /// Create state using the limits and timeout from a server config
    pub fn with_config(
        store: Arc<dyn ContentStore>,
        registry: Arc<SynonymRegistry>,
        config: &ServerConfig,
    ) -> Self {
        Self {
            store,
            registry,
            limits: config.limits,
            request_timeout: config.request_timeout,
        }
    }
}
