//! Server configuration from environment variables
//!
//! Environment:
//! - COMMUNITY_HOST: Bind address (default 0.0.0.0)
//! - COMMUNITY_PORT: Listen port (default 4000)
//! - COMMUNITY_DATA_FILE: JSONL file with communities and posts (default: demo data)
//! - COMMUNITY_SYNONYMS_FILE: JSON synonym classes (default: built-in classes)
//! - COMMUNITY_REQUEST_TIMEOUT_SECS: Per-request timeout (default 10)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Maximum posts and communities returned by combined search, per kind
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Maximum references cited by a QA answer
pub const QA_REFERENCE_LIMIT: usize = 3;

/// Number of most recent posts a QA answer is drawn from
pub const QA_RECENT_WINDOW: usize = 50;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Result caps for the ranking consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    pub search_results: usize,
    pub qa_references: usize,
    pub qa_window: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            search_results: SEARCH_RESULT_LIMIT,
            qa_references: QA_REFERENCE_LIMIT,
            qa_window: QA_RECENT_WINDOW,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_file: Option<PathBuf>,
    pub synonyms_file: Option<PathBuf>,
    pub request_timeout: Duration,
    pub limits: RankingLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: None,
            synonyms_file: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            limits: RankingLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("COMMUNITY_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("COMMUNITY_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "COMMUNITY_PORT",
                value: port.clone(),
            })?;
        }

        config.data_file = lookup("COMMUNITY_DATA_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        config.synonyms_file = lookup("COMMUNITY_SYNONYMS_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(secs) = lookup("COMMUNITY_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidVar {
                    name: "COMMUNITY_REQUEST_TIMEOUT_SECS",
                    value: secs.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
