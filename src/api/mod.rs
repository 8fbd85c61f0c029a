//! API module for HTTP endpoints
//!
//! This module provides the REST API consumed by the community web UI.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
