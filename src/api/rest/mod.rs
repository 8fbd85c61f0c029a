//! REST API module for HTTP endpoints
//!
//! - `GET /api/posts` - List posts, ranked when `q` is given
//! - `GET /api/posts/:id` - Get single post
//! - `POST /api/posts` - Create post
//! - `GET /api/communities` - List communities, filtered by country/language
//! - `POST /api/communities` - Create community
//! - `GET /api/communities/:id/posts` - List a community's posts
//! - `POST /api/communities/:id/posts` - Create post in a community
//! - `GET /api/search` - Combined post and community search
//! - `POST /api/nlp/qa` - Answer a question from recent posts

pub mod communities;
pub mod nlp;
pub mod posts;
pub mod search;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::StoreError;
use crate::search::{rank, ScoredResult, SynonymRegistry};
use crate::types::Document;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "BAD_REQUEST" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnknownCommunity(_) => ApiError::bad_request(e.to_string()),
            StoreError::Io { .. } => {
                tracing::error!(error = %e, "storage failure");
                ApiError::internal("Storage error")
            }
        }
    }
}

/// Trimmed, non-empty text
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Query parameter that was given with a non-empty value
///
/// Whitespace counts as a value: it is matched like any other query.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Run CPU-bound scoring off the async worker threads
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "ranking task failed");
        ApiError::internal("Ranking failed")
    })
}

/// Rank owned documents on a blocking thread, keeping the matches
pub(crate) async fn rank_documents<D>(
    registry: &Arc<SynonymRegistry>,
    query: &str,
    documents: Vec<D>,
    limit: Option<usize>,
) -> Result<Vec<ScoredResult<D>>, ApiError>
where
    D: Document + Clone + Send + Sync + 'static,
{
    let registry = Arc::clone(registry);
    let query = query.to_string();

    run_blocking(move || {
        rank(&registry, &query, &documents, |d| d.searchable_text(), limit)
            .into_iter()
            .map(|r| r.map(D::clone))
            .collect()
    })
    .await
}
