//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{present, rank_documents, ApiError};
use crate::api::state::AppState;
use crate::search::ScoredResult;
use crate::types::{Community, Post};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string (required)
    pub q: Option<String>,
}

/// Combined search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub posts: Vec<ScoredResult<Post>>,
    pub communities: Vec<ScoredResult<Community>>,
}

/// GET /api/search - Search posts and communities
///
/// Each kind is ranked separately and capped at the configured search limit.
/// A whitespace-only `q` is a valid query that matches nothing.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = present(params.q.as_deref())
        .ok_or_else(|| ApiError::bad_request("Query parameter 'q' is required"))?;

    let limit = Some(state.limits.search_results);
    let posts = state.store.posts_by_recency()?;
    let communities = state.store.communities()?;

    let posts = rank_documents(&state.registry, query, posts, limit).await?;
    let communities = rank_documents(&state.registry, query, communities, limit).await?;

    Ok(Json(SearchResponse {
        query: query.to_string(),
        posts,
        communities,
    }))
}
