//! Post endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{present, rank_documents, ApiError};
use crate::api::state::AppState;
use crate::types::{NewPost, Post};
use crate::utils::current_timestamp_ms;

/// Query parameters for listing posts
#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    /// Optional free-text query; ranks the listing when present
    pub q: Option<String>,
}

/// GET /api/posts - List posts
///
/// Without `q` every post is returned newest first. With `q` only posts
/// scoring above zero are returned, each with a `score`, best first.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListPostsParams>,
) -> Result<Response, ApiError> {
    let posts = state.store.posts_by_recency()?;

    let Some(query) = present(params.q.as_deref()) else {
        return Ok(Json(posts).into_response());
    };

    let ranked = rank_documents(&state.registry, query, posts, None).await?;
    Ok(Json(ranked).into_response())
}

/// GET /api/posts/:id - Get single post
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    state
        .store
        .post(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Post '{}' not found", id)))
}

/// POST /api/posts - Create a post
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    insert_post(&state, request)
}

/// Validate a post request and store it
pub(crate) fn insert_post(
    state: &AppState,
    request: NewPost,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let post = Post {
        id: uuid::Uuid::new_v4().to_string(),
        community_id: request.community_id.unwrap_or_default().trim().to_string(),
        author_id: request.author_id.unwrap_or_default().trim().to_string(),
        title: request.title.unwrap_or_default(),
        body: request.body.unwrap_or_default(),
        tags: request.tags,
        category: request.category,
        created_at: current_timestamp_ms(),
    };

    let created = state.store.create_post(post)?;
    tracing::info!(id = %created.id, community = %created.community_id, "post created");
    Ok((StatusCode::CREATED, Json(created)))
}
