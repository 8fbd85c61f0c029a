//! Community endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::posts::insert_post;
use super::{non_blank, present, ApiError};
use crate::api::state::AppState;
use crate::types::{Community, NewCommunity, NewPost, Post};
use crate::utils::current_timestamp_ms;

/// Query parameters for listing communities
#[derive(Debug, Default, Deserialize)]
pub struct CommunityFilter {
    pub country: Option<String>,
    /// Communities without a language match every language
    pub language: Option<String>,
}

impl CommunityFilter {
    pub fn matches(&self, community: &Community) -> bool {
        let country_ok = present(self.country.as_deref())
            .map_or(true, |country| community.country.as_deref() == Some(country));

        let language_ok = present(self.language.as_deref()).map_or(true, |language| {
            community
                .language
                .as_deref()
                .map_or(true, |l| l == language)
        });

        country_ok && language_ok
    }
}

/// GET /api/communities - List communities, newest first
pub async fn list_communities(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CommunityFilter>,
) -> Result<Json<Vec<Community>>, ApiError> {
    let mut communities = state.store.communities()?;
    communities.retain(|c| filter.matches(c));
    Ok(Json(communities))
}

/// POST /api/communities - Create a community
pub async fn create_community(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewCommunity>, JsonRejection>,
) -> Result<(StatusCode, Json<Community>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let (Some(title), Some(country)) = (
        non_blank(request.title.as_deref()),
        non_blank(request.country.as_deref()),
    ) else {
        return Err(ApiError::bad_request("Fields 'title' and 'country' are required"));
    };

    let community = Community {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: request.description,
        country: Some(country.to_string()),
        language: request.language.filter(|l| !l.trim().is_empty()),
        tags: request.tags,
        created_by: request.created_by,
        created_at: current_timestamp_ms(),
    };

    let created = state.store.create_community(community)?;
    tracing::info!(id = %created.id, "community created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/communities/:id/posts - Posts of one community, newest first
pub async fn list_community_posts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.store.community_posts(&id)?))
}

/// POST /api/communities/:id/posts - Create a post in a community
pub async fn create_community_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let Json(mut request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    request.community_id = Some(id);
    insert_post(&state, request)
}
