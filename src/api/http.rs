//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::rest::{communities, nlp, posts, search};
use super::state::AppState;
use crate::utils::current_timestamp_ms;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the web UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(state.request_timeout);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route("/api/posts/:id", get(posts::get_post))
        .route(
            "/api/communities",
            get(communities::list_communities).post(communities::create_community),
        )
        .route(
            "/api/communities/:id/posts",
            get(communities::list_community_posts).post(communities::create_community_post),
        )
        .route("/api/search", get(search::search))
        .route("/api/nlp/qa", post(nlp::answer))
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": current_timestamp_ms() }))
}
