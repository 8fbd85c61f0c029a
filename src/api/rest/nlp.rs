//! Question answering endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::{non_blank, run_blocking, ApiError};
use crate::api::state::AppState;
use crate::nlp::answer_question;
use crate::types::QaAnswer;

/// Request body for question answering
#[derive(Debug, Deserialize)]
pub struct QaRequest {
    pub question: Option<String>,
}

/// POST /api/nlp/qa - Answer a question from the most recent posts
pub async fn answer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QaRequest>, JsonRejection>,
) -> Result<Json<QaAnswer>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let question = non_blank(request.question.as_deref())
        .ok_or_else(|| ApiError::bad_request("Field 'question' is required"))?;

    let recent = state.store.recent_posts(state.limits.qa_window)?;
    let registry = Arc::clone(&state.registry);
    let question = question.to_string();
    let limit = state.limits.qa_references;

    let answer =
        run_blocking(move || answer_question(&registry, &question, &recent, limit)).await?;

    Ok(Json(answer))
}
