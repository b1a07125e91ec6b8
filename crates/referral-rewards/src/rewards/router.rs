use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use super::domain::Scores;
use super::service::ScoringService;
use crate::error::AppError;

/// Router exposing the scoring endpoint. The request body is the raw referral log.
pub fn rewards_router(service: Arc<ScoringService>) -> Router {
    Router::new()
        .route("/rewards", post(score_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<ScoringService>>,
    body: String,
) -> Result<Json<Scores>, AppError> {
    info!(bytes = body.len(), "received referral log");
    let scores = service.score(&body)?;
    Ok(Json(scores))
}
