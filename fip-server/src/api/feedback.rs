//! Feedback submission and listing

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use fip_common::events::FeedbackEvent;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::{FeedbackCreate, FeedbackRecord, FeedbackWithInsights};
use crate::services::spawn_insight_processing;
use crate::{db, AppState};

/// POST /api/feedback
///
/// Stores the trimmed message and queues it for analysis. The insight
/// appears later in GET /api/feedback and is announced over SSE.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackCreate>,
) -> ApiResult<(StatusCode, Json<FeedbackRecord>)> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Feedback message cannot be empty".to_string()));
    }

    let record = db::insert_feedback(&state.db, message).await?;
    info!(feedback_id = record.id, "Feedback stored");

    state.event_bus.emit_lossy(FeedbackEvent::FeedbackSubmitted {
        feedback_id: record.id,
        timestamp: record.created_at,
    });

    spawn_insight_processing(&state, record.id, record.message.clone());

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/feedback
pub async fn list_feedback(State(state): State<AppState>) -> ApiResult<Json<Vec<FeedbackWithInsights>>> {
    let feedback = db::list_feedback_with_insights(&state.db).await?;
    Ok(Json(feedback))
}

pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/api/feedback", get(list_feedback).post(submit_feedback))
}
