//! Insight analytics endpoint

use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use crate::error::ApiResult;
use crate::models::InsightsAnalytics;
use crate::services::analytics;
use crate::{db, AppState};

/// GET /api/insights
///
/// Aggregated over every stored insight on each request.
pub async fn get_insights(State(state): State<AppState>) -> ApiResult<Json<InsightsAnalytics>> {
    let rows = db::load_insight_rows(&state.db).await?;
    debug!(rows = rows.len(), "Aggregating insights");

    Ok(Json(analytics::aggregate(&rows)))
}

pub fn insights_routes() -> Router<AppState> {
    Router::new().route("/api/insights", get(get_insights))
}
