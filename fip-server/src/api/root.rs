//! Service banner

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI Feedback Platform Backend Running",
    })
}

pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}
