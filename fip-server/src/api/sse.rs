//! Server-Sent Events for feedback processing
//!
//! Streams `FeedbackSubmitted`, `InsightProcessed` and `InsightFailed`
//! events so clients can refresh without polling.

use axum::{
    extract::State,
    response::sse::{Event, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use std::convert::Infallible;

use crate::{AppState, MODULE_NAME};

/// GET /api/events
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    fip_common::sse::create_event_sse_stream(MODULE_NAME, &state.event_bus)
}

pub fn event_routes() -> Router<AppState> {
    Router::new().route("/api/events", get(event_stream))
}
