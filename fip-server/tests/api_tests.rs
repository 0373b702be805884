//! Integration tests for fip-server API endpoints

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use fip_analysis::{FeedbackPipeline, NlpResources};
use fip_common::events::EventBus;
use fip_common::time::to_db_string;
use fip_server::db::insights::{insert_stored_insight, StoredInsight};
use fip_server::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt; // for `oneshot`

/// Test helper: app state over a private in-memory database
async fn test_app_state() -> AppState {
    let pool = fip_common::db::init_in_memory_database().await.unwrap();
    AppState::new(pool, EventBus::new(100), FeedbackPipeline::new(&NlpResources::english()))
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone(), &["http://localhost:5173".to_string()])
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Store a feedback row with a hand-written insight
async fn seed(state: &AppState, message: &str, score: f64, themes: &str, recommendations: &str) {
    let feedback = fip_server::db::insert_feedback(&state.db, message).await.unwrap();
    let label = fip_analysis::SentimentLabel::from_score(score);
    insert_stored_insight(
        &state.db,
        feedback.id,
        &StoredInsight {
            sentiment_score: Some(score),
            sentiment_label: Some(label.as_str()),
            themes: Some(themes),
            recommendations: Some(recommendations),
        },
        &to_db_string(&fip_common::time::now()),
    )
    .await
    .unwrap();
}

/// Poll until every stored feedback message has an insight
async fn wait_for_insights(state: &AppState) -> Vec<Value> {
    for _ in 0..100 {
        let response = app(state).oneshot(get("/api/feedback")).await.unwrap();
        let body = body_json(response).await;
        let items = body.as_array().cloned().unwrap_or_default();
        if !items.is_empty() && items.iter().all(|f| !f["sentiment_label"].is_null()) {
            return items;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Insights were not processed in time");
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn test_root_banner() {
    let state = test_app_state().await;
    let response = app(&state).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "AI Feedback Platform Backend Running");
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = test_app_state().await;
    let response = app(&state).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fip-server");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
    assert!(body.get("last_error").is_none());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let state = test_app_state().await;
    let request = Request::builder()
        .uri("/api/feedback")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
}

// =============================================================================
// POST /api/feedback
// =============================================================================

#[tokio::test]
async fn test_post_feedback_valid_input() {
    let state = test_app_state().await;
    let response = app(&state)
        .oneshot(post_json("/api/feedback", json!({"message": "This is a test feedback message"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "This is a test feedback message");
    assert!(body["id"].is_i64());
    assert!(body["timestamp"].is_string());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_post_feedback_trims_message() {
    let state = test_app_state().await;
    let response = app(&state)
        .oneshot(post_json("/api/feedback", json!({"message": "  padded  "})))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["message"], "padded");
}

#[tokio::test]
async fn test_post_feedback_empty_message() {
    let state = test_app_state().await;
    let response = app(&state)
        .oneshot(post_json("/api/feedback", json!({"message": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().to_lowercase().contains("empty"));
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_post_feedback_whitespace_only() {
    let state = test_app_state().await;
    let response = app(&state)
        .oneshot(post_json("/api/feedback", json!({"message": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fip_server::db::count_feedback(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_post_feedback_missing_message() {
    let state = test_app_state().await;
    let response = app(&state)
        .oneshot(post_json("/api/feedback", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_submitted_feedback_gets_processed_in_background() {
    let state = test_app_state().await;
    let response = app(&state)
        .oneshot(post_json(
            "/api/feedback",
            json!({"message": "This app is terrible. It crashes constantly and the UI is confusing."}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let items = wait_for_insights(&state).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["sentiment_label"], "negative");
    assert!(items[0]["sentiment_score"].as_f64().unwrap() < 0.0);
    assert!(items[0]["themes"].is_array());
    let recommendations = items[0]["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty() && recommendations.len() <= 3);
    assert!(items[0]["insight_processed_at"].is_string());
}

#[tokio::test]
async fn test_submission_events_are_broadcast() {
    let state = test_app_state().await;
    let mut rx = state.event_bus.subscribe();

    app(&state)
        .oneshot(post_json("/api/feedback", json!({"message": "I love the new search tool"})))
        .await
        .unwrap();

    let first = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
    assert_eq!(first.event_type(), "FeedbackSubmitted");

    let second = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
    assert_eq!(second.event_type(), "InsightProcessed");
    assert_eq!(second.feedback_id(), first.feedback_id());
}

// =============================================================================
// GET /api/feedback
// =============================================================================

#[tokio::test]
async fn test_get_feedback_empty_database() {
    let state = test_app_state().await;
    let response = app(&state).oneshot(get("/api/feedback")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_get_feedback_with_insights() {
    let state = test_app_state().await;
    seed(&state, "Test message", 0.5, r#"["quality","performance"]"#, r#"["Keep up the good work"]"#).await;

    let response = app(&state).oneshot(get("/api/feedback")).await.unwrap();
    let body = body_json(response).await;

    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["sentiment_score"], 0.5);
    assert_eq!(body[0]["sentiment_label"], "positive");
    assert_eq!(body[0]["themes"], json!(["quality", "performance"]));
    assert_eq!(body[0]["recommendations"], json!(["Keep up the good work"]));
}

#[tokio::test]
async fn test_get_feedback_without_insights() {
    let state = test_app_state().await;
    fip_server::db::insert_feedback(&state.db, "Test message").await.unwrap();

    let response = app(&state).oneshot(get("/api/feedback")).await.unwrap();
    let body = body_json(response).await;

    assert_eq!(body.as_array().unwrap().len(), 1);
    assert!(body[0]["sentiment_score"].is_null());
    assert!(body[0]["themes"].is_null());
    assert!(body[0]["recommendations"].is_null());
}

#[tokio::test]
async fn test_feedback_ordering() {
    let state = test_app_state().await;
    fip_server::db::insert_feedback(&state.db, "First message").await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    fip_server::db::insert_feedback(&state.db, "Second message").await.unwrap();

    let response = app(&state).oneshot(get("/api/feedback")).await.unwrap();
    let body = body_json(response).await;

    assert_eq!(body[0]["message"], "Second message");
    assert_eq!(body[1]["message"], "First message");
}

// =============================================================================
// GET /api/insights
// =============================================================================

#[tokio::test]
async fn test_get_insights_empty_database() {
    let state = test_app_state().await;
    let response = app(&state).oneshot(get("/api/insights")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"top_positive": [], "top_negative": [], "themes": [], "recommendations": []})
    );
}

#[tokio::test]
async fn test_get_insights_sentiment_rankings() {
    let state = test_app_state().await;
    for i in 0..10 {
        seed(&state, &format!("Positive {}", i), 0.1 + i as f64 * 0.05, "[]", "[]").await;
    }
    for i in 0..3 {
        seed(&state, &format!("Negative {}", i), -0.5 - i as f64 * 0.1, "[]", "[]").await;
    }

    let body = body_json(app(&state).oneshot(get("/api/insights")).await.unwrap()).await;

    let positive = body["top_positive"].as_array().unwrap();
    assert_eq!(positive.len(), 5);
    assert_eq!(positive[0]["feedback"], "Positive 9");
    assert!(positive[0]["sentiment_score"].as_f64() >= positive[1]["sentiment_score"].as_f64());

    let negative = body["top_negative"].as_array().unwrap();
    assert_eq!(negative.len(), 3);
    assert_eq!(negative[0]["feedback"], "Negative 2");
    assert!(negative[0]["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_insights_theme_counting_and_recommendations() {
    let state = test_app_state().await;
    seed(&state, "m0", 0.5, r#"["performance","quality"]"#, r#"["Improve performance","Add more features"]"#).await;
    seed(&state, "m1", 0.5, r#"["performance","usability"]"#, r#"["Improve performance","Fix critical bugs"]"#).await;
    seed(&state, "m2", 0.5, r#"["performance","quality"]"#, r#"["Add more features"]"#).await;

    let body = body_json(app(&state).oneshot(get("/api/insights")).await.unwrap()).await;

    assert_eq!(
        body["themes"],
        json!([
            {"theme": "performance", "count": 3},
            {"theme": "quality", "count": 2},
            {"theme": "usability", "count": 1},
        ])
    );
    assert_eq!(
        body["recommendations"],
        json!([
            {"recommendation": "Improve performance", "priority": "medium"},
            {"recommendation": "Add more features", "priority": "medium"},
            {"recommendation": "Fix critical bugs", "priority": "high"},
        ])
    );
}

#[tokio::test]
async fn test_get_insights_handles_invalid_json() {
    let state = test_app_state().await;
    seed(&state, "Test message", 0.5, "invalid json", "invalid json").await;

    let response = app(&state).oneshot(get("/api/insights")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["themes"], json!([]));
    assert_eq!(body["recommendations"], json!([]));
    assert_eq!(body["top_positive"].as_array().unwrap().len(), 1);
}

// =============================================================================
// GET /api/events
// =============================================================================

#[tokio::test]
async fn test_event_stream_is_sse() {
    let state = test_app_state().await;
    let response = app(&state).oneshot(get("/api/events")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/event-stream"));
}
