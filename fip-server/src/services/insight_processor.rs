//! Background insight processing
//!
//! Each submitted message is analyzed on a blocking thread after the HTTP
//! response has been sent. The result is stored and announced on the event
//! bus. Failures are logged and reported as `InsightFailed`; there are no
//! retries.

use fip_analysis::AnalysisResult;
use fip_common::events::FeedbackEvent;
use fip_common::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::db;
use crate::AppState;

/// Spawn analysis of one stored message
pub fn spawn_insight_processing(state: &AppState, feedback_id: i64, message: String) -> JoinHandle<()> {
    let state = state.clone();

    tokio::spawn(async move {
        match process_feedback(&state, feedback_id, message).await {
            Ok(analysis) => {
                info!(
                    feedback_id,
                    sentiment = %analysis.sentiment_label,
                    themes = analysis.themes.len(),
                    "Insight processing completed"
                );
                state.event_bus.emit_lossy(FeedbackEvent::InsightProcessed {
                    feedback_id,
                    sentiment_score: analysis.sentiment_score,
                    sentiment_label: analysis.sentiment_label.to_string(),
                    themes: analysis.themes,
                    timestamp: fip_common::time::now(),
                });
            }
            Err(e) => {
                error!(feedback_id, "Insight processing failed: {}", e);
                *state.last_error.write().await = Some(format!("feedback {}: {}", feedback_id, e));
                state.event_bus.emit_lossy(FeedbackEvent::InsightFailed {
                    feedback_id,
                    error: e.to_string(),
                    timestamp: fip_common::time::now(),
                });
            }
        }
    })
}

/// Analyze a message and store the insight
pub async fn process_feedback(
    state: &AppState,
    feedback_id: i64,
    message: String,
) -> fip_common::Result<AnalysisResult> {
    let pipeline = state.pipeline.clone();

    let analysis = tokio::task::spawn_blocking(move || pipeline.analyze(&message))
        .await
        .map_err(|e| Error::Internal(format!("Analysis task failed: {}", e)))?;

    db::insert_insight(&state.db, feedback_id, &analysis).await?;

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fip_analysis::{FeedbackPipeline, NlpResources, SentimentLabel};
    use fip_common::db::init_in_memory_database;
    use fip_common::events::EventBus;

    async fn test_state() -> AppState {
        let pool = init_in_memory_database().await.unwrap();
        AppState::new(pool, EventBus::new(16), FeedbackPipeline::new(&NlpResources::english()))
    }

    #[tokio::test]
    async fn test_processing_stores_insight_and_emits_event() {
        let state = test_state().await;
        let mut rx = state.event_bus.subscribe();
        let feedback = db::insert_feedback(&state.db, "I hate how slow the dashboard is").await.unwrap();

        spawn_insight_processing(&state, feedback.id, feedback.message.clone())
            .await
            .unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "InsightProcessed");
        assert_eq!(event.feedback_id(), feedback.id);

        let list = db::list_feedback_with_insights(&state.db).await.unwrap();
        assert_eq!(list[0].sentiment_label.as_deref(), Some(SentimentLabel::Negative.as_str()));
        assert!(list[0].themes.as_ref().unwrap().contains(&"dashboard".to_string()));
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_announced() {
        let state = test_state().await;
        let mut rx = state.event_bus.subscribe();

        // No feedback row with this id
        spawn_insight_processing(&state, 42, "Orphan".to_string()).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "InsightFailed");
        assert!(state.last_error.read().await.is_some());
    }
}
