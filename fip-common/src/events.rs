//! Event types and the in-process EventBus
//!
//! Events are broadcast over a `tokio::sync::broadcast` channel and
//! serialized for SSE transmission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Feedback lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// A feedback message was stored and queued for analysis
    FeedbackSubmitted {
        feedback_id: i64,
        timestamp: DateTime<Utc>,
    },

    /// The background processor stored an insight for a feedback message
    InsightProcessed {
        feedback_id: i64,
        sentiment_score: f64,
        sentiment_label: String,
        themes: Vec<String>,
        timestamp: DateTime<Utc>,
    },

    /// The background processor could not store an insight
    InsightFailed {
        feedback_id: i64,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl FeedbackEvent {
    /// Event name used as the SSE `event:` field
    pub fn event_type(&self) -> &'static str {
        match self {
            FeedbackEvent::FeedbackSubmitted { .. } => "FeedbackSubmitted",
            FeedbackEvent::InsightProcessed { .. } => "InsightProcessed",
            FeedbackEvent::InsightFailed { .. } => "InsightFailed",
        }
    }

    pub fn feedback_id(&self) -> i64 {
        match self {
            FeedbackEvent::FeedbackSubmitted { feedback_id, .. }
            | FeedbackEvent::InsightProcessed { feedback_id, .. }
            | FeedbackEvent::InsightFailed { feedback_id, .. } => *feedback_id,
        }
    }
}

/// Broadcast bus for [`FeedbackEvent`]s
///
/// Cloning the bus clones the sender; all clones feed the same subscribers.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<FeedbackEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus buffering up to `capacity` events per subscriber
    ///
    /// # Examples
    ///
    /// ```
    /// use fip_common::events::EventBus;
    ///
    /// let event_bus = EventBus::new(100);
    /// assert_eq!(event_bus.capacity(), 100);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedbackEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: FeedbackEvent,
    ) -> Result<usize, broadcast::error::SendError<FeedbackEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: FeedbackEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(id: i64) -> FeedbackEvent {
        FeedbackEvent::FeedbackSubmitted {
            feedback_id: id,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_emit_without_subscribers_is_error() {
        let bus = EventBus::new(10);
        assert!(bus.emit(submitted(1)).is_err());
        // Lossy emit must not panic either
        bus.emit_lossy(submitted(2));
    }

    #[tokio::test]
    async fn test_subscriber_receives_events_in_order() {
        let bus = EventBus::new(10);
        let mut rx = bus.subscribe();

        assert_eq!(bus.emit(submitted(1)).unwrap(), 1);
        bus.emit_lossy(submitted(2));

        assert_eq!(rx.recv().await.unwrap().feedback_id(), 1);
        assert_eq!(rx.recv().await.unwrap().feedback_id(), 2);
    }

    #[test]
    fn test_subscriber_count_tracks_receivers() {
        let bus = EventBus::new(10);
        assert_eq!(bus.subscriber_count(), 0);
        let rx1 = bus.subscribe();
        let _rx2 = bus.clone().subscribe();
        assert_eq!(bus.subscriber_count(), 2);
        drop(rx1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = FeedbackEvent::InsightProcessed {
            feedback_id: 7,
            sentiment_score: 0.5,
            sentiment_label: "positive".to_string(),
            themes: vec!["interface".to_string()],
            timestamp: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "InsightProcessed");
        assert_eq!(json["feedback_id"], 7);
        assert_eq!(json["themes"][0], "interface");
        assert_eq!(event.event_type(), "InsightProcessed");
    }
}
