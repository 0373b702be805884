//! Request and response types for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// POST /api/feedback body
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackCreate {
    pub message: String,
}

/// A stored feedback message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Feedback joined with its insight
///
/// Insight fields are `None` until background processing has stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackWithInsights {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub sentiment_score: Option<f64>,
    pub sentiment_label: Option<String>,
    pub themes: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub insight_processed_at: Option<DateTime<Utc>>,
}

/// Raw insight row with its feedback message, input to analytics
///
/// `themes` and `recommendations` are the stored JSON text, undecoded.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRow {
    pub feedback_id: i64,
    pub message: String,
    pub feedback_timestamp: DateTime<Utc>,
    pub sentiment_score: Option<f64>,
    pub themes: Option<String>,
    pub recommendations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSentimentFeedback {
    pub feedback: String,
    pub sentiment_score: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    pub theme: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation: String,
    pub priority: Priority,
}

/// GET /api/insights response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsAnalytics {
    pub top_positive: Vec<TopSentimentFeedback>,
    pub top_negative: Vec<TopSentimentFeedback>,
    pub themes: Vec<ThemeCount>,
    pub recommendations: Vec<Recommendation>,
}
