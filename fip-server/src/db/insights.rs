//! Insights table operations

use fip_analysis::AnalysisResult;
use fip_common::time::{from_db_string, to_db_string};
use fip_common::{Error, Result};
use sqlx::{Row, SqlitePool};

use crate::models::InsightRow;

/// Column values for one insight row, JSON fields already encoded
#[derive(Debug, Clone, Default)]
pub struct StoredInsight<'a> {
    pub sentiment_score: Option<f64>,
    pub sentiment_label: Option<&'a str>,
    pub themes: Option<&'a str>,
    pub recommendations: Option<&'a str>,
}

/// Store an analysis result for a feedback message
///
/// Themes and recommendations are stored as JSON text.
pub async fn insert_insight(pool: &SqlitePool, feedback_id: i64, analysis: &AnalysisResult) -> Result<i64> {
    let themes = serde_json::to_string(&analysis.themes)?;
    let recommendations = serde_json::to_string(&analysis.recommendations)?;

    insert_stored_insight(
        pool,
        feedback_id,
        &StoredInsight {
            sentiment_score: Some(analysis.sentiment_score),
            sentiment_label: Some(analysis.sentiment_label.as_str()),
            themes: Some(&themes),
            recommendations: Some(&recommendations),
        },
        &to_db_string(&analysis.processed_at),
    )
    .await
}

/// Insert pre-encoded insight columns
///
/// # Errors
/// `Error::NotFound` if `feedback_id` does not reference a stored message.
pub async fn insert_stored_insight(
    pool: &SqlitePool,
    feedback_id: i64,
    insight: &StoredInsight<'_>,
    processed_at: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO insights (
            feedback_id, sentiment_score, sentiment_label, themes, recommendations, processed_at
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(feedback_id)
    .bind(insight.sentiment_score)
    .bind(insight.sentiment_label)
    .bind(insight.themes)
    .bind(insight.recommendations)
    .bind(processed_at)
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            Error::NotFound(format!("feedback {}", feedback_id))
        }
        other => Error::Database(other),
    })?;

    Ok(result.last_insert_rowid())
}

/// Every insight joined with its feedback message, in insertion order
pub async fn load_insight_rows(pool: &SqlitePool) -> Result<Vec<InsightRow>> {
    let rows = sqlx::query(
        r#"
        SELECT i.feedback_id, f.message, f.timestamp,
               i.sentiment_score, i.themes, i.recommendations
        FROM insights i
        JOIN feedback f ON f.id = i.feedback_id
        ORDER BY i.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let timestamp: String = row.get("timestamp");
            Ok(InsightRow {
                feedback_id: row.get("feedback_id"),
                message: row.get("message"),
                feedback_timestamp: from_db_string(&timestamp)?,
                sentiment_score: row.get("sentiment_score"),
                themes: row.get("themes"),
                recommendations: row.get("recommendations"),
            })
        })
        .collect()
}
