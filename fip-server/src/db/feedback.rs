//! Feedback table operations

use chrono::{DateTime, Utc};
use fip_common::time::{from_db_string, to_db_string};
use fip_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::decode_string_list;
use crate::models::{FeedbackRecord, FeedbackWithInsights};

/// Insert a feedback message stamped with the current time
pub async fn insert_feedback(pool: &SqlitePool, message: &str) -> Result<FeedbackRecord> {
    insert_feedback_at(pool, message, fip_common::time::now()).await
}

/// Insert a feedback message with an explicit submission time
pub async fn insert_feedback_at(
    pool: &SqlitePool,
    message: &str,
    at: DateTime<Utc>,
) -> Result<FeedbackRecord> {
    let stamp = to_db_string(&at);

    let result = sqlx::query("INSERT INTO feedback (message, timestamp, created_at) VALUES (?, ?, ?)")
        .bind(message)
        .bind(&stamp)
        .bind(&stamp)
        .execute(pool)
        .await?;

    Ok(FeedbackRecord {
        id: result.last_insert_rowid(),
        message: message.to_string(),
        timestamp: from_db_string(&stamp)?,
        created_at: from_db_string(&stamp)?,
    })
}

/// All feedback with the latest insight for each, newest first
///
/// Ordered by `created_at` descending, then `id` descending for messages
/// created within the same microsecond.
pub async fn list_feedback_with_insights(pool: &SqlitePool) -> Result<Vec<FeedbackWithInsights>> {
    let rows = sqlx::query(
        r#"
        SELECT f.id, f.message, f.timestamp, f.created_at,
               i.sentiment_score, i.sentiment_label, i.themes, i.recommendations,
               i.processed_at
        FROM feedback f
        LEFT JOIN insights i ON i.id = (
            SELECT MAX(id) FROM insights WHERE feedback_id = f.id
        )
        ORDER BY f.created_at DESC, f.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(feedback_with_insights_from_row).collect()
}

/// Number of stored feedback messages
pub async fn count_feedback(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

fn feedback_with_insights_from_row(row: &SqliteRow) -> Result<FeedbackWithInsights> {
    let timestamp: String = row.get("timestamp");
    let created_at: String = row.get("created_at");
    let themes: Option<String> = row.get("themes");
    let recommendations: Option<String> = row.get("recommendations");
    let processed_at: Option<String> = row.get("processed_at");

    Ok(FeedbackWithInsights {
        id: row.get("id"),
        message: row.get("message"),
        timestamp: from_db_string(&timestamp)?,
        created_at: from_db_string(&created_at)?,
        sentiment_score: row.get("sentiment_score"),
        sentiment_label: row.get("sentiment_label"),
        themes: themes.as_deref().map(decode_string_list),
        recommendations: recommendations.as_deref().map(decode_string_list),
        insight_processed_at: processed_at.as_deref().map(from_db_string).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use fip_common::db::init_in_memory_database;

    #[tokio::test]
    async fn test_insert_and_count() {
        let pool = init_in_memory_database().await.unwrap();
        assert_eq!(count_feedback(&pool).await.unwrap(), 0);

        let record = insert_feedback(&pool, "Nice app").await.unwrap();
        assert!(record.id > 0);
        assert_eq!(record.message, "Nice app");
        assert_eq!(record.timestamp, record.created_at);
        assert_eq!(count_feedback(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let pool = init_in_memory_database().await.unwrap();
        let base = fip_common::time::now();
        insert_feedback_at(&pool, "First message", base).await.unwrap();
        insert_feedback_at(&pool, "Second message", base + Duration::milliseconds(100))
            .await
            .unwrap();

        let list = list_feedback_with_insights(&pool).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "Second message");
        assert_eq!(list[1].message, "First message");
    }

    #[tokio::test]
    async fn test_same_instant_breaks_ties_by_id() {
        let pool = init_in_memory_database().await.unwrap();
        let at = fip_common::time::now();
        let a = insert_feedback_at(&pool, "a", at).await.unwrap();
        let b = insert_feedback_at(&pool, "b", at).await.unwrap();

        let list = list_feedback_with_insights(&pool).await.unwrap();
        assert_eq!(list[0].id, b.id);
        assert_eq!(list[1].id, a.id);
    }

    #[tokio::test]
    async fn test_feedback_without_insight_has_null_fields() {
        let pool = init_in_memory_database().await.unwrap();
        insert_feedback(&pool, "Pending").await.unwrap();

        let list = list_feedback_with_insights(&pool).await.unwrap();
        assert_eq!(list[0].sentiment_score, None);
        assert_eq!(list[0].sentiment_label, None);
        assert_eq!(list[0].themes, None);
        assert_eq!(list[0].recommendations, None);
        assert_eq!(list[0].insight_processed_at, None);
    }
}
