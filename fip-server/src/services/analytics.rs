//! Insight analytics aggregation
//!
//! Recomputed from the stored insight rows on every request.

use std::collections::{HashMap, HashSet};

use crate::db::decode_string_list;
use crate::models::{
    InsightRow, InsightsAnalytics, Priority, Recommendation, ThemeCount, TopSentimentFeedback,
};

pub const TOP_SENTIMENT_LIMIT: usize = 5;
pub const TOP_THEMES_LIMIT: usize = 10;
pub const TOP_RECOMMENDATIONS_LIMIT: usize = 10;

/// Build the analytics view from insight rows
pub fn aggregate(rows: &[InsightRow]) -> InsightsAnalytics {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut all_themes = Vec::new();
    let mut all_recommendations = Vec::new();

    for row in rows {
        if let Some(score) = row.sentiment_score {
            let item = TopSentimentFeedback {
                feedback: row.message.clone(),
                sentiment_score: score,
                timestamp: row.feedback_timestamp,
            };
            if score > 0.0 {
                positive.push(item);
            } else if score < 0.0 {
                negative.push(item);
            }
        }

        if let Some(raw) = &row.themes {
            all_themes.extend(decode_string_list(raw));
        }
        if let Some(raw) = &row.recommendations {
            all_recommendations.extend(decode_string_list(raw));
        }
    }

    // Stable sorts keep storage order among equal scores
    positive.sort_by(|a, b| b.sentiment_score.total_cmp(&a.sentiment_score));
    positive.truncate(TOP_SENTIMENT_LIMIT);
    negative.sort_by(|a, b| a.sentiment_score.total_cmp(&b.sentiment_score));
    negative.truncate(TOP_SENTIMENT_LIMIT);

    InsightsAnalytics {
        top_positive: positive,
        top_negative: negative,
        themes: count_themes(all_themes, TOP_THEMES_LIMIT),
        recommendations: unique_recommendations(all_recommendations, TOP_RECOMMENDATIONS_LIMIT),
    }
}

/// Most common themes, ties in first-seen order
fn count_themes(themes: Vec<String>, limit: usize) -> Vec<ThemeCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for theme in themes {
        let count = counts.entry(theme.clone()).or_insert(0);
        if *count == 0 {
            order.push(theme);
        }
        *count += 1;
    }

    let mut ranked: Vec<ThemeCount> = order
        .into_iter()
        .map(|theme| {
            let count = counts[&theme];
            ThemeCount { theme, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Distinct recommendations in first-seen order with a priority tag
fn unique_recommendations(recommendations: Vec<String>, limit: usize) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    recommendations
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .take(limit)
        .map(|recommendation| Recommendation {
            priority: priority_of(&recommendation),
            recommendation,
        })
        .collect()
}

pub fn priority_of(recommendation: &str) -> Priority {
    let lower = recommendation.to_lowercase();
    if lower.contains("urgent") || lower.contains("critical") {
        Priority::High
    } else {
        Priority::Medium
    }
}
