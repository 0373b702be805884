//! Recommendation rules
//!
//! A fixed decision table over sentiment score, themes and message length.
//! Every rule that fires appends its strings in evaluation order; the list is
//! then cut to [`MAX_RECOMMENDATIONS`]. The two-string sentiment branches
//! leave room for only one more entry, so theme and length recommendations
//! are regularly crowded out.

use tracing::debug;

use crate::error::PipelineError;

pub const MAX_RECOMMENDATIONS: usize = 3;

/// Scores below this trigger the negative-handling branch
pub const NEGATIVE_SCORE_THRESHOLD: f64 = -0.3;
/// Scores above this trigger the positive-leverage branch
pub const POSITIVE_SCORE_THRESHOLD: f64 = 0.3;
/// Messages with more words than this warrant a follow-up discussion
pub const LONG_MESSAGE_WORDS: usize = 50;

pub const IMPROVEMENT_KEYWORDS: &[&str] = &["bug", "error", "slow", "difficult", "confusing", "problem"];
pub const FEATURE_KEYWORDS: &[&str] = &["feature", "functionality", "option", "tool", "capability"];

pub const NEGATIVE_RESPONSE: &str = "Address customer concerns urgently and follow up directly";
pub const NEGATIVE_ROOT_CAUSE: &str = "Investigate critical issues raised in this feedback";
pub const POSITIVE_SHOWCASE: &str = "Highlight this positive experience in testimonials";
pub const POSITIVE_REINFORCE: &str = "Reinforce the strengths mentioned in this feedback";
pub const NEUTRAL_FOLLOW_UP: &str = "Follow up to gather more detailed feedback";
pub const PRIORITIZE_FIXES: &str = "Prioritize fixes for reported issues";
pub const CONSIDER_FEATURES: &str = "Consider the requested features for the product roadmap";
pub const SCHEDULE_DISCUSSION: &str = "Schedule a follow-up discussion for detailed feedback";

/// Returned alone when any pipeline stage fails
pub const FALLBACK_RECOMMENDATION: &str = "Error processing feedback - manual review required";

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the sentiment, theme and length rules in order
    ///
    /// All rules run; nothing short-circuits. Only the first
    /// [`MAX_RECOMMENDATIONS`] produced strings are kept.
    pub fn generate(
        &self,
        message: &str,
        sentiment_score: f64,
        themes: &[String],
    ) -> Result<Vec<String>, PipelineError> {
        let mut recommendations: Vec<&'static str> = Vec::new();

        if sentiment_score < NEGATIVE_SCORE_THRESHOLD {
            recommendations.extend([NEGATIVE_RESPONSE, NEGATIVE_ROOT_CAUSE]);
        } else if sentiment_score > POSITIVE_SCORE_THRESHOLD {
            recommendations.extend([POSITIVE_SHOWCASE, POSITIVE_REINFORCE]);
        } else {
            recommendations.push(NEUTRAL_FOLLOW_UP);
        }

        if mentions_any(themes, IMPROVEMENT_KEYWORDS) {
            recommendations.push(PRIORITIZE_FIXES);
        }
        if mentions_any(themes, FEATURE_KEYWORDS) {
            recommendations.push(CONSIDER_FEATURES);
        }

        if message.split_whitespace().count() > LONG_MESSAGE_WORDS {
            recommendations.push(SCHEDULE_DISCUSSION);
        }

        if recommendations.len() > MAX_RECOMMENDATIONS {
            debug!(
                dropped = ?&recommendations[MAX_RECOMMENDATIONS..],
                "Recommendation budget exceeded"
            );
        }

        Ok(recommendations
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(str::to_string)
            .collect())
    }
}

fn mentions_any(themes: &[String], keywords: &[&str]) -> bool {
    themes.iter().any(|theme| keywords.contains(&theme.as_str()))
}
