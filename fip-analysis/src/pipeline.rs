//! Feedback analysis pipeline
//!
//! Sentiment → themes → recommendations, packaged into one
//! [`AnalysisResult`]. Any stage failure (error or panic) replaces the whole
//! result with [`AnalysisResult::fallback`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::recommendations::{RecommendationGenerator, FALLBACK_RECOMMENDATION};
use crate::resources::NlpResources;
use crate::sentiment::{SentimentLabel, SentimentScorer};
use crate::themes::ThemeExtractor;

/// Analysis of one feedback message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub themes: Vec<String>,
    pub recommendations: Vec<String>,
    /// Completion time of the analysis
    pub processed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Result reported when a stage fails
    pub fn fallback() -> Self {
        Self {
            sentiment_score: 0.0,
            sentiment_label: SentimentLabel::Neutral,
            themes: Vec::new(),
            recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
            processed_at: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.sentiment_score == 0.0
            && self.sentiment_label == SentimentLabel::Neutral
            && self.themes.is_empty()
            && self.recommendations.len() == 1
            && self.recommendations[0] == FALLBACK_RECOMMENDATION
    }
}

/// Stateless orchestrator over the three stages
///
/// Holds only shared, immutable resources; `analyze` may be called from any
/// number of threads at once.
#[derive(Clone)]
pub struct FeedbackPipeline {
    scorer: SentimentScorer,
    extractor: ThemeExtractor,
    recommender: RecommendationGenerator,
}

impl FeedbackPipeline {
    pub fn new(resources: &NlpResources) -> Self {
        Self {
            scorer: SentimentScorer::new(resources.polarity_model.clone()),
            extractor: ThemeExtractor::new(resources.stopwords.clone(), resources.tagger.clone()),
            recommender: RecommendationGenerator::new(),
        }
    }

    /// Analyze one message; never fails
    ///
    /// The message is trimmed first. An empty message is not rejected, it
    /// simply scores neutral with no themes.
    pub fn analyze(&self, message: &str) -> AnalysisResult {
        match catch_unwind(AssertUnwindSafe(|| self.try_analyze(message))) {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!(stage = %e.stage(), "Feedback analysis failed, using fallback: {}", e);
                AnalysisResult::fallback()
            }
            Err(panic) => {
                warn!("Feedback analysis panicked, using fallback: {}", panic_message(&*panic));
                AnalysisResult::fallback()
            }
        }
    }

    /// Run every stage, surfacing the first failure
    ///
    /// # Errors
    /// Returns the failing stage's [`PipelineError`]; partial results are
    /// discarded.
    pub fn try_analyze(&self, message: &str) -> Result<AnalysisResult, PipelineError> {
        let message = message.trim();

        let sentiment = self.scorer.score(message)?;
        let themes = self.extractor.extract(message)?;
        let recommendations = self.recommender.generate(message, sentiment.score, &themes)?;

        debug!(
            score = sentiment.score,
            label = %sentiment.label,
            themes = themes.len(),
            recommendations = recommendations.len(),
            "Analyzed feedback"
        );

        Ok(AnalysisResult {
            sentiment_score: sentiment.score,
            sentiment_label: sentiment.label,
            themes,
            recommendations,
            processed_at: Utc::now(),
        })
    }
}

impl std::fmt::Debug for FeedbackPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackPipeline").finish_non_exhaustive()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
