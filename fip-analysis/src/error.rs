//! Pipeline error type

use std::fmt;
use thiserror::Error;

/// Pipeline stage identifiers, used to report where a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Sentiment,
    Themes,
    Recommendations,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Sentiment => "sentiment",
            Stage::Themes => "themes",
            Stage::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pipeline stage failed
///
/// Never escapes [`FeedbackPipeline::analyze`](crate::FeedbackPipeline::analyze):
/// the orchestrator turns it into the fallback result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {message}")]
    StageFailed { stage: Stage, message: String },
}

impl PipelineError {
    pub fn stage_failed(stage: Stage, message: impl Into<String>) -> Self {
        PipelineError::StageFailed {
            stage,
            message: message.into(),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::StageFailed { stage, .. } => *stage,
        }
    }
}
