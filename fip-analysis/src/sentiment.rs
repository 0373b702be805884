//! Sentiment scoring
//!
//! A [`PolarityModel`] turns raw text into a continuous polarity; the
//! [`SentimentScorer`] wraps a model and discretizes the score into a
//! [`SentimentLabel`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::{PipelineError, Stage};
use crate::lexicon::polarity::{INTENSIFIERS, NEGATIONS, POLARITY};

/// Scores strictly above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Multiplier for an assessment preceded by a negation
const NEGATION_FACTOR: f64 = -0.5;

/// Discretized sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed thresholds, strict on both sides: exactly ±0.1 is neutral
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and label for one message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub score: f64,
    pub label: SentimentLabel,
}

/// Text → polarity estimator
pub trait PolarityModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Polarity of `text`, conventionally in [-1, 1]
    fn polarity(&self, text: &str) -> Result<f64, PipelineError>;
}

/// Lexicon polarity model
///
/// Every polarity word is one assessment. An intensifier right before it
/// scales it, a negation right before it (or before its intensifier) flips
/// and halves it.
/// The message polarity is the mean of all assessments.
#[derive(Debug, Clone)]
pub struct LexiconPolarityModel {
    polarity: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl LexiconPolarityModel {
    pub fn english() -> Self {
        Self {
            polarity: POLARITY.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.polarity.len()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    fn sentence_assessments(&self, sentence: &str, out: &mut Vec<f64>) {
        let mut negated = false;
        let mut intensity: Option<f64> = None;

        for word in words(sentence) {
            if let Some(&value) = self.polarity.get(word.as_str()) {
                let mut assessment = (value * intensity.unwrap_or(1.0)).clamp(-1.0, 1.0);
                if negated {
                    assessment *= NEGATION_FACTOR;
                }
                out.push(assessment);
                negated = false;
                intensity = None;
            } else if self.is_negation(&word) {
                negated = true;
                intensity = None;
            } else if let Some(&factor) = self.intensifiers.get(word.as_str()) {
                // "not very good" keeps the negation
                intensity = Some(factor);
            } else {
                // Modifiers only reach the word directly after them
                negated = false;
                intensity = None;
            }
        }
    }
}

impl Default for LexiconPolarityModel {
    fn default() -> Self {
        Self::english()
    }
}

impl PolarityModel for LexiconPolarityModel {
    fn name(&self) -> &'static str {
        "lexicon-polarity"
    }

    fn polarity(&self, text: &str) -> Result<f64, PipelineError> {
        let mut assessments = Vec::new();
        for sentence in text.split(['.', '!', '?', ';', '\n']) {
            self.sentence_assessments(sentence, &mut assessments);
        }

        if assessments.is_empty() {
            return Ok(0.0);
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}

/// Lowercase words of a sentence; apostrophes stay inside words and
/// typographic ones are folded to `'`
fn words(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !(c.is_alphanumeric() || is_apostrophe(c)))
        .map(|w| w.trim_matches(is_apostrophe))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'"))
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{2018}')
}

/// Sentiment stage of the pipeline
#[derive(Clone)]
pub struct SentimentScorer {
    model: Arc<dyn PolarityModel>,
}

impl SentimentScorer {
    pub fn new(model: Arc<dyn PolarityModel>) -> Self {
        Self { model }
    }

    /// Score `text` and derive its label
    ///
    /// # Errors
    /// Fails if the model fails or returns a non-finite score.
    pub fn score(&self, text: &str) -> Result<SentimentResult, PipelineError> {
        let score = self.model.polarity(text)?;

        if !score.is_finite() {
            return Err(PipelineError::stage_failed(
                Stage::Sentiment,
                format!("{} returned non-finite score {}", self.model.name(), score),
            ));
        }

        let label = SentimentLabel::from_score(score);
        debug!(model = self.model.name(), score, label = %label, "Scored sentiment");

        Ok(SentimentResult { score, label })
    }
}
