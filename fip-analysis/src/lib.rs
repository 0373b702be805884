//! # Feedback analysis
//!
//! Rule-based text analysis for short feedback messages: lexicon polarity
//! scoring, noun/adjective theme extraction and canned recommendations.
//!
//! Everything here is in-process and CPU-bound. Callers running on an async
//! runtime should use `spawn_blocking`.

pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod recommendations;
pub mod resources;
pub mod sentiment;
pub mod tagger;
pub mod themes;

pub use error::{PipelineError, Stage};
pub use pipeline::{AnalysisResult, FeedbackPipeline};
pub use recommendations::{RecommendationGenerator, FALLBACK_RECOMMENDATION};
pub use resources::NlpResources;
pub use sentiment::{LexiconPolarityModel, PolarityModel, SentimentLabel, SentimentResult, SentimentScorer};
pub use tagger::{LexiconTagger, PosTag, PosTagger};
pub use themes::ThemeExtractor;
