//! Business logic behind the HTTP handlers

pub mod analytics;
pub mod insight_processor;

pub use analytics::aggregate;
pub use insight_processor::{process_feedback, spawn_insight_processing};
