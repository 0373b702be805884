//! # Feedback Insights Common Library
//!
//! Shared code for the feedback insights workspace:
//! - Error type used by persistence and configuration
//! - Configuration loading and root folder resolution
//! - SQLite database initialization
//! - Event types and the broadcast EventBus
//! - SSE helpers
//! - Timestamp utilities

pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod sse;
pub mod time;

pub use error::{Error, Result};
