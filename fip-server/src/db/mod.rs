//! Database access layer for fip-server
//!
//! Schema creation lives in `fip_common::db`; this module holds the queries.

pub mod feedback;
pub mod insights;

pub use feedback::{count_feedback, insert_feedback, list_feedback_with_insights};
pub use insights::{insert_insight, load_insight_rows};

/// Decode a stored JSON string list, treating bad JSON as empty
pub(crate) fn decode_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!("Ignoring undecodable JSON list {:?}: {}", raw, e);
        Vec::new()
    })
}
