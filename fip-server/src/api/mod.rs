//! HTTP API handlers for fip-server

pub mod feedback;
pub mod health;
pub mod insights;
pub mod root;
pub mod sse;

pub use feedback::{feedback_routes, list_feedback, submit_feedback};
pub use health::health_routes;
pub use insights::{get_insights, insights_routes};
pub use root::root_routes;
pub use sse::{event_routes, event_stream};
