//! Shared error type for persistence and configuration

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a JSON column
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad config file or environment value
    #[error("Configuration error: {0}")]
    Config(String),

    /// A referenced row does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
