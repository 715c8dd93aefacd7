//! Errors raised by the data-access layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected row shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no row in {table} matching {key}")]
    NotFound { table: String, key: String },

    #[error("backend misconfigured: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
