//! Error types

use thiserror::Error;

/// Errors raised while decoding a source hierarchy
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("source must be a JSON array, got {0}")]
    NotAnArray(&'static str),

    #[error("item at {path} is not an object")]
    NotAnObject { path: String },

    #[error("item at {path} has no usable `{field}` field")]
    MissingKey { path: String, field: String },

    #[error("item at {path} has a `{field}` field that is not an array")]
    InvalidChildren { path: String, field: String },

    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse source: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransferError>;
