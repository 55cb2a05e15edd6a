//! Error types for the codec.

use gridsync_model::ModelError;
use gridsync_types::ItemError;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while encoding or decoding layouts.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not valid JSON, or an item is missing a required field.
    #[error("decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON of the wrong shape.
    #[error("decode error: expected {0}")]
    Shape(&'static str),

    /// Item decoded but violates its own constraints.
    #[error("decode error: {0}")]
    InvalidItem(#[from] ItemError),

    /// Encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Model rejected a decoded value.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CodecError {
    /// True for every failure caused by malformed input.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Shape(_) | Self::InvalidItem(_))
    }
}
