//! Error types for the layout model.

use gridsync_types::ItemError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when mutating a [`crate::LayoutModel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Caller passed an argument the model cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Item failed validation (empty id, zero size, bounds violated).
    #[error("invalid item: {0}")]
    InvalidItem(#[from] ItemError),
}

impl ModelError {
    /// Both variants are caller errors; neither is ever recovered internally.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidItem(_))
    }
}
