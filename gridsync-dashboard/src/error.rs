//! Error types for the dashboard facade.

use gridsync_codec::CodecError;
use gridsync_model::ModelError;
use gridsync_storage::StorageError;
use gridsync_sync::SyncError;
use thiserror::Error;

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Errors that can occur in dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The id passed alongside an item differs from the item's own id.
    #[error("id mismatch: {expected} != {found}")]
    IdMismatch { expected: String, found: String },

    /// Operation requires an existing item.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Configuration rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DashboardError {
    /// Misuse of the API by the caller, as opposed to bad input data or a
    /// failing collaborator.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::IdMismatch { .. } | Self::ItemNotFound(_) => true,
            Self::Model(e) => e.is_invalid_argument(),
            _ => false,
        }
    }

    /// Malformed layout JSON, whether from the client or from storage.
    pub fn is_decode(&self) -> bool {
        match self {
            Self::Codec(e) => e.is_decode(),
            Self::Sync(e) => e.is_decode(),
            _ => false,
        }
    }
}
