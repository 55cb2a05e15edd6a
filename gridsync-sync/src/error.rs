//! Error types for the sync layer.

use crate::surface::SurfaceError;
use gridsync_codec::CodecError;
use gridsync_model::ModelError;
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
///
/// Echoes and stale events are not errors; they surface as
/// [`Delivery::Discarded`](crate::Delivery::Discarded).
#[derive(Debug, Error)]
pub enum SyncError {
    /// Inbound payload could not be parsed as a client event.
    #[error("protocol error: {0}")]
    Protocol(#[from] serde_json::Error),

    /// Items in an event or push failed to encode or decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The model rejected a mutation.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The client surface refused a property write.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl SyncError {
    /// True when the failure stems from a malformed inbound payload.
    pub fn is_decode(&self) -> bool {
        match self {
            Self::Protocol(_) => true,
            Self::Codec(e) => e.is_decode(),
            _ => false,
        }
    }
}
