//! Layout change events.

use gridsync_model::LayoutModel;
use gridsync_types::ChangeReason;

/// A committed layout change, delivered to every subscriber.
///
/// Whether the change is intermediate or final is derived from the drag and
/// resize flags on every call and is never stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutChangeEvent {
    /// Snapshot of the model after the change.
    pub layout: LayoutModel,
    /// Item the change concerns; `None` for bulk changes.
    pub affected_item_id: Option<String>,
    pub reason: ChangeReason,
    pub is_dragging: bool,
    pub is_resizing: bool,
    /// Client revision that produced the change, or the last accepted one
    /// for server-side updates.
    pub client_revision: u64,
    /// False for programmatic updates made on the server.
    pub from_client: bool,
}

impl LayoutChangeEvent {
    /// A final, server-originated change.
    pub fn server_update(layout: LayoutModel, affected_item_id: Option<String>, client_revision: u64) -> Self {
        Self {
            layout,
            affected_item_id,
            reason: ChangeReason::ServerUpdate,
            is_dragging: false,
            is_resizing: false,
            client_revision,
            from_client: false,
        }
    }

    /// An interaction is still in progress.
    pub fn is_intermediate(&self) -> bool {
        self.is_dragging || self.is_resizing
    }

    pub fn is_final(&self) -> bool {
        !self.is_intermediate()
    }
}
