//! Sync state tracking.

use serde::{Deserialize, Serialize};

/// Revision bookkeeping held by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    last_accepted_client_revision: u64,
    last_pushed_revision: Option<u64>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest client revision accepted so far (0 before any).
    pub fn last_accepted_client_revision(&self) -> u64 {
        self.last_accepted_client_revision
    }

    /// Model revision of the most recent push, if any.
    pub fn last_pushed_revision(&self) -> Option<u64> {
        self.last_pushed_revision
    }

    /// Whether an inbound event carrying `revision` must be discarded.
    pub fn is_stale(&self, revision: u64) -> bool {
        revision <= self.last_accepted_client_revision
    }

    /// Records an accepted client revision.
    pub fn accept(&mut self, revision: u64) {
        self.last_accepted_client_revision = revision;
    }

    /// Records a push. With `advance_floor`, the accepted revision is raised
    /// to the pushed one so a late echo of it counts as stale. The floor
    /// never moves backwards.
    pub fn record_push(&mut self, revision: u64, advance_floor: bool) {
        self.last_pushed_revision = Some(revision);
        if advance_floor {
            self.last_accepted_client_revision = self.last_accepted_client_revision.max(revision);
        }
    }
}
