//! Per-item interaction tracking.
//!
//! Each item moves `Idle -> Active(kind) -> Idle`. The first accepted event
//! for an item with a drag or resize flag set starts the interaction; later
//! flagged events continue it; the first accepted event with both flags
//! clear finishes it and carries the final layout.
//!
//! There is no timeout. An item whose client disconnects mid-drag stays
//! active until the next final event for it or an explicit [`reset`].
//!
//! [`reset`]: InteractionTracker::reset

use std::collections::BTreeMap;
use std::fmt;

/// What the user is doing to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Drag,
    Resize,
}

impl InteractionKind {
    /// Kind implied by an event's flags. Resizing wins when both are set.
    pub fn from_flags(is_dragging: bool, is_resizing: bool) -> Option<Self> {
        match (is_dragging, is_resizing) {
            (_, true) => Some(Self::Resize),
            (true, false) => Some(Self::Drag),
            (false, false) => None,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drag => f.write_str("drag"),
            Self::Resize => f.write_str("resize"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Active(InteractionKind),
}

/// Where an accepted event falls within an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// First intermediate event for an idle item.
    Started(InteractionKind),
    /// Further intermediate event for an active item.
    Continued(InteractionKind),
    /// Final event closing an active interaction.
    Finished(InteractionKind),
    /// Final event for an item outside any interaction.
    Standalone,
    /// Change without an item id. Carries the kind implied by the flags,
    /// so a flagged bulk change stays intermediate.
    Bulk(Option<InteractionKind>),
}

impl InteractionPhase {
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished(_) | Self::Standalone | Self::Bulk(None))
    }

    pub fn is_intermediate(&self) -> bool {
        !self.is_final()
    }
}

/// Tracks which items are mid-interaction.
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    active: BTreeMap<String, InteractionKind>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the state machine for one accepted event.
    pub fn observe(
        &mut self,
        item_id: Option<&str>,
        is_dragging: bool,
        is_resizing: bool,
    ) -> InteractionPhase {
        let kind = InteractionKind::from_flags(is_dragging, is_resizing);
        let Some(id) = item_id else {
            return InteractionPhase::Bulk(kind);
        };

        match kind {
            Some(kind) => match self.active.insert(id.to_string(), kind) {
                Some(_) => InteractionPhase::Continued(kind),
                None => InteractionPhase::Started(kind),
            },
            None => match self.active.remove(id) {
                Some(kind) => InteractionPhase::Finished(kind),
                None => InteractionPhase::Standalone,
            },
        }
    }

    pub fn state(&self, item_id: &str) -> InteractionState {
        self.active
            .get(item_id)
            .map_or(InteractionState::Idle, |kind| InteractionState::Active(*kind))
    }

    pub fn is_active(&self, item_id: &str) -> bool {
        self.active.contains_key(item_id)
    }

    /// Items currently mid-interaction, ordered by id.
    pub fn active_interactions(&self) -> Vec<(String, InteractionKind)> {
        self.active
            .iter()
            .map(|(id, kind)| (id.clone(), *kind))
            .collect()
    }

    /// Drops the interaction for one item, e.g. after it was removed.
    pub fn forget(&mut self, item_id: &str) -> Option<InteractionKind> {
        self.active.remove(item_id)
    }

    /// Returns every item to idle.
    pub fn reset(&mut self) {
        self.active.clear();
    }
}
