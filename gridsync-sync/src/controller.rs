//! Sync controller: stateful protocol logic without I/O.
//!
//! The controller owns the live model and is its single writer. Outbound
//! pushes go through the [`ClientSurface`]; inbound events come in through
//! [`SyncController::handle_client_event`].

use crate::echo::EchoGate;
use crate::error::SyncResult;
use crate::event::LayoutChangeEvent;
use crate::interaction::{InteractionPhase, InteractionTracker};
use crate::notifier::{ChangeNotifier, LayoutChangeListener, NotifyReport};
use crate::protocol::{ClientEvent, LayoutProperties};
use crate::state::SyncState;
use crate::surface::ClientSurface;
use gridsync_codec::{LayoutCodec, MergeOutcome};
use gridsync_model::LayoutModel;
use gridsync_types::{ChangeReason, SubscriptionId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the sync controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    /// Raise the accepted client revision to each pushed model revision,
    /// so an echo arriving after the push completed is still discarded.
    pub advance_on_push: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            advance_on_push: true,
        }
    }
}

/// Why an inbound event was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Arrived while a push was in progress.
    Echo,
    /// Revision not newer than the last accepted one.
    Stale { revision: u64, last_accepted: u64 },
}

/// Result of handling one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Accepted {
        revision: u64,
        reason: ChangeReason,
        merge: MergeOutcome,
        phase: InteractionPhase,
        notified: NotifyReport,
    },
    Discarded(DiscardReason),
}

impl Delivery {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn discard_reason(&self) -> Option<DiscardReason> {
        match self {
            Self::Discarded(reason) => Some(*reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// The protocol state machine for one grid.
pub struct SyncController<S> {
    model: LayoutModel,
    surface: S,
    notifier: ChangeNotifier,
    state: SyncState,
    interactions: InteractionTracker,
    echo: EchoGate,
    config: SyncConfig,
}

impl<S: ClientSurface> SyncController<S> {
    /// Creates a controller with the default configuration.
    pub fn new(model: LayoutModel, surface: S) -> Self {
        Self::with_config(model, surface, SyncConfig::default())
    }

    pub fn with_config(model: LayoutModel, surface: S, config: SyncConfig) -> Self {
        Self {
            model,
            surface,
            notifier: ChangeNotifier::new(),
            state: SyncState::new(),
            interactions: InteractionTracker::new(),
            echo: EchoGate::new(),
            config,
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn model(&self) -> &LayoutModel {
        &self.model
    }

    /// Mutable access to the live model. Call
    /// [`push_to_client`](Self::push_to_client) after mutating.
    pub fn model_mut(&mut self) -> &mut LayoutModel {
        &mut self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn interactions(&self) -> &InteractionTracker {
        &self.interactions
    }

    pub fn interactions_mut(&mut self) -> &mut InteractionTracker {
        &mut self.interactions
    }

    /// Handle on the echo flag, for surfaces that want to check it.
    pub fn echo_gate(&self) -> EchoGate {
        self.echo.clone()
    }

    pub fn config(&self) -> SyncConfig {
        self.config
    }

    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: LayoutChangeListener + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn into_model(self) -> LayoutModel {
        self.model
    }

    // ── Outbound ─────────────────────────────────────────────────

    /// Writes the current model to the client surface.
    ///
    /// The echo gate is raised before the write and lowered on return.
    /// Events the surface mirrors during the write are handled, and thereby
    /// discarded, while it is still raised. Returns the pushed revision.
    pub fn push_to_client(&mut self) -> SyncResult<u64> {
        let properties = LayoutProperties::from_model(&self.model)?;
        let revision = properties.revision;

        {
            let _guard = self.echo.raise();
            self.surface.write_layout(&properties)?;
            let mirrored = self.surface.take_mirrored_events();
            if !mirrored.is_empty() {
                debug!("Suppressing {} mirrored event(s) from push", mirrored.len());
            }
            for event in &mirrored {
                self.handle_client_event(event)?;
            }
        }

        self.state.record_push(revision, self.config.advance_on_push);
        debug!("Pushed layout revision {} ({} items)", revision, self.model.len());
        Ok(revision)
    }

    // ── Inbound ──────────────────────────────────────────────────

    /// Processes one client event.
    ///
    /// Echoes and stale revisions are discarded without touching any
    /// state. A decode failure is returned as an error; the revision is
    /// already recorded at that point but the model is unchanged.
    pub fn handle_client_event(&mut self, event: &ClientEvent) -> SyncResult<Delivery> {
        if self.echo.is_raised() {
            debug!("Discarding echo at client revision {}", event.revision);
            return Ok(Delivery::Discarded(DiscardReason::Echo));
        }

        if self.state.is_stale(event.revision) {
            let last_accepted = self.state.last_accepted_client_revision();
            debug!(
                "Discarding stale client revision {} (last accepted {})",
                event.revision, last_accepted
            );
            return Ok(Delivery::Discarded(DiscardReason::Stale {
                revision: event.revision,
                last_accepted,
            }));
        }

        self.state.accept(event.revision);

        let merge = LayoutCodec::merge_item_values(&mut self.model, &event.items)?;
        let reason = ChangeReason::parse(event.reason.as_deref());
        let phase = self.interactions.observe(
            event.item_id.as_deref(),
            event.is_dragging,
            event.is_resizing,
        );

        let change = LayoutChangeEvent {
            layout: self.model.copy(),
            affected_item_id: event.item_id.clone(),
            reason,
            is_dragging: event.is_dragging,
            is_resizing: event.is_resizing,
            client_revision: event.revision,
            from_client: true,
        };
        let notified = self.notifier.notify(&change);

        debug!(
            "Accepted client revision {}: {} updated, reason {}, {:?}",
            event.revision,
            merge.updated.len(),
            reason,
            phase
        );

        Ok(Delivery::Accepted {
            revision: event.revision,
            reason,
            merge,
            phase,
            notified,
        })
    }

    /// Parses a raw payload and handles it.
    pub fn handle_client_json(&mut self, json: &str) -> SyncResult<Delivery> {
        let event = ClientEvent::from_json(json)?;
        self.handle_client_event(&event)
    }

    /// Notifies subscribers of a programmatic, server-side change.
    pub fn notify_server_update(&mut self, affected_item_id: Option<&str>) -> NotifyReport {
        let change = LayoutChangeEvent::server_update(
            self.model.copy(),
            affected_item_id.map(str::to_string),
            self.state.last_accepted_client_revision(),
        );
        self.notifier.notify(&change)
    }
}

impl<S> std::fmt::Debug for SyncController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncController")
            .field("revision", &self.model.revision())
            .field("items", &self.model.len())
            .field("state", &self.state)
            .field("listeners", &self.notifier.len())
            .finish()
    }
}
