//! Layout synchronization between the server-held model and a client editor.
//!
//! # Architecture
//!
//! The [`SyncController`] is a pure state machine around one
//! [`LayoutModel`](gridsync_model::LayoutModel). It never performs I/O; the
//! embedding application supplies a [`ClientSurface`] that carries property
//! writes to the client and hands back any events the client mirrors.
//!
//! ## Components
//!
//! - **Protocol**: the inbound [`ClientEvent`] payload and outbound
//!   [`LayoutProperties`]
//! - **Echo gate**: a scoped flag raised for the duration of each push
//! - **State**: the highest accepted client revision
//! - **Interactions**: per-item drag/resize tracking
//! - **Notifier**: synchronous, failure-isolated fan-out of
//!   [`LayoutChangeEvent`]s
//!
//! ## Inbound handling
//!
//! 1. Discard while the echo gate is raised
//! 2. Discard revisions at or below the last accepted one
//! 3. Record the revision
//! 4. Merge items into the model (static and unknown items excluded)
//! 5. Classify the reason, falling back to `UNKNOWN`
//! 6. Notify subscribers
//!
//! # Example
//!
//! ```
//! use gridsync_model::LayoutModel;
//! use gridsync_sync::mock::RecordingSurface;
//! use gridsync_sync::{ClientEvent, SyncController};
//! use gridsync_types::GridItem;
//!
//! let mut model = LayoutModel::new();
//! model.put(GridItem::new("a", 0, 0, 4, 3)).unwrap();
//!
//! let mut controller = SyncController::new(model, RecordingSurface::new());
//! let pushed = controller.push_to_client().unwrap();
//!
//! // The client bounces our own revision back: ignored.
//! let echo = ClientEvent::new(serde_json::json!([]), pushed);
//! assert!(!controller.handle_client_event(&echo).unwrap().is_accepted());
//! ```

mod controller;
mod echo;
mod error;
mod event;
pub mod interaction;
mod notifier;
mod protocol;
mod state;
mod surface;

pub use controller::{Delivery, DiscardReason, SyncConfig, SyncController};
pub use echo::{EchoGate, EchoGuard};
pub use error::{SyncError, SyncResult};
pub use event::LayoutChangeEvent;
pub use interaction::{InteractionKind, InteractionPhase, InteractionState, InteractionTracker};
pub use notifier::{ChangeNotifier, LayoutChangeListener, ListenerError, NotifyReport};
pub use protocol::{ClientEvent, LayoutProperties};
pub use state::SyncState;
pub use surface::{mock, ClientSurface, SurfaceError};
