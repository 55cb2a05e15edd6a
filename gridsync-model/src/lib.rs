//! Canonical layout model for gridsync.
//!
//! - [`LayoutModel`]: insertion-ordered `id → GridItem` map plus grid
//!   settings and a monotonic revision counter
//! - [`PlacementConfig`]: bounds for the first-fit free-position search
//!
//! The model never emits events and never talks to the client; it is the
//! single source of truth the sync layer reads from and writes into.

mod error;
mod layout;
mod placement;

pub use error::{ModelError, ModelResult};
pub use layout::LayoutModel;
pub use placement::PlacementConfig;
