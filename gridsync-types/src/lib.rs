//! Core type definitions for gridsync.
//!
//! This crate defines the fundamental types shared by every layer of the
//! layout synchronization core:
//! - [`GridItem`]: one rectangle of the grid, addressed by a stable string id
//! - [`GridSettings`] and [`CompactType`]: grid-wide configuration
//! - [`ChangeReason`]: why a layout changed, with an explicit `Unknown` fallback
//! - [`SubscriptionId`]: handle returned when registering a change listener
//!
//! Nothing here knows about JSON wire formats or the client surface; those
//! belong to `gridsync-codec` and `gridsync-sync`.

mod ids;
mod item;
mod reason;
mod settings;

pub use ids::SubscriptionId;
pub use item::{Axis, GridItem, ItemError};
pub use reason::ChangeReason;
pub use settings::{CompactType, GridSettings, SettingsError, DEFAULT_COLUMNS, DEFAULT_ROW_HEIGHT};
