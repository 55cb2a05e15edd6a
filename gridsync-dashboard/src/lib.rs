//! Dashboard grid facade.
//!
//! [`DashboardGrid`] is what an embedding application talks to. It pairs
//! the layout with per-item content (any `C` the application chooses) and
//! keeps the client surface in step: every programmatic mutation pushes the
//! layout and notifies subscribers with reason `SERVER_UPDATE`.
//!
//! # Example
//!
//! ```
//! use gridsync_dashboard::DashboardGrid;
//! use gridsync_sync::mock::RecordingSurface;
//!
//! let mut grid = DashboardGrid::new(RecordingSurface::new()).unwrap();
//! grid.add_item_default("clock", "12:00").unwrap();
//! grid.add_item_default("weather", "sunny").unwrap();
//!
//! assert_eq!(grid.item_config("weather").unwrap().x, 4);
//! assert_eq!(DashboardGrid::<RecordingSurface, &str>::slot_name("clock"), "item-clock");
//! ```

mod config;
mod error;
mod grid;
mod persistence;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use grid::DashboardGrid;
pub use persistence::{autosave_listener, Autosave};
