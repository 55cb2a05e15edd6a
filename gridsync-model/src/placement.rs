//! First-fit free-position search.
//!
//! Candidate origins are scanned row-major: `y` ascending in the outer loop,
//! `x` ascending from 0 to `columns - w` in the inner loop. The first
//! origin whose `w`x`h` rectangle shares no cell with an existing item wins.
//! This is greedy, not optimal packing.

use crate::LayoutModel;
use gridsync_types::GridItem;
use serde::{Deserialize, Serialize};

/// Bounds for [`LayoutModel::find_free_position_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementConfig {
    /// Rows scanned before falling back to appending below everything.
    pub max_scan_rows: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_scan_rows: 1000,
        }
    }
}

impl LayoutModel {
    /// First-fit placement with the default scan bound.
    pub fn find_free_position(&self, id: impl Into<String>, w: u32, h: u32) -> GridItem {
        self.find_free_position_with(id, w, h, &PlacementConfig::default())
    }

    /// First-fit placement. Returns a new, unstored item; the model is not
    /// modified. When nothing fits within `max_scan_rows` (or `w` exceeds
    /// the column count), the item is placed at `x = 0` below every
    /// existing item.
    pub fn find_free_position_with(
        &self,
        id: impl Into<String>,
        w: u32,
        h: u32,
        config: &PlacementConfig,
    ) -> GridItem {
        let id = id.into();
        let columns = self.columns();

        if w <= columns {
            for y in 0..config.max_scan_rows {
                for x in 0..=(columns - w) {
                    if self.is_free(x, y, w, h) {
                        return GridItem::new(id, x, y, w, h);
                    }
                }
            }
        }

        GridItem::new(id, 0, self.bottom(), w, h)
    }

    /// Whether the `w`x`h` rectangle at `(x, y)` overlaps no stored item.
    pub fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        self.items().all(|item| !item.overlaps_rect(x, y, w, h))
    }
}
