//! Wire representations.

use gridsync_types::{GridItem, ItemError};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// One item as it travels to and from the client.
///
/// `i`, `x`, `y`, `w` and `h` are required. Optional bounds accept an
/// explicit `null` as "unset" and are omitted on output when unset.
/// Unknown fields sent by the client are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireItem {
    #[serde(rename = "i")]
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<u32>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(default = "default_true")]
    pub is_draggable: bool,
    #[serde(default = "default_true")]
    pub is_resizable: bool,
}

impl From<&GridItem> for WireItem {
    fn from(item: &GridItem) -> Self {
        Self {
            id: item.id.clone(),
            x: item.x,
            y: item.y,
            w: item.w,
            h: item.h,
            min_w: item.min_w,
            min_h: item.min_h,
            max_w: item.max_w,
            max_h: item.max_h,
            is_static: item.is_static,
            is_draggable: item.is_draggable,
            is_resizable: item.is_resizable,
        }
    }
}

impl WireItem {
    /// Converts to a domain item, rejecting constraint violations.
    pub fn into_item(self) -> Result<GridItem, ItemError> {
        let item = GridItem {
            id: self.id,
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
            min_w: self.min_w,
            min_h: self.min_h,
            max_w: self.max_w,
            max_h: self.max_h,
            is_static: self.is_static,
            is_draggable: self.is_draggable,
            is_resizable: self.is_resizable,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Outbound full document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentOut<'a> {
    pub revision: u64,
    pub columns: u32,
    pub row_height: u32,
    pub compact: bool,
    pub compact_type: Option<&'a str>,
    pub items: Vec<WireItem>,
}
