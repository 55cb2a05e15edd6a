//! Messages exchanged with the client surface.

use crate::error::SyncResult;
use gridsync_codec::{CodecResult, LayoutCodec};
use gridsync_model::LayoutModel;
use gridsync_types::CompactType;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Inbound layout report from the client editor.
///
/// ```json
/// { "items": [...], "itemId": "chart", "reason": "DRAG",
///   "isDragging": true, "isResizing": false, "revision": 12 }
/// ```
///
/// `items` may be an array or a string holding a JSON array. `itemId` is
/// null for bulk changes. Unrecognised reasons classify as `UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEvent {
    #[serde(default)]
    pub items: Value,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub is_dragging: bool,
    #[serde(default)]
    pub is_resizing: bool,
    pub revision: u64,
}

impl ClientEvent {
    /// A final, bulk event with no reason tag.
    pub fn new(items: Value, revision: u64) -> Self {
        Self {
            items,
            item_id: None,
            reason: None,
            is_dragging: false,
            is_resizing: false,
            revision,
        }
    }

    /// Parses one payload as sent by the client.
    pub fn from_json(json: &str) -> SyncResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_item(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn dragging(mut self) -> Self {
        self.is_dragging = true;
        self
    }

    pub fn resizing(mut self) -> Self {
        self.is_resizing = true;
        self
    }
}

/// Property set written to the client surface on every push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProperties {
    /// Items-only JSON array.
    pub layout_data: String,
    pub revision: u64,
    pub columns: u32,
    pub row_height: u32,
    pub compact: bool,
    /// Serialized like the document field: `"vertical"`, `"horizontal"` or null.
    #[serde(serialize_with = "compact_type_wire")]
    pub compact_type: CompactType,
}

fn compact_type_wire<S: Serializer>(
    compact_type: &CompactType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    compact_type.as_wire().serialize(serializer)
}

impl LayoutProperties {
    pub fn from_model(model: &LayoutModel) -> CodecResult<Self> {
        Ok(Self {
            layout_data: LayoutCodec::encode_items(model)?,
            revision: model.revision(),
            columns: model.columns(),
            row_height: model.row_height(),
            compact: model.compact(),
            compact_type: model.compact_type(),
        })
    }
}
