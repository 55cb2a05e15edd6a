//! Encoding, decoding and partial merge.

use crate::error::{CodecError, CodecResult};
use crate::wire::{DocumentOut, WireItem};
use gridsync_model::LayoutModel;
use gridsync_types::{
    CompactType, GridItem, GridSettings, DEFAULT_COLUMNS, DEFAULT_ROW_HEIGHT,
};
use serde_json::{Map, Value};
use tracing::debug;

/// What a [`LayoutCodec::merge_items`] call did, by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Existing items replaced with the incoming geometry.
    pub updated: Vec<String>,
    /// Incoming ids the model does not know; never created.
    pub unknown: Vec<String>,
    /// Static items whose incoming geometry was ignored.
    pub skipped_static: Vec<String>,
}

impl MergeOutcome {
    /// True when the merge changed nothing.
    pub fn is_noop(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Converts [`LayoutModel`]s to and from the JSON wire format.
pub struct LayoutCodec;

impl LayoutCodec {
    // ── Encoding ─────────────────────────────────────────────────

    /// Full document: revision, grid settings and items.
    pub fn encode(model: &LayoutModel) -> CodecResult<String> {
        serde_json::to_string(&Self::document(model))
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Full document, indented for humans.
    pub fn encode_pretty(model: &LayoutModel) -> CodecResult<String> {
        serde_json::to_string_pretty(&Self::document(model))
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Bare items array, used for incremental pushes to the client.
    pub fn encode_items(model: &LayoutModel) -> CodecResult<String> {
        serde_json::to_string(&Self::wire_items(model))
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn wire_items(model: &LayoutModel) -> Vec<WireItem> {
        model.items().map(WireItem::from).collect()
    }

    fn document(model: &LayoutModel) -> DocumentOut<'static> {
        DocumentOut {
            revision: model.revision(),
            columns: model.columns(),
            row_height: model.row_height(),
            compact: model.compact(),
            compact_type: model.compact_type().as_wire(),
            items: Self::wire_items(model),
        }
    }

    // ── Decoding ─────────────────────────────────────────────────

    /// Builds a fresh model from a full document.
    ///
    /// `None`, empty or whitespace-only input and a JSON `null` all decode
    /// to an empty default model. Missing or unusable grid settings fall
    /// back to defaults; items, by contrast, are decoded strictly.
    pub fn decode<'a>(json: impl Into<Option<&'a str>>) -> CodecResult<LayoutModel> {
        let Some(text) = json.into().map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(LayoutModel::new());
        };

        let root = match serde_json::from_str::<Value>(text)? {
            Value::Null => return Ok(LayoutModel::new()),
            Value::Object(map) => map,
            _ => return Err(CodecError::Shape("a JSON object for the layout document")),
        };

        let items = match root.get("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(value @ Value::Array(_)) => Self::decode_item_values(value.clone())?,
            Some(_) => return Err(CodecError::Shape("an array for `items`")),
        };

        let mut model = LayoutModel::with_settings(Self::settings_from(&root));
        model.replace_all(items)?;
        model.restore_revision(root.get("revision").and_then(Value::as_u64).unwrap_or(0));
        Ok(model)
    }

    /// Decodes a bare items array without touching any model.
    pub fn decode_items(json: &str) -> CodecResult<Vec<GridItem>> {
        match serde_json::from_str::<Value>(json)? {
            value @ Value::Array(_) => Self::decode_item_values(value),
            _ => Err(CodecError::Shape("a JSON array of items")),
        }
    }

    fn decode_item_values(value: Value) -> CodecResult<Vec<GridItem>> {
        let wire: Vec<WireItem> = serde_json::from_value(value)?;
        let mut items = Vec::with_capacity(wire.len());
        for w in wire {
            items.push(w.into_item()?);
        }
        Ok(items)
    }

    fn settings_from(root: &Map<String, Value>) -> GridSettings {
        let positive = |key: &str, fallback: u32| {
            root.get(key)
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v > 0)
                .unwrap_or(fallback)
        };
        let compact_type = match root.get("compactType") {
            None => CompactType::default(),
            Some(Value::Null) => CompactType::None,
            Some(Value::String(s)) => CompactType::parse(s).unwrap_or_default(),
            Some(_) => CompactType::default(),
        };
        GridSettings {
            columns: positive("columns", DEFAULT_COLUMNS),
            row_height: positive("rowHeight", DEFAULT_ROW_HEIGHT),
            compact: root.get("compact").and_then(Value::as_bool).unwrap_or(true),
            compact_type,
        }
    }

    // ── Partial merge ────────────────────────────────────────────

    /// Applies an items array (as JSON text) to existing items only.
    ///
    /// Empty input is a no-op.
    pub fn merge_items(model: &mut LayoutModel, items_json: &str) -> CodecResult<MergeOutcome> {
        if items_json.trim().is_empty() {
            return Ok(MergeOutcome::default());
        }
        let value: Value = serde_json::from_str(items_json)?;
        Self::merge_item_values(model, &value)
    }

    /// Applies an already-parsed items array to existing items only.
    ///
    /// Unknown ids are ignored (a merge never creates items) and static
    /// items keep their stored geometry. Every incoming item is decoded
    /// and validated before the first write, so a failure leaves the
    /// model unmodified. `null` is a no-op; a string is parsed as JSON.
    pub fn merge_item_values(model: &mut LayoutModel, items: &Value) -> CodecResult<MergeOutcome> {
        let decoded = match items {
            Value::Null => return Ok(MergeOutcome::default()),
            Value::String(text) => {
                if text.trim().is_empty() {
                    return Ok(MergeOutcome::default());
                }
                Self::decode_items(text)?
            }
            Value::Array(_) => Self::decode_item_values(items.clone())?,
            _ => return Err(CodecError::Shape("a JSON array of items")),
        };

        let mut outcome = MergeOutcome::default();
        let mut accepted = Vec::new();
        for item in decoded {
            match model.get(&item.id) {
                None => {
                    debug!("Ignoring merge for unknown item {}", item.id);
                    outcome.unknown.push(item.id);
                }
                Some(existing) if existing.is_static => {
                    debug!("Ignoring client geometry for static item {}", item.id);
                    outcome.skipped_static.push(item.id);
                }
                Some(_) => accepted.push(item),
            }
        }

        for item in accepted {
            outcome.updated.push(item.id.clone());
            model.put(item)?;
        }
        Ok(outcome)
    }
}
