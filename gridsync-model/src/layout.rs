//! The revisioned layout model.

use crate::error::{ModelError, ModelResult};
use gridsync_types::{CompactType, GridItem, GridSettings};
use indexmap::IndexMap;

/// Ordered collection of grid items plus grid-wide settings.
///
/// Every state-changing operation bumps `revision` exactly once; reads and
/// no-op mutations (removing an absent id, setting an identical value) leave
/// it untouched. Cloning yields a fully independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutModel {
    items: IndexMap<String, GridItem>,
    revision: u64,
    settings: GridSettings,
}

impl Default for LayoutModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutModel {
    /// Empty model with default settings (12 columns, 30px rows).
    pub fn new() -> Self {
        Self::with_settings(GridSettings::default())
    }

    /// Empty model with the given settings. Revision starts at 0.
    pub fn with_settings(settings: GridSettings) -> Self {
        Self {
            items: IndexMap::new(),
            revision: 0,
            settings,
        }
    }

    // ── Item mutation ────────────────────────────────────────────

    /// Inserts or fully replaces the item with the same id.
    ///
    /// Returns the replaced item, if any. Position in iteration order is
    /// kept for a replaced id.
    pub fn put(&mut self, item: GridItem) -> ModelResult<Option<GridItem>> {
        item.validate()?;
        let previous = self.items.insert(item.id.clone(), item);
        self.revision += 1;
        Ok(previous)
    }

    /// Deletes an item. Removing an unknown id is a no-op and does not
    /// advance the revision, so retries stay idempotent.
    pub fn remove(&mut self, id: &str) -> Option<GridItem> {
        let removed = self.items.shift_remove(id);
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }

    /// Clears and re-inserts. Advances the revision exactly once, even for
    /// an empty input. Nothing changes if any item is invalid.
    pub fn replace_all<I>(&mut self, items: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = GridItem>,
    {
        let mut fresh = IndexMap::new();
        for item in items {
            item.validate()?;
            fresh.insert(item.id.clone(), item);
        }
        self.items = fresh;
        self.revision += 1;
        Ok(())
    }

    /// Removes every item. No-op on an empty model.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.revision += 1;
        }
    }

    // ── Reads ────────────────────────────────────────────────────

    pub fn get(&self, id: &str) -> Option<&GridItem> {
        self.items.get(id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &GridItem> {
        self.items.values()
    }

    /// Item ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// `(id, item)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GridItem)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deep snapshot with its own revision and item set.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Lowest free row below every item (0 when empty).
    pub fn bottom(&self) -> u32 {
        self.items.values().map(GridItem::bottom).max().unwrap_or(0)
    }

    // ── Settings ─────────────────────────────────────────────────

    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    pub fn columns(&self) -> u32 {
        self.settings.columns
    }

    pub fn row_height(&self) -> u32 {
        self.settings.row_height
    }

    pub fn compact(&self) -> bool {
        self.settings.compact
    }

    pub fn compact_type(&self) -> CompactType {
        self.settings.compact_type
    }

    pub fn set_columns(&mut self, columns: u32) -> ModelResult<()> {
        self.apply_settings(GridSettings {
            columns,
            ..self.settings
        })
    }

    pub fn set_row_height(&mut self, row_height: u32) -> ModelResult<()> {
        self.apply_settings(GridSettings {
            row_height,
            ..self.settings
        })
    }

    pub fn set_compact(&mut self, compact: bool) -> ModelResult<()> {
        self.apply_settings(GridSettings {
            compact,
            ..self.settings
        })
    }

    pub fn set_compact_type(&mut self, compact_type: CompactType) -> ModelResult<()> {
        self.apply_settings(GridSettings {
            compact_type,
            ..self.settings
        })
    }

    /// Replaces all settings at once; one revision step if anything differs.
    pub fn apply_settings(&mut self, settings: GridSettings) -> ModelResult<()> {
        settings
            .validate()
            .map_err(|e| ModelError::InvalidArgument(e.to_string()))?;
        if settings != self.settings {
            self.settings = settings;
            self.revision += 1;
        }
        Ok(())
    }

    /// Sets the revision carried by a stored snapshot. Only meant for
    /// rebuilding a model from a serialized document.
    pub fn restore_revision(&mut self, revision: u64) {
        self.revision = revision;
    }
}
