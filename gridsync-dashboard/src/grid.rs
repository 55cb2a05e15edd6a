//! The dashboard grid.

use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use gridsync_codec::LayoutCodec;
use gridsync_model::LayoutModel;
use gridsync_sync::{
    ClientEvent, ClientSurface, Delivery, LayoutChangeListener, SyncController,
};
use gridsync_types::{CompactType, GridItem, GridSettings, SubscriptionId};
use std::collections::HashMap;
use tracing::debug;

/// A draggable, resizable grid of application content.
///
/// `S` carries layout properties to the client; `C` is whatever the
/// application attaches to an item. Content is keyed by item id and never
/// inspected. The client addresses it through [`slot_name`](Self::slot_name).
pub struct DashboardGrid<S, C> {
    sync: SyncController<S>,
    contents: HashMap<String, C>,
    config: DashboardConfig,
}

impl<S: ClientSurface, C> DashboardGrid<S, C> {
    /// Creates an empty grid with default settings and pushes it.
    pub fn new(surface: S) -> DashboardResult<Self> {
        Self::with_config(surface, DashboardConfig::default())
    }

    pub fn with_config(surface: S, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        let model = LayoutModel::with_settings(config.settings);
        let mut grid = Self {
            sync: SyncController::with_config(model, surface, config.sync),
            contents: HashMap::new(),
            config,
        };
        grid.sync.push_to_client()?;
        Ok(grid)
    }

    /// Client slot that renders `id`'s content.
    pub fn slot_name(id: &str) -> String {
        format!("item-{id}")
    }

    // ── Items ────────────────────────────────────────────────────

    /// Adds `content` at the position described by `item`.
    ///
    /// Re-adding an existing id replaces both geometry and content.
    pub fn add_item(&mut self, id: &str, content: C, item: GridItem) -> DashboardResult<()> {
        check_id(id, &item)?;
        self.sync.model_mut().put(item)?;
        self.contents.insert(id.to_string(), content);
        debug!("Added item {} in slot {}", id, Self::slot_name(id));
        self.commit(Some(id))
    }

    /// Adds `content` with a `w`x`h` footprint at the first free position.
    pub fn add_item_sized(&mut self, id: &str, content: C, w: u32, h: u32) -> DashboardResult<()> {
        let item = self
            .sync
            .model()
            .find_free_position_with(id, w, h, &self.config.placement);
        self.add_item(id, content, item)
    }

    /// Adds `content` with the configured default size.
    pub fn add_item_default(&mut self, id: &str, content: C) -> DashboardResult<()> {
        let (w, h) = (self.config.default_item_width, self.config.default_item_height);
        self.add_item_sized(id, content, w, h)
    }

    /// Removes an item and returns its content. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> DashboardResult<Option<C>> {
        if self.sync.model_mut().remove(id).is_none() {
            return Ok(None);
        }
        let content = self.contents.remove(id);
        self.sync.interactions_mut().forget(id);
        self.commit(Some(id))?;
        Ok(content)
    }

    /// Swaps the content of an existing item, keeping its geometry.
    ///
    /// Returns the previous content. When the item does not exist, `content`
    /// is dropped and `None` is returned. The layout is not pushed.
    pub fn replace_item(&mut self, id: &str, content: C) -> Option<C> {
        if !self.sync.model().has(id) {
            return None;
        }
        self.contents.insert(id.to_string(), content)
    }

    /// Replaces the geometry and constraints of an existing item.
    pub fn set_item_config(&mut self, id: &str, item: GridItem) -> DashboardResult<()> {
        check_id(id, &item)?;
        if !self.sync.model().has(id) {
            return Err(DashboardError::ItemNotFound(id.to_string()));
        }
        self.sync.model_mut().put(item)?;
        self.commit(Some(id))
    }

    pub fn item_config(&self, id: &str) -> Option<&GridItem> {
        self.sync.model().get(id)
    }

    pub fn item_content(&self, id: &str) -> Option<&C> {
        self.contents.get(id)
    }

    pub fn item_content_mut(&mut self, id: &str) -> Option<&mut C> {
        self.contents.get_mut(id)
    }

    /// Item ids in layout order.
    pub fn item_ids(&self) -> Vec<String> {
        self.sync.model().ids().map(str::to_string).collect()
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.sync.model().has(id)
    }

    pub fn len(&self) -> usize {
        self.sync.model().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sync.model().is_empty()
    }

    /// Removes every item, returning the detached content in layout order.
    pub fn clear(&mut self) -> DashboardResult<Vec<(String, C)>> {
        let ids = self.item_ids();
        let detached = self.detach(&ids);
        if !self.sync.model().is_empty() {
            self.sync.model_mut().clear();
            self.sync.interactions_mut().reset();
            self.commit(None)?;
        }
        Ok(detached)
    }

    // ── Whole layout ─────────────────────────────────────────────

    /// Deep copy of the current layout.
    pub fn layout(&self) -> LayoutModel {
        self.sync.model().copy()
    }

    pub fn revision(&self) -> u64 {
        self.sync.model().revision()
    }

    /// Replaces settings and items with those of `layout`.
    ///
    /// Content for ids that survive is kept; content for ids absent from
    /// `layout` is detached and returned. New ids start without content.
    pub fn set_layout(&mut self, layout: &LayoutModel) -> DashboardResult<Vec<(String, C)>> {
        let gone: Vec<String> = self
            .contents
            .keys()
            .filter(|id| !layout.has(id))
            .cloned()
            .collect();

        let model = self.sync.model_mut();
        model.apply_settings(layout.settings())?;
        model.replace_all(layout.items().cloned())?;

        let detached = self.detach(&gone);
        self.sync.interactions_mut().reset();
        self.commit(None)?;
        Ok(detached)
    }

    /// Full layout document, for persistence.
    pub fn layout_json(&self) -> DashboardResult<String> {
        Ok(LayoutCodec::encode(self.sync.model())?)
    }

    /// Applies positions from a saved document to items that exist now.
    ///
    /// Items in the document that the grid does not have are ignored, and
    /// no item is created or removed. Grid settings in the document are
    /// not applied. Returns the number of items restored.
    pub fn restore_layout(&mut self, json: &str) -> DashboardResult<usize> {
        let saved = LayoutCodec::decode(json)?;
        let model = self.sync.model_mut();
        let mut restored = 0;
        for item in saved.items() {
            if model.has(&item.id) {
                model.put(item.clone())?;
                restored += 1;
            }
        }
        self.commit(None)?;
        Ok(restored)
    }

    // ── Grid settings ────────────────────────────────────────────

    pub fn settings(&self) -> GridSettings {
        self.sync.model().settings()
    }

    pub fn columns(&self) -> u32 {
        self.sync.model().columns()
    }

    pub fn row_height(&self) -> u32 {
        self.sync.model().row_height()
    }

    pub fn compact(&self) -> bool {
        self.sync.model().compact()
    }

    pub fn compact_type(&self) -> CompactType {
        self.sync.model().compact_type()
    }

    pub fn set_columns(&mut self, columns: u32) -> DashboardResult<()> {
        self.update_settings(|model| model.set_columns(columns))
    }

    pub fn set_row_height(&mut self, row_height: u32) -> DashboardResult<()> {
        self.update_settings(|model| model.set_row_height(row_height))
    }

    pub fn set_compact(&mut self, compact: bool) -> DashboardResult<()> {
        self.update_settings(|model| model.set_compact(compact))
    }

    pub fn set_compact_type(&mut self, compact_type: CompactType) -> DashboardResult<()> {
        self.update_settings(|model| model.set_compact_type(compact_type))
    }

    fn update_settings<F>(&mut self, apply: F) -> DashboardResult<()>
    where
        F: FnOnce(&mut LayoutModel) -> gridsync_model::ModelResult<()>,
    {
        let before = self.revision();
        apply(self.sync.model_mut())?;
        if self.revision() != before {
            self.commit(None)?;
        }
        Ok(())
    }

    // ── Client sync ──────────────────────────────────────────────

    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: LayoutChangeListener + 'static,
    {
        self.sync.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.sync.unsubscribe(id)
    }

    /// Feeds one client event through the sync protocol.
    pub fn handle_client_event(&mut self, event: &ClientEvent) -> DashboardResult<Delivery> {
        Ok(self.sync.handle_client_event(event)?)
    }

    pub fn handle_client_json(&mut self, json: &str) -> DashboardResult<Delivery> {
        Ok(self.sync.handle_client_json(json)?)
    }

    /// Pushes the current layout again, e.g. after the client reconnects.
    pub fn resync(&mut self) -> DashboardResult<u64> {
        Ok(self.sync.push_to_client()?)
    }

    pub fn controller(&self) -> &SyncController<S> {
        &self.sync
    }

    pub fn surface(&self) -> &S {
        self.sync.surface()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn commit(&mut self, affected: Option<&str>) -> DashboardResult<()> {
        self.sync.push_to_client()?;
        self.sync.notify_server_update(affected);
        Ok(())
    }

    fn detach(&mut self, ids: &[String]) -> Vec<(String, C)> {
        ids.iter()
            .filter_map(|id| self.contents.remove_entry(id))
            .collect()
    }
}

fn check_id(id: &str, item: &GridItem) -> DashboardResult<()> {
    if id != item.id {
        return Err(DashboardError::IdMismatch {
            expected: id.to_string(),
            found: item.id.clone(),
        });
    }
    Ok(())
}

impl<S, C> std::fmt::Debug for DashboardGrid<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardGrid")
            .field("sync", &self.sync)
            .field("contents", &self.contents.len())
            .finish()
    }
}
