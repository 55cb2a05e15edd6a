//! Layout persistence helpers.

use crate::error::DashboardResult;
use crate::grid::DashboardGrid;
use gridsync_codec::LayoutCodec;
use gridsync_storage::LayoutStore;
use gridsync_sync::{ClientSurface, LayoutChangeEvent, LayoutChangeListener, ListenerError};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

impl<S: ClientSurface, C> DashboardGrid<S, C> {
    /// Saves the full layout document under `key`.
    pub fn save_to<T>(&self, store: &mut T, key: &str) -> DashboardResult<()>
    where
        T: LayoutStore + ?Sized,
    {
        store.save(key, &self.layout_json()?)?;
        info!("Saved layout {} at revision {}", key, self.revision());
        Ok(())
    }

    /// Restores positions saved under `key` onto existing items.
    ///
    /// Returns false when nothing was stored under `key`.
    pub fn load_from<T>(&mut self, store: &T, key: &str) -> DashboardResult<bool>
    where
        T: LayoutStore + ?Sized,
    {
        let Some(json) = store.load(key)? else {
            debug!("No stored layout for {}", key);
            return Ok(false);
        };
        let restored = self.restore_layout(&json)?;
        info!("Restored {} item(s) from layout {}", restored, key);
        Ok(true)
    }
}

/// Listener that saves the layout whenever an interaction finishes.
///
/// Intermediate events (drag or resize still in progress) are skipped, so a
/// throttled stream of drag updates costs one write at the end.
pub fn autosave_listener<T>(store: Arc<Mutex<T>>, key: impl Into<String>) -> Autosave<T>
where
    T: LayoutStore + Send + 'static,
{
    Autosave {
        store,
        key: key.into(),
    }
}

/// See [`autosave_listener`].
#[derive(Debug)]
pub struct Autosave<T> {
    store: Arc<Mutex<T>>,
    key: String,
}

impl<T> Autosave<T> {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: LayoutStore + Send> LayoutChangeListener for Autosave<T> {
    fn on_layout_changed(&mut self, event: &LayoutChangeEvent) -> Result<(), ListenerError> {
        if event.is_intermediate() {
            return Ok(());
        }
        let json =
            LayoutCodec::encode(&event.layout).map_err(|e| ListenerError::new(e.to_string()))?;
        let mut store = self
            .store
            .lock()
            .map_err(|_| ListenerError::new("layout store lock poisoned"))?;
        store
            .save(&self.key, &json)
            .map_err(|e| ListenerError::new(e.to_string()))?;
        debug!("Autosaved layout {} at revision {}", self.key, event.layout.revision());
        Ok(())
    }
}
