//! Keyed persistence for serialized layouts.
//!
//! Stores only move JSON strings around; encoding and decoding stay with
//! `gridsync-codec`. Nothing here is process-global: every store owns its
//! own map or directory.

mod error;
mod file;
mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileLayoutStore;
pub use memory::MemoryLayoutStore;

/// Save/load interface for serialized layouts.
pub trait LayoutStore {
    /// Stores `json` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, json: &str) -> StorageResult<()>;

    /// Returns the stored value, or `None` if nothing was saved under `key`.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Deletes the value. Returns whether anything was removed.
    fn remove(&mut self, key: &str) -> StorageResult<bool>;

    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.load(key)?.is_some())
    }
}

impl<T: LayoutStore + ?Sized> LayoutStore for Box<T> {
    fn save(&mut self, key: &str, json: &str) -> StorageResult<()> {
        (**self).save(key, json)
    }

    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).load(key)
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        (**self).remove(key)
    }
}

/// Rejects keys that are empty or could escape a store's namespace.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
