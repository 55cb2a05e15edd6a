use crate::{validate_key, LayoutStore, StorageResult};
use std::collections::HashMap;

/// In-memory store, scoped to the instance.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    entries: HashMap<String, String>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn save(&mut self, key: &str, json: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        Ok(self.entries.remove(key).is_some())
    }
}
