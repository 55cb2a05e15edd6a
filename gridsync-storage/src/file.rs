//! One JSON file per key under a root directory.

use crate::{validate_key, LayoutStore, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EXTENSION: &str = "json";

/// Directory-backed store writing `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    root: PathBuf,
}

impl FileLayoutStore {
    /// Opens a store rooted at `root`, creating the directory if necessary.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
            info!("Created layout store directory: {:?}", root);
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a key is stored at.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }

    /// Keys with a stored file, sorted.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_dir() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

impl LayoutStore for FileLayoutStore {
    fn save(&mut self, key: &str, json: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        // Write-then-rename so a reader never sees a half-written layout.
        let staging = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&staging, json)?;
        fs::rename(&staging, &path)?;
        debug!("Saved layout {:?} ({} bytes)", path, json.len());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed layout {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
