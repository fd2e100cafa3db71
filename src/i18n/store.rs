//! Persisted key-value storage for user preferences.
//!
//! The site keeps exactly one entry today (the selected language), but the
//! store is a plain string map so it mirrors a browser's local storage.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preferences file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preferences file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("preference store lock poisoned")]
    Poisoned,
}

/// Synchronous string key-value store.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`. Must be durable when this returns `Ok`.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file, e.g. `{"language": "es"}`.
///
/// A missing file reads as an empty store. Writes go through a sibling
/// temporary file and a rename, so readers never see a half-written file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!("Replacing unreadable preferences file: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStore Tests ====================

    #[test]
    fn test_memory_store_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load("language").unwrap(), None);
    }

    #[test]
    fn test_memory_store_save_then_load() {
        let store = MemoryStore::new();
        store.save("language", "es").unwrap();
        assert_eq!(store.load("language").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let observer = store.clone();
        store.save("language", "es").unwrap();
        assert_eq!(observer.load("language").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_memory_store_with_entry() {
        let store = MemoryStore::with_entry("language", "en");
        assert_eq!(store.load("language").unwrap().as_deref(), Some("en"));
        assert_eq!(store.load("theme").unwrap(), None);
    }

    // ==================== FileStore Tests ====================

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("language").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        FileStore::new(&path).save("language", "es").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("language").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let store = FileStore::new(&path);
        store.save("language", "en").unwrap();

        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("language").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("prefs.json");

        FileStore::new(&path).save("language", "es").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file_errors_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let result = FileStore::new(&path).load("language");
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_file_store_save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);
        store.save("language", "es").unwrap();
        assert_eq!(store.load("language").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_file_store_blank_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(FileStore::new(&path).load("language").unwrap(), None);
    }
}
