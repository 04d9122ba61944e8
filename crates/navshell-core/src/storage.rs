//! Key-value persistence backends
//!
//! The expansion store only needs string get/set/remove. Browsers back this
//! with `localStorage` (see the web crate); native hosts use [`FileStore`];
//! tests and storage-less environments use [`MemoryStore`].

use crate::error::{NavError, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// File name used by [`FileStore`] inside its state directory
pub const STATE_FILE_NAME: &str = "navshell-state.json";

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store
///
/// Clones share the same entries, so a clone handed to a second
/// [`crate::ExpansionStore`] behaves like a page reload on the same origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate storage that rejects every access (private mode, quota)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Raw entry, bypassing availability (test inspection)
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(NavError::storage_unavailable("memory store marked unavailable"))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// JSON-object file store: `<state_dir>/navshell-state.json`
///
/// A missing file reads as empty. An unparsable file also reads as empty and
/// is overwritten on the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(STATE_FILE_NAME),
        }
    }

    /// `<cache_dir>/navshell`, if the platform has a cache directory
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("navshell"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(NavError::StateRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt state file, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| NavError::StateWrite {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(entries).map_err(|source| {
            NavError::Serialize {
                message: "state entries".to_string(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(|source| NavError::StateWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let reloaded = store.clone();
        store.set("sidebar-expanded", "true").unwrap();
        assert_eq!(
            reloaded.get("sidebar-expanded").unwrap().as_deref(),
            Some("true")
        );
        reloaded.remove("sidebar-expanded").unwrap();
        assert_eq!(store.get("sidebar-expanded").unwrap(), None);
    }

    #[test]
    fn test_memory_store_unavailable() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(store.set("k", "v").unwrap_err().is_storage());
        assert!(store.get("k").is_err());
        assert_eq!(store.peek("k"), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(&dir.path().join("nested"));

        assert_eq!(store.get("sidebar-expanded").unwrap(), None);
        store.set("sidebar-expanded", "true").unwrap();
        store.set("other", "1").unwrap();

        let reopened = FileStore::new(&dir.path().join("nested"));
        assert_eq!(
            reopened.get("sidebar-expanded").unwrap().as_deref(),
            Some("true")
        );

        reopened.remove("other").unwrap();
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.get("sidebar-expanded").unwrap(), None);
        store.set("sidebar-expanded", "false").unwrap();
        assert_eq!(
            store.get("sidebar-expanded").unwrap().as_deref(),
            Some("false")
        );
    }
}
