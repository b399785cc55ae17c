//! String key/value persistence, the localStorage of native builds.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;
use waktu_types::WaktuError;

/// Minimal persistent string map.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, WaktuError>;
    fn set(&self, key: &str, value: &str) -> Result<(), WaktuError>;
    fn remove(&self, key: &str) -> Result<(), WaktuError>;
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, WaktuError> {
    m.lock().map_err(|_| WaktuError::StorageError("store lock poisoned".into()))
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WaktuError> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WaktuError> {
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), WaktuError> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }
}

/// One JSON object on disk, rewritten in full on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens (or lazily creates) the store at `path`.
    ///
    /// # Errors
    /// `StorageError` if the file exists but cannot be read or is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, WaktuError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| WaktuError::StorageError(format!("read {}: {e}", path.display())))?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)
                    .map_err(|e| WaktuError::StorageError(format!("parse {}: {e}", path.display())))?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened json store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), WaktuError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| WaktuError::StorageError(format!("create {}: {e}", dir.display())))?;
        }
        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| WaktuError::StorageError(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| WaktuError::StorageError(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| WaktuError::StorageError(format!("rename {}: {e}", self.path.display())))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, WaktuError> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WaktuError> {
        let mut entries = lock(&self.entries)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), WaktuError> {
        let mut entries = lock(&self.entries)?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let s = MemoryStore::new();
        assert_eq!(s.get("k").unwrap(), None);
        s.set("k", "v").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("v"));
        s.remove("k").unwrap();
        assert_eq!(s.get("k").unwrap(), None);
    }

    #[test]
    fn test_json_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let s = JsonFileStore::open(&path).unwrap();
        s.set("a", "1").unwrap();
        s.set("b", "{\"x\":2}").unwrap();
        s.remove("a").unwrap();
        drop(s);

        let s = JsonFileStore::open(&path).unwrap();
        assert_eq!(s.get("a").unwrap(), None);
        assert_eq!(s.get("b").unwrap().as_deref(), Some("{\"x\":2}"));
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("store.json");
        let s = JsonFileStore::open(&good).unwrap();
        s.set("kept", "1").unwrap();

        // a regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let broken = JsonFileStore::open(blocker.join("store.json")).unwrap();
        assert!(matches!(broken.set("k", "v"), Err(WaktuError::StorageError(_))));
        assert_eq!(broken.get("k").unwrap(), None);

        // same for remove once the backing file becomes unwritable
        fs::remove_file(&good).unwrap();
        fs::create_dir(&good).unwrap();
        assert!(s.remove("kept").is_err());
        assert_eq!(s.get("kept").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(WaktuError::StorageError(_))));
    }
}
