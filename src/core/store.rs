//! # Persisted Selection Store
//!
//! A tiny key-value capability. Grids write the raw value of the activated
//! item under their select key; value boxes read it back on every render.
//!
//! Stores are shared as `Arc<dyn KeyValueStore>` and take `&self`, so the
//! writer and the readers never need to coordinate ownership.
//!
//! `FileStore` persists to `~/.focusbox/store.json`. Every write rewrites the
//! whole file via `.tmp` + `rename()`. Last write wins.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "store parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// A poisoned lock still holds a usable map; the panicking writer never
/// leaves it half-updated.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-process store. Used by tests and `--ephemeral`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        lock(&self.values).insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of the store file.
#[derive(Serialize, Deserialize, Default, Debug)]
struct StoreFile {
    updated_at: i64,
    values: BTreeMap<String, String>,
}

/// JSON-file backed store. The map is cached in memory after `open`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

/// Returns `~/.focusbox/store.json`.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".focusbox").join("store.json"))
}

impl FileStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = if path.exists() {
            let json = fs::read_to_string(&path).map_err(StoreError::Io)?;
            let file: StoreFile = serde_json::from_str(&json).map_err(StoreError::Parse)?;
            info!(
                "Loaded {} stored values from {}",
                file.values.len(),
                path.display()
            );
            file.values
        } else {
            info!("No store file at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(StoreError::Io)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data).map_err(StoreError::Parse)?;
    fs::write(&tmp_path, json).map_err(StoreError::Io)?;
    fs::rename(&tmp_path, path).map_err(StoreError::Io)?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    /// The cached map only changes once the file write succeeds, so a failed
    /// write leaves memory and disk agreeing on the previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = lock(&self.values);
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());

        let file = StoreFile {
            updated_at: Utc::now().timestamp(),
            values: next,
        };
        atomic_write_json(&self.path, &file)?;
        *values = file.values;
        debug!("Stored {}={:?} in {}", key, value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_last_write_wins() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("selectedValue"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set("selectedValue", "B").unwrap();
        store.set("other", "x").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("selectedValue").as_deref(), Some("B"));
        assert_eq!(reopened.get("other").as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_records_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let file: StoreFile = serde_json::from_str(&json).unwrap();
        assert!(file.updated_at > 0);
        assert_eq!(file.values.get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        store.set("k", "old").unwrap();

        // A directory at the temp path makes the next write fail
        fs::create_dir(path.with_extension("tmp")).unwrap();
        let err = store.set("k", "new").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));

        assert_eq!(store.get("k").as_deref(), Some("old"));
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").as_deref(), Some("old"));
    }

    #[test]
    fn test_file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
        assert!(err.to_string().starts_with("store parse error"));
    }
}
