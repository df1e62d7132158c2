//! Key-value storage backends
//!
//! A synchronous string-to-string store in the spirit of browser local
//! storage. Comment threads only ever talk to the [`KeyValueStore`] trait.

use crate::storage::{get_data_dir, StorageError};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name of the on-disk store inside the data directory
pub const STORE_FILE_NAME: &str = "local_storage.json";

/// Default quota, matching the usual browser local storage budget
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Synchronous durable key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read the value at `key`, `None` when nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value at `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Size of a map once serialized, the unit quotas are measured in.
fn serialized_size(entries: &BTreeMap<String, String>) -> Result<u64, StorageError> {
    Ok(serde_json::to_vec(entries)?.len() as u64)
}

/// Key-value store persisted as a single JSON object on disk
///
/// Every write rewrites the whole file through a temporary sibling that is
/// synced to disk before it is renamed over the store, so a crash mid-write
/// leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    quota_bytes: u64,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, quota_bytes: u64) -> Self {
        Self {
            path: path.into(),
            quota_bytes,
            lock: Mutex::new(()),
        }
    }

    /// Open the store at its default location in the data directory
    pub fn open_default(quota_bytes: u64) -> Result<Self, StorageError> {
        Ok(Self::new(get_data_dir()?.join(STORE_FILE_NAME), quota_bytes))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&json)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        let needed = json.len() as u64;
        if needed > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                needed,
                limit: self.quota_bytes,
            });
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;

        tracing::debug!("Wrote key {} to {}", key, self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, String>,
    writes: usize,
    unavailable: bool,
}

/// In-process key-value store
///
/// Used by tests and as a fallback when the data directory cannot be used.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
    quota_bytes: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: u64) -> Self {
        Self {
            inner: Mutex::new(MemoryInner::default()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.writes).unwrap_or(0)
    }

    /// Make every following write fail as if storage were unavailable
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = unavailable;
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;

        if inner.unavailable {
            return Err(StorageError::Unavailable("writes are disabled".to_string()));
        }

        if let Some(limit) = self.quota_bytes {
            let mut candidate = inner.entries.clone();
            candidate.insert(key.to_string(), value.to_string());
            let needed = serialized_size(&candidate)?;
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }

        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}
