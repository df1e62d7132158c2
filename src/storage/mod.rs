//! Persistent storage
//!
//! This module handles all data persistence: the key-value store backing
//! comment threads, the threads themselves, and user settings.

pub mod kv;
pub mod settings;
pub mod threads;

use std::path::PathBuf;

pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Errors raised by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
    #[error("Storage quota exceeded: {needed} bytes needed, limit is {limit} bytes")]
    QuotaExceeded { needed: u64, limit: u64 },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "TeamBoard", "TeamBoard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
