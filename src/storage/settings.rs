//! Settings storage
//!
//! Manages persistence of user preferences and application settings.

use crate::storage::kv::DEFAULT_QUOTA_BYTES;
use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const MIN_QUOTA_BYTES: u64 = 64 * 1024;
const MAX_QUOTA_BYTES: u64 = 64 * 1024 * 1024;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Name shown as the author of new comments
    #[serde(default)]
    pub display_name: Option<String>,
    /// UI language: "ko" or "en"
    #[serde(default = "default_language")]
    pub language: String,
    /// Size limit of the comment store file
    #[serde(default = "default_quota")]
    pub storage_quota_bytes: u64,
    /// Custom location of the comment store file
    #[serde(default)]
    pub storage_file: Option<PathBuf>,
}

fn default_language() -> String {
    "ko".to_string()
}

fn default_quota() -> u64 {
    DEFAULT_QUOTA_BYTES
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            display_name: None,
            language: default_language(),
            storage_quota_bytes: default_quota(),
            storage_file: None,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.language != "ko" && self.language != "en" {
            self.language = default_language();
        }

        self.storage_quota_bytes = self
            .storage_quota_bytes
            .clamp(MIN_QUOTA_BYTES, MAX_QUOTA_BYTES);

        self.display_name = self
            .display_name
            .take()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
    }

    pub fn is_en(&self) -> bool {
        self.language == "en"
    }

    /// Author name for new comments
    ///
    /// Falls back to a placeholder when no display name is set.
    pub fn author_name(&self) -> String {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if self.is_en() => "Current user".to_string(),
            _ => "현재 유저".to_string(),
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match load_settings_internal() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_internal() -> Result<AppSettings, StorageError> {
    let path = get_settings_path()?;

    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(&path)?;
    let mut settings = parse_settings(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

fn parse_settings(json: &str) -> Result<AppSettings, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    let path = get_settings_path()?;

    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
