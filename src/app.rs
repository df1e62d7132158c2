//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::storage::settings::{load_settings, AppSettings};
use crate::storage::threads::ThreadStore;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
use crate::system::clock::{Clock, SystemClock};
use crate::types::board::{default_boards, BoardEntry, BoardRef};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Main panel currently shown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Board,
    Settings,
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub threads: ThreadStore,
    pub clock: Arc<dyn Clock>,
    pub settings: Signal<AppSettings>,
    pub boards: Signal<Vec<BoardEntry>>,
    /// Board picked in the sidebar, `None` until one is chosen
    pub current_board: Signal<Option<BoardRef>>,
    pub view: Signal<View>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let backend = open_backend(&settings);
        tracing::info!("AppState initialized");

        Self {
            threads: ThreadStore::new(backend),
            clock: Arc::new(SystemClock),
            settings: Signal::new(settings),
            boards: Signal::new(default_boards()),
            current_board: Signal::new(None),
            view: Signal::new(View::Board),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the durable comment store, falling back to memory when the data
/// directory is unusable.
fn open_backend(settings: &AppSettings) -> Arc<dyn KeyValueStore> {
    let store: Result<FileStore, StorageError> = match &settings.storage_file {
        Some(path) => Ok(FileStore::new(path.clone(), settings.storage_quota_bytes)),
        None => FileStore::open_default(settings.storage_quota_bytes),
    };

    match store {
        Ok(store) => {
            tracing::info!("Comment store at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Comment store unavailable, comments will not be saved: {}", e);
            Arc::new(MemoryStore::with_quota(settings.storage_quota_bytes))
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
