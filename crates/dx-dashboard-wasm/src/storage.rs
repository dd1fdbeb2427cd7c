//! Browser `localStorage` as a [`KeyValueStore`].

use dx_dashboard_core::{DashboardError, KeyValueStore, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`, if the page is allowed to use it.
///
/// When storage is blocked (private browsing, sandboxed frames) every call
/// fails with a storage error.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Open the window's local storage.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    /// Whether local storage could be opened.
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| DashboardError::Storage("localStorage unavailable".to_string()))
    }
}

fn storage_error(e: JsValue) -> DashboardError {
    DashboardError::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(storage_error)
    }
}
