//! Browser Storage Backend
//!
//! `KeyValueStorage` over `window.localStorage`.

use async_trait::async_trait;
use todo_core::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `localStorage` handle; `None` when the browser refuses access
/// (private mode, sandboxed iframe)
pub struct WebStorage {
    storage: Option<web_sys::Storage>,
}

impl WebStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is unavailable, changes will not be saved");
        }
        Self { storage }
    }

    fn handle(&self) -> StorageResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".to_string()))
    }

    /// Synchronous read, for use before the app mounts
    pub fn read_now(&self, key: &str) -> StorageResult<Option<String>> {
        self.handle()?
            .get_item(key)
            .map_err(|err| StorageError::Read(js_error(err)))
    }
}

#[async_trait(?Send)]
impl KeyValueStorage for WebStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.read_now(key)
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_error(err)))
    }
}

/// Best-effort text for a thrown JS value (e.g. `QuotaExceededError`)
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
