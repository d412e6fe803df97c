//! Browser Storage
//!
//! localStorage-backed implementation of the core storage backend. Reads
//! and writes are synchronous; a failed load falls back to an empty store
//! instead of crashing the app.

use marche_core::storage::{save_to, ListStore, StorageBackend, StorageError, StorageResult};
use marche_core::ShoppingList;

/// Key-value backend over `window.localStorage`
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    /// None when the browser denies storage access
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// Load the saved collection; on failure return an empty one plus a notice
pub fn load_lists() -> (Vec<ShoppingList>, Option<String>) {
    let Some(backend) = LocalStorageBackend::new() else {
        return (
            Vec::new(),
            Some("Le stockage local n'est pas disponible".to_string()),
        );
    };
    match ListStore::load(backend) {
        Ok(store) => (store.lists().to_vec(), None),
        Err(e) => {
            web_sys::console::error_1(&format!("[storage] load failed: {e}").into());
            (Vec::new(), Some(e.to_string()))
        }
    }
}

/// Write the full collection through localStorage; errors are logged only
pub fn persist_lists(lists: &[ShoppingList]) {
    let Some(backend) = LocalStorageBackend::new() else {
        web_sys::console::error_1(&"[storage] localStorage unavailable, changes not saved".into());
        return;
    };
    if let Err(e) = save_to(&backend, lists) {
        web_sys::console::error_1(&format!("[storage] save failed: {e}").into());
    }
}
