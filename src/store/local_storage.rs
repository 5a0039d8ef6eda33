//! Browser localStorage store for WASM builds.

use super::{LayoutStore, StoreError};

/// A store backed by `window.localStorage`.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Open the window's localStorage.
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Storage("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| StoreError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl LayoutStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read {:?} from localStorage: {:?}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("Failed to save to localStorage: {:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Storage(format!("Failed to remove from localStorage: {:?}", e)))
    }
}
