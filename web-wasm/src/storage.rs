//! ブラウザ localStorage によるキー・値ストア

use ocr_client_common::{Error, KeyValueStore, Result};
use web_sys::Storage;

/// `window.localStorage` を使うストア
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("window is not available".into()))?
            .local_storage()
            .map_err(|e| Error::Storage(format!("{:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage is not available".into()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{}: {:?}", key, e)))
    }
}
