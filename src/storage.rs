//! Key/Value Storage
//!
//! Persistence behind the session and theme: browser local storage in the
//! app, an in-memory map in tests or when local storage is unavailable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Local storage when the browser grants it, otherwise an in-memory map
    pub fn shared() -> Arc<dyn KeyValueStore> {
        if Self::local().is_some() {
            Arc::new(BrowserStorage)
        } else {
            tracing::warn!("local storage unavailable, session will not survive a reload");
            Arc::new(MemoryStorage::default())
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::local() else { return };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, "local storage write failed: {:?}", e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::local() else { return };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, "local storage remove failed: {:?}", e);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
