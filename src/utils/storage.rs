//! Key-value persistence for user preferences.
//!
//! The browser build stores entries in `window.localStorage`; everything else
//! (desktop, tests) falls back to an in-memory map that lives as long as the
//! process.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries, which lets a test hand one
/// copy to the code under test and inspect another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.storage.set_item(key, value)?)
    }
}

/// Store handle shared through the Dioxus context.
#[derive(Clone)]
pub struct SharedStore(pub Rc<dyn PreferenceStore>);

impl SharedStore {
    /// Picks the persistent backend when one exists, otherwise memory.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match BrowserStorage::local() {
                Ok(storage) => {
                    return SharedStore(Rc::new(storage));
                }
                Err(e) => {
                    log::warn!("Falling back to in-memory preferences: {}", e);
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        log::info!("No persistent preference storage on this platform, using memory");

        SharedStore(Rc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.0.as_ref()
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(view.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_entry("theme", "dark");
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_platform_default_is_memory_natively() {
        let shared = SharedStore::platform_default();
        assert_eq!(shared.store().get("theme").unwrap(), None);
        assert!(shared == shared.clone());
    }
}
