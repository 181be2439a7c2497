//! `localStorage`-backed SessionStore for the web platform.
//!
//! A missing or unavailable `localStorage` (private browsing, storage quota)
//! reads as "no stored value"; writes into it are dropped. The backend copy
//! of everything except the session is authoritative anyway.

use crate::session::SessionStore;

/// Browser localStorage. Zero-size; the storage handle is re-acquired per
/// operation because `web_sys::Storage` is not `Clone`-friendly across
/// component boundaries.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
