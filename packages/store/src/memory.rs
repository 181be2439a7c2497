use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
///
/// Clones share the same map, so a clone behaves like a second handle onto
/// the same storage, the closest native analogue to a browser profile.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, USER_ID_KEY};

    #[test]
    fn test_user_id_survives_reload() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.set_user_id("user-42");

        // A fresh Session over the same storage is what a page reload sees.
        let reloaded = Session::new(store);
        assert_eq!(reloaded.user_id(), Some("user-42".to_string()));
    }

    #[test]
    fn test_empty_user_id_removes_key() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.set_user_id("user-42");
        session.set_user_id("");

        assert_eq!(session.user_id(), None);
        assert_eq!(store.get(USER_ID_KEY), None);
    }

    #[test]
    fn test_token_roundtrip() {
        let session = Session::new(MemoryStore::new());

        assert_eq!(session.token(), None);
        session.set_token("jwt-abc");
        assert_eq!(session.token(), Some("jwt-abc".to_string()));
        session.set_token("");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.set_user_id("user-42");
        session.set_token("jwt-abc");
        session.clear();

        assert_eq!(session.user_id(), None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let session = Session::new(MemoryStore::new());

        session.set_user_id("first");
        session.set_user_id("second");

        assert_eq!(session.user_id(), Some("second".to_string()));
    }
}
