//! Typed access to the persisted session keys.

/// Storage key for the bearer credential returned by login.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the authenticated user's id.
pub const USER_ID_KEY: &str = "userId";

/// Synchronous key-value storage for session state.
///
/// `localStorage` is synchronous, so the trait is too. Writes are
/// last-write-wins; there is no transaction across keys.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The client-held session: user id and bearer token.
#[derive(Clone, Debug)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted user id, if a session exists.
    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY)
    }

    /// Persist the user id. An empty id means "no session" and removes the
    /// stored key entirely.
    pub fn set_user_id(&self, id: &str) {
        if id.is_empty() {
            self.store.remove(USER_ID_KEY);
        } else {
            self.store.set(USER_ID_KEY, id);
        }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Persist the bearer token. Empty removes the stored key.
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            self.store.remove(TOKEN_KEY);
        } else {
            self.store.set(TOKEN_KEY, token);
        }
    }

    /// Remove both persisted keys. Called on logout.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_ID_KEY);
    }
}
