//! Durable client-side state: the access token and the user id.
//!
//! These are the only two values the client keeps between visits. Everything
//! else it renders is a transient snapshot owned by the backend.

mod memory;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

mod session;
pub use session::{Session, SessionStore, TOKEN_KEY, USER_ID_KEY};

/// Create a platform-appropriate session store.
///
/// - **Web** (wasm): browser `localStorage` via [`BrowserStore`]
/// - **Native** (tests, tooling): process-local [`MemoryStore`]
pub fn session_store() -> Session<impl SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Session::new(BrowserStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Session::new(MemoryStore::new())
    }
}
