//! Session context: who is logged in, persisted across visits.

use dioxus::prelude::*;

/// Session state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user_id: Option<String>,
}

impl SessionState {
    pub fn logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Get the current session.
///
/// Panics when called outside a [`SessionProvider`]; that is a wiring bug,
/// not a runtime condition.
pub fn use_session() -> Signal<SessionState> {
    use_hook(|| {
        try_consume_context::<Signal<SessionState>>()
            .expect("use_session must be called under a SessionProvider")
    })
}

/// Provider that loads the persisted session at startup and writes every
/// change back. Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState {
        user_id: store::session_store().user_id(),
    });

    // Persist on change; a cleared id removes the stored key.
    use_effect(move || {
        let state = session();
        let stored = store::session_store();
        match &state.user_id {
            Some(id) => stored.set_user_id(id),
            None => stored.set_user_id(""),
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
