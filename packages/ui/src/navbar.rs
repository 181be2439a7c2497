use dioxus::prelude::*;

use crate::{use_session, SessionState};

/// Top navigation bar. The shell supplies the links as children so this
/// crate stays independent of the route table.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}

/// Clears the session and returns to the login page.
#[component]
pub fn LogoutLink() -> Element {
    let mut session = use_session();

    let handle_logout = move |_| {
        store::session_store().clear();
        session.set(SessionState::default());
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    rsx! {
        a {
            class: "navbar-link",
            onclick: handle_logout,
            "Logout"
        }
    }
}
