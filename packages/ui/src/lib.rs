//! Shared UI for the LevelUP client: the session context, the request and
//! live-update hooks, and the widgets the pages compose.

use dioxus::prelude::*;

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod request;
pub use request::{use_request, UseRequest};

mod live;
pub use live::use_live_updates;

mod navbar;
pub use navbar::{LogoutLink, Navbar};

mod footer;
pub use footer::Footer;

mod user_card;
pub use user_card::UserCard;

mod create_habit_list;
pub use create_habit_list::CreateHabitList;

mod custom_habit_form;
pub use custom_habit_form::CustomHabitForm;

mod category_container;
pub use category_container::CategoryContainer;

mod user_habit_container;
pub use user_habit_container::UserHabitContainer;

mod habit_list;
pub use habit_list::HabitListPanel;

/// Set the browser tab title on mount.
pub fn use_document_title(title: &'static str) {
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = title;
    });
}
