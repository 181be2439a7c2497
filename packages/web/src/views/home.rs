//! Landing page.

use dioxus::prelude::*;

use ui::use_document_title;

use crate::Route;

#[component]
pub fn Home() -> Element {
    use_document_title("Level-UP");

    rsx! {
        div {
            class: "hero",
            h1 { "Level-UP" }
            p {
                class: "hero-tagline",
                "Turn your habits into a game. Build routines, earn XP, keep \
                 your streak alive, and climb the leaderboard."
            }
            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Signup {}, "Get Started" }
                Link { class: "btn btn-outline", to: Route::Login {}, "Login" }
            }
        }
    }
}
