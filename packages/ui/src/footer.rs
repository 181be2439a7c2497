use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { "Level-UP: turn your routines into a game." }
            p { class: "footer-fineprint", "© 2024 Level-UP" }
        }
    }
}
