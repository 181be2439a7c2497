//! Standalone habit list management page.

use dioxus::prelude::*;

use ui::{use_document_title, CreateHabitList, HabitListPanel};

#[component]
pub fn HabitLists() -> Element {
    use_document_title("Level-UP | Habit Lists");

    rsx! {
        div {
            class: "page",
            CreateHabitList {}
            HabitListPanel {}
        }
    }
}
