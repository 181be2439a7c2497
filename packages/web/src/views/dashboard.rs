//! Dashboard, the working surface: lists, categories, custom habits, and
//! the live stat card.

use dioxus::prelude::*;

use ui::{
    use_document_title, CategoryContainer, CreateHabitList, CustomHabitForm, HabitListPanel,
    UserCard, UserHabitContainer,
};

#[component]
pub fn Dashboard() -> Element {
    use_document_title("Level-UP | Dashboard");

    rsx! {
        div {
            class: "dashboard-grid",
            section {
                class: "dashboard-main",
                CreateHabitList {}
                HabitListPanel {}
            }
            aside {
                class: "dashboard-side",
                UserCard {}
                CategoryContainer {}
                CustomHabitForm {}
                UserHabitContainer {}
            }
        }
    }
}
