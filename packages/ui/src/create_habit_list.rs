//! Name-only form that creates a habit list.

use dioxus::prelude::*;
use serde_json::json;

use api::{endpoints, ApiConfig, CreatedHabitList, HabitList, RequestOverrides};

use crate::use_request;

#[component]
pub fn CreateHabitList(on_created: Option<EventHandler<HabitList>>) -> Element {
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let create =
        use_request::<CreatedHabitList>(|| endpoints::create_habit_list(&ApiConfig::default(), ""));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let list_name = name.peek().trim().to_string();
        if list_name.is_empty() {
            return;
        }
        spawn(async move {
            let overrides = RequestOverrides::new().body(json!({ "name": list_name }));
            match create.send_with(overrides).await {
                Ok(created) => {
                    if let Some(handler) = &on_created {
                        handler.call(HabitList {
                            id: created.id,
                            name: list_name.clone(),
                            habits: Vec::new(),
                        });
                    }
                    name.set(String::new());
                    error.set(None);
                }
                Err(_) => error.set(Some("Failed to create habit list.".to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "card",
            form {
                onsubmit: handle_submit,
                input {
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Enter habit list name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button {
                    class: "btn btn-outline",
                    r#type: "submit",
                    disabled: create.loading(),
                    "Create Habit List"
                }
            }
            if let Some(err) = error() {
                div { class: "alert alert-danger", "{err}" }
            }
        }
    }
}
