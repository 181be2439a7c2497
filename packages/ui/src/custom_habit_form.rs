//! Form for authoring a custom habit, validated before submission.

use dioxus::prelude::*;
use serde_json::json;

use api::{endpoints, validation, ApiConfig, CustomHabit, RequestOverrides};

use crate::use_request;

#[component]
pub fn CustomHabitForm(on_created: Option<EventHandler<CustomHabit>>) -> Element {
    let mut description = use_signal(String::new);
    let mut validation_errors = use_signal(Vec::<String>::new);

    let create =
        use_request::<CustomHabit>(|| endpoints::create_custom_habit(&ApiConfig::default(), ""));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let text = description.peek().clone();
        let errors = validation::validate_habit_description(&text);
        if !errors.is_empty() {
            validation_errors.set(errors);
            return;
        }
        validation_errors.set(Vec::new());

        spawn(async move {
            let overrides = RequestOverrides::new().body(json!({ "description": text }));
            if let Ok(habit) = create.send_with(overrides).await {
                if let Some(handler) = &on_created {
                    handler.call(habit);
                }
                description.set(String::new());
            }
        });
    };

    rsx! {
        div {
            class: "card",
            h2 { "Create a New Habit" }
            form {
                onsubmit: handle_submit,
                input {
                    class: "form-control",
                    r#type: "text",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                button {
                    class: "btn btn-outline",
                    r#type: "submit",
                    disabled: create.loading(),
                    if create.loading() { "Creating..." } else { "Create Habit" }
                }
            }
            if !validation_errors().is_empty() {
                div { class: "alert alert-danger",
                    ul {
                        for message in validation_errors() {
                            li { "{message}" }
                        }
                    }
                }
            }
            if let Some(err) = create.error() {
                div { class: "alert alert-danger", "{err}" }
            }
            if create.data().is_some() {
                div { class: "alert alert-success", "Habit created successfully!" }
            }
        }
    }
}
