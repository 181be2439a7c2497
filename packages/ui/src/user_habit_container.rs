//! The user's own custom habits, added to a chosen list.

use dioxus::prelude::*;
use serde_json::Value;

use api::{endpoints, ApiConfig, CustomHabit, HabitList, PushEvent, RequestOverrides};

use crate::{use_live_updates, use_request};

#[component]
pub fn UserHabitContainer() -> Element {
    let mut habits = use_signal(Vec::<CustomHabit>::new);
    let mut selected_habits = use_signal(Vec::<String>::new);
    let mut habit_lists = use_signal(Vec::<HabitList>::new);
    let mut selected_list = use_signal(|| Option::<String>::None);
    let mut add_error = use_signal(|| Option::<String>::None);
    let mut add_success = use_signal(|| false);

    let fetch_habits =
        use_request::<Vec<CustomHabit>>(|| endpoints::user_custom_habits(&ApiConfig::default()));
    let fetch_lists =
        use_request::<Vec<HabitList>>(|| endpoints::user_habit_lists(&ApiConfig::default()));
    let add_habits =
        use_request::<Value>(|| endpoints::add_custom_habits(&ApiConfig::default(), "", &[]));

    let _loader = use_resource(move || async move {
        let (mine, lists) = futures::join!(fetch_habits.send(), fetch_lists.send());
        if let Ok(mine) = mine {
            habits.set(mine);
        }
        if let Ok(lists) = lists {
            habit_lists.set(lists);
        }
    });

    use_live_updates(move |event| {
        if let PushEvent::HabitListCreated(list) = event {
            habit_lists.with_mut(|lists| lists.push(list));
        }
    });

    let mut toggle_habit = move |habit_id: String| {
        selected_habits.with_mut(|selected| {
            if let Some(position) = selected.iter().position(|id| *id == habit_id) {
                selected.remove(position);
            } else {
                selected.push(habit_id);
            }
        });
    };

    let handle_add = move |_| {
        let Some(list_id) = selected_list.peek().clone() else {
            add_error.set(Some("Please select a habit list first.".to_string()));
            return;
        };
        let ids = selected_habits.peek().clone();
        spawn(async move {
            let request = endpoints::add_custom_habits(&ApiConfig::default(), &list_id, &ids);
            match add_habits
                .send_with(RequestOverrides::from_config(request))
                .await
            {
                Ok(_) => {
                    add_success.set(true);
                    add_error.set(None);
                }
                Err(_) => {
                    add_error.set(Some("Failed to add habits to the list.".to_string()));
                    add_success.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "card",
            h2 { "My Habits" }

            if fetch_habits.loading() {
                div { class: "loading", "Loading habits..." }
            }
            if let Some(err) = fetch_habits.error() {
                div { class: "alert alert-danger", "{err}" }
            }

            ul { class: "habit-choices",
                for habit in habits() {
                    li { key: "{habit.id}",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: selected_habits().contains(&habit.id),
                                onchange: {
                                    let id = habit.id.clone();
                                    move |_| toggle_habit(id.clone())
                                },
                            }
                            "{habit.description}"
                        }
                    }
                }
            }

            div { class: "list-select",
                label { "My Habit Lists:" }
                if fetch_lists.loading() {
                    div { class: "loading", "Loading lists..." }
                }
                if let Some(err) = fetch_lists.error() {
                    div { class: "alert alert-danger", "{err}" }
                }
                select {
                    class: "form-select",
                    value: selected_list().unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        selected_list.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", disabled: true, "Select a habit list" }
                    for list in habit_lists() {
                        option { key: "{list.id}", value: "{list.id}", "{list.name}" }
                    }
                }
            }

            button {
                class: "btn btn-outline",
                disabled: selected_habits().is_empty(),
                onclick: handle_add,
                "Add Selected Habits to List"
            }

            if add_success() {
                div { class: "alert alert-success", "Habits added successfully!" }
            }
            if let Some(err) = add_error() {
                div { class: "alert alert-danger", "{err}" }
            }
        }
    }
}
