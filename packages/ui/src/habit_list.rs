//! Habit list browser: pick a list, work through its habits.
//!
//! Selecting a list fires the preset and custom fetches concurrently and
//! recomputes the merged view as each one lands, so a half-merged list is
//! briefly visible. A response is only applied while its list is still the
//! selected one, which keeps a slow response for list A from leaking into a
//! later selection of list B.

use dioxus::prelude::*;
use serde_json::Value;

use api::{
    endpoints, models, ApiConfig, CustomHabit, Habit, HabitList, PresetHabit, PushEvent,
    RequestOverrides,
};

use crate::{use_live_updates, use_request};

#[component]
pub fn HabitListPanel() -> Element {
    let mut habit_lists = use_signal(Vec::<HabitList>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let mut preset = use_signal(|| Option::<Vec<PresetHabit>>::None);
    let mut custom = use_signal(|| Option::<Vec<CustomHabit>>::None);
    let mut habits = use_signal(Vec::<Habit>::new);

    let fetch_lists =
        use_request::<Vec<HabitList>>(|| endpoints::user_habit_lists(&ApiConfig::default()));
    let fetch_preset =
        use_request::<Vec<PresetHabit>>(|| endpoints::list_preset_habits(&ApiConfig::default(), ""));
    let fetch_custom =
        use_request::<Vec<CustomHabit>>(|| endpoints::list_custom_habits(&ApiConfig::default(), ""));
    let complete =
        use_request::<Value>(|| endpoints::user_habit_lists(&ApiConfig::default()));
    let delete =
        use_request::<Value>(|| endpoints::user_habit_lists(&ApiConfig::default()));

    let _loader = use_resource(move || async move {
        if let Ok(lists) = fetch_lists.send().await {
            habit_lists.set(lists);
        }
    });

    // Recompute the merged view on every partial arrival.
    use_effect(move || {
        let merged = models::merge_habits(preset().as_deref(), custom().as_deref());
        habits.set(merged);
    });

    use_live_updates(move |event| match event {
        PushEvent::HabitListCreated(list) => {
            habit_lists.with_mut(|lists| lists.push(list));
        }
        PushEvent::HabitListUpdate {
            habit_list_id,
            habit_list_data,
        } => {
            if selected.peek().as_deref() == Some(habit_list_id.as_str()) {
                habits.set(habit_list_data.habits.clone());
            }
            habit_lists.with_mut(|lists| {
                if let Some(existing) = lists.iter_mut().find(|list| list.id == habit_list_id) {
                    *existing = habit_list_data;
                }
            });
        }
        PushEvent::UserUpdate { .. } => {}
    });

    let mut select_list = move |list_id: String| {
        selected.set(Some(list_id.clone()));
        preset.set(None);
        custom.set(None);

        let preset_id = list_id.clone();
        spawn(async move {
            let request = endpoints::list_preset_habits(&ApiConfig::default(), &preset_id);
            if let Ok(items) = fetch_preset
                .send_with(RequestOverrides::from_config(request))
                .await
            {
                if selected.peek().as_deref() == Some(preset_id.as_str()) {
                    preset.set(Some(items));
                }
            }
        });

        let custom_id = list_id;
        spawn(async move {
            let request = endpoints::list_custom_habits(&ApiConfig::default(), &custom_id);
            if let Ok(items) = fetch_custom
                .send_with(RequestOverrides::from_config(request))
                .await
            {
                if selected.peek().as_deref() == Some(custom_id.as_str()) {
                    custom.set(Some(items));
                }
            }
        });
    };

    let complete_habit = move |habit: Habit| {
        let Some(list_id) = selected.peek().clone() else {
            return;
        };
        spawn(async move {
            let request =
                endpoints::complete_habit(&ApiConfig::default(), &list_id, &habit.id, habit.r#type);
            match complete
                .send_with(RequestOverrides::from_config(request))
                .await
            {
                Ok(_) => {
                    // Optimistic removal; the next refresh or push event
                    // reconciles.
                    habits.with_mut(|list| list.retain(|h| h.id != habit.id));
                }
                Err(err) => tracing::error!("complete habit: {err}"),
            }
        });
    };

    let delete_list = move |list_id: String| {
        spawn(async move {
            let request = endpoints::delete_habit_list(&ApiConfig::default(), &list_id);
            match delete
                .send_with(RequestOverrides::from_config(request))
                .await
            {
                Ok(_) => {
                    habit_lists.with_mut(|lists| lists.retain(|list| list.id != list_id));
                    if selected.peek().as_deref() == Some(list_id.as_str()) {
                        selected.set(None);
                        preset.set(None);
                        custom.set(None);
                    }
                }
                Err(err) => tracing::error!("delete habit list: {err}"),
            }
        });
    };

    rsx! {
        div {
            class: "card",
            h2 { "All Habits" }

            div { class: "list-select",
                label { "Select Habit List:" }
                if fetch_lists.loading() {
                    div { class: "loading", "Loading lists..." }
                }
                if let Some(err) = fetch_lists.error() {
                    div { class: "alert alert-danger", "{err}" }
                }
                select {
                    class: "form-select",
                    value: selected().unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        if !value.is_empty() {
                            select_list(value);
                        }
                    },
                    option { value: "", disabled: true, "Select a habit list" }
                    for list in habit_lists() {
                        option { key: "{list.id}", value: "{list.id}", "{list.name}" }
                    }
                }
                if let Some(list_id) = selected() {
                    button {
                        class: "btn btn-outline btn-danger",
                        onclick: move |_| delete_list(list_id.clone()),
                        "Delete Selected List"
                    }
                }
            }

            if fetch_preset.loading() || fetch_custom.loading() {
                div { class: "loading", "Loading..." }
            }
            if let Some(err) = fetch_preset.error().or(fetch_custom.error()) {
                div { class: "alert alert-danger", "{err}" }
            }

            ul { class: "habit-items",
                if habits().is_empty() {
                    li { class: "habit-item", "No habits found for this list." }
                }
                for habit in habits() {
                    li { key: "{habit.id}", class: "habit-item",
                        p { "{habit.description}" }
                        button {
                            class: "btn btn-outline btn-success",
                            onclick: {
                                let item = habit.clone();
                                move |_| complete_habit(item.clone())
                            },
                            "Complete"
                        }
                    }
                }
            }
        }
    }
}
