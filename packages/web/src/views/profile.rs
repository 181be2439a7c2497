//! Profile page: the full stat sheet, plus profile editing.

use dioxus::prelude::*;
use serde_json::json;

use api::{endpoints, ApiConfig, RequestOverrides, User};
use ui::{use_document_title, use_request, use_session};

fn xp_percent(user: &User) -> u32 {
    user.current_xp * 100 / user.xp_to_next_level.max(1)
}

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let mut user = use_signal(|| Option::<User>::None);
    let mut form_visible = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut mismatch = use_signal(|| false);
    let mut update_success = use_signal(|| false);

    let fetch_user = use_request::<User>(move || {
        let id = session.peek().user_id.clone().unwrap_or_default();
        endpoints::user(&ApiConfig::default(), &id)
    });
    let update = use_request::<User>(move || {
        let id = session.peek().user_id.clone().unwrap_or_default();
        endpoints::update_user(&ApiConfig::default(), &id, json!({}))
    });

    use_document_title("Level-UP | Profile");

    let _loader = use_resource(move || async move {
        if session.peek().user_id.is_none() {
            return;
        }
        if let Ok(snapshot) = fetch_user.send().await {
            username.set(snapshot.username.clone());
            email.set(snapshot.email.clone());
            user.set(Some(snapshot));
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if new_password.peek().as_str() != confirm_password.peek().as_str() {
            mismatch.set(true);
            return;
        }
        mismatch.set(false);

        spawn(async move {
            let mut payload = json!({
                "username": username.peek().clone(),
                "email": email.peek().clone(),
            });
            if !new_password.peek().is_empty() {
                payload["current_password"] = json!(current_password.peek().clone());
                payload["new_password"] = json!(new_password.peek().clone());
            }

            let overrides = RequestOverrides::new().body(payload);
            match update.send_with(overrides).await {
                Ok(updated) => {
                    user.set(Some(updated));
                    update_success.set(true);
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(_) => update_success.set(false),
            }
        });
    };

    rsx! {
        div {
            class: "page profile",

            if fetch_user.loading() {
                div { class: "loading", "Loading..." }
            }
            if let Some(err) = fetch_user.error() {
                div { class: "alert alert-danger", "{err}" }
            }

            if let Some(user) = user() {
                div { class: "card profile-basics",
                    h2 { "{user.username}" }
                    p { "Email: {user.email}" }
                    span { class: "badge", "Level {user.level}" }
                    p { "Daily Streak: {user.streak}" }
                    p { "Habits Completed: {user.habits_completed}" }
                    p { "XP: {user.current_xp}/{user.xp_to_next_level}" }
                    div { class: "progress",
                        div {
                            class: "progress-fill",
                            style: format!("width: {}%", xp_percent(&user)),
                        }
                    }

                    button {
                        class: "btn btn-outline",
                        onclick: move |_| form_visible.set(!form_visible()),
                        if form_visible() { "Hide" } else { "Edit Profile" }
                    }

                    if form_visible() {
                        form {
                            onsubmit: handle_submit,
                            label { "Username"
                                input {
                                    class: "form-control",
                                    value: username(),
                                    oninput: move |evt: FormEvent| username.set(evt.value()),
                                }
                            }
                            label { "Email"
                                input {
                                    class: "form-control",
                                    r#type: "email",
                                    value: email(),
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                }
                            }
                            label { "Current Password"
                                input {
                                    class: "form-control",
                                    r#type: "password",
                                    value: current_password(),
                                    oninput: move |evt: FormEvent| current_password.set(evt.value()),
                                }
                            }
                            label { "New Password"
                                input {
                                    class: "form-control",
                                    r#type: "password",
                                    value: new_password(),
                                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                                }
                            }
                            label { "Confirm New Password"
                                input {
                                    class: "form-control",
                                    r#type: "password",
                                    value: confirm_password(),
                                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: update.loading(),
                                if update.loading() { "Saving..." } else { "Save" }
                            }
                        }
                        if mismatch() {
                            div { class: "alert alert-danger", "Passwords do not match" }
                        }
                        if let Some(err) = update.error() {
                            div { class: "alert alert-danger", "{err}" }
                        }
                        if update_success() {
                            div { class: "alert alert-success", "Profile updated successfully" }
                        }
                    }
                }

                div { class: "stats-grid",
                    div { class: "card stat-card",
                        span { class: "stat-label", "HP" }
                        span { class: "stat-value", "{user.hp}/{user.max_hp}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Strength" }
                        span { class: "stat-value", "{user.strength}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Vitality" }
                        span { class: "stat-value", "{user.vitality}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Dexterity" }
                        span { class: "stat-value", "{user.dexterity}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Intelligence" }
                        span { class: "stat-value", "{user.intelligence}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Luck" }
                        span { class: "stat-value", "{user.luck}" }
                    }
                }
            }
        }
    }
}
