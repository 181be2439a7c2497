//! Profile snapshot card with live stat updates.

use dioxus::prelude::*;

use api::{endpoints, ApiConfig, PushEvent, StatChange, User};

use crate::{use_live_updates, use_request, use_session};

fn xp_percent(user: &User) -> u32 {
    user.current_xp * 100 / user.xp_to_next_level.max(1)
}

/// The signed-in user's gamified stats: level, streak, HP, habits
/// completed, and XP progress. Replaced wholesale by `user_update` events;
/// a level or HP change also surfaces a one-shot notice banner.
#[component]
pub fn UserCard() -> Element {
    let session = use_session();
    let mut user = use_signal(|| Option::<User>::None);
    let mut notice = use_signal(|| Option::<StatChange>::None);

    let fetch_user = use_request::<User>(move || {
        let id = session.peek().user_id.clone().unwrap_or_default();
        endpoints::user(&ApiConfig::default(), &id)
    });

    let _loader = use_resource(move || async move {
        if session.peek().user_id.is_none() {
            return;
        }
        if let Ok(snapshot) = fetch_user.send().await {
            user.set(Some(snapshot));
        }
    });

    use_live_updates(move |event| {
        if let PushEvent::UserUpdate { user_id, user_data } = event {
            if session.peek().user_id.as_deref() != Some(user_id.as_str()) {
                return;
            }
            let previous = user.peek().clone();
            if let Some(previous) = previous {
                notice.set(StatChange::classify(&previous, &user_data));
            }
            user.set(Some(user_data));
        }
    });

    rsx! {
        div {
            class: "card user-card",

            if fetch_user.loading() {
                div { class: "loading", "Loading..." }
            }
            if let Some(err) = fetch_user.error() {
                div { class: "alert alert-danger", "{err}" }
            }
            if let Some(change) = notice() {
                div { class: "alert alert-info stat-notice", {change.message()} }
            }

            if let Some(user) = user() {
                a { class: "user-card-name", href: "/profile", "{user.username}" }
                p { class: "user-card-stat", "Level {user.level}" }
                p { class: "user-card-stat", "Daily Streak {user.streak}" }
                p { class: "user-card-stat", "HP {user.hp}/{user.max_hp}" }
                p { class: "user-card-stat", "Total Habits Completed {user.habits_completed}" }
                div { class: "progress",
                    div {
                        class: "progress-fill",
                        style: format!("width: {}%", xp_percent(&user)),
                    }
                }
                p { class: "user-card-stat", "{user.current_xp}/{user.xp_to_next_level} XP" }
            }
        }
    }
}
