//! Leaderboard page: ranked user list from the backend.

use dioxus::prelude::*;

use api::{endpoints, ApiConfig, LeaderboardEntry};
use ui::{use_document_title, use_request};

#[component]
pub fn Leaderboard() -> Element {
    let mut users = use_signal(Vec::<LeaderboardEntry>::new);

    let fetch =
        use_request::<Vec<LeaderboardEntry>>(|| endpoints::leaderboard(&ApiConfig::default()));

    use_document_title("Level-UP | Leaderboard");

    let _loader = use_resource(move || async move {
        if let Ok(entries) = fetch.send().await {
            users.set(entries);
        }
    });

    rsx! {
        div {
            class: "page leaderboard",
            h2 { "Leaderboard" }

            if fetch.loading() {
                div { class: "loading", "Loading..." }
            }
            if let Some(err) = fetch.error() {
                div { class: "alert alert-danger", "{err}" }
            }

            for (index, user) in users().into_iter().enumerate() {
                div { key: "{user.id}", class: "leaderboard-row",
                    div { class: "leaderboard-user",
                        span { class: "leaderboard-name", "{user.username}" }
                        span { class: "leaderboard-rank", {format!("Rank #{}", index + 1)} }
                    }
                    span { "Level: {user.level}" }
                    span { "XP: {user.xp}" }
                }
            }
        }
    }
}
