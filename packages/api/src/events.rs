//! Push events from the backend's live channel.
//!
//! The channel delivers JSON frames of the shape
//! `{"event": "<name>", "data": <payload>}` over one websocket per mounted
//! view. Events are decoded into [`PushEvent`] and handed to the view in
//! arrival order; unknown names and malformed payloads are skipped.

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::models::{HabitList, User};

/// One named event off the push channel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushEvent {
    /// A habit list was created; views append it to their local list.
    HabitListCreated(HabitList),
    /// A user's stats changed; views holding that user replace their
    /// snapshot wholesale.
    UserUpdate { user_id: String, user_data: User },
    /// A list's contents changed; views replace the matching list.
    HabitListUpdate {
        habit_list_id: String,
        habit_list_data: HabitList,
    },
}

/// Decode one wire frame. `None` for anything that is not a known event.
pub fn decode(text: &str) -> Option<PushEvent> {
    match serde_json::from_str(text) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::debug!("skipping push frame: {err}");
            None
        }
    }
}

/// User-visible consequence of a `user_update`, relative to the previous
/// snapshot. At most one per event; a level change wins over an HP change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatChange {
    LevelUp(u32),
    HpLoss,
    HpRestored,
}

impl StatChange {
    pub fn classify(old: &User, new: &User) -> Option<StatChange> {
        if new.level > old.level {
            Some(StatChange::LevelUp(new.level))
        } else if new.hp < old.hp {
            Some(StatChange::HpLoss)
        } else if new.hp > old.hp {
            Some(StatChange::HpRestored)
        } else {
            None
        }
    }

    /// The banner text for this notice.
    pub fn message(&self) -> String {
        match self {
            StatChange::LevelUp(level) => format!("Level up! You reached level {level}!"),
            StatChange::HpLoss => "You lost HP! Complete your habits to recover.".to_string(),
            StatChange::HpRestored => "Your HP was restored.".to_string(),
        }
    }
}

/// Open the live channel. The returned stream yields decoded events until
/// the connection drops; dropping the stream closes the connection, which
/// is the only cancellation mechanism.
#[cfg(target_arch = "wasm32")]
pub fn connect(
    config: &ApiConfig,
) -> Result<impl futures::Stream<Item = PushEvent>, crate::ApiError> {
    use futures::StreamExt;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::Message;

    let socket = WebSocket::open(&config.events_url())
        .map_err(|err| crate::ApiError::Transport(err.to_string()))?;

    Ok(socket.filter_map(|message| async move {
        match message {
            Ok(Message::Text(text)) => decode(&text),
            Ok(Message::Bytes(_)) => None,
            Err(err) => {
                tracing::debug!("push channel read: {err}");
                None
            }
        }
    }))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn connect(
    config: &ApiConfig,
) -> Result<futures::stream::Empty<PushEvent>, crate::ApiError> {
    let _ = config;
    Ok(futures::stream::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HabitKind;

    fn user(level: u32, hp: u32) -> User {
        User {
            id: "u1".to_string(),
            username: "ada".to_string(),
            level,
            hp,
            max_hp: 50,
            ..User::default()
        }
    }

    #[test]
    fn test_decode_habit_list_created() {
        let event = decode(r#"{"event": "habit_list_created", "data": {"id": "l1", "name": "Morning"}}"#);
        assert_eq!(
            event,
            Some(PushEvent::HabitListCreated(HabitList {
                id: "l1".to_string(),
                name: "Morning".to_string(),
                habits: Vec::new(),
            }))
        );
    }

    #[test]
    fn test_decode_user_update() {
        let frame = r#"{
            "event": "user_update",
            "data": {
                "user_id": "u1",
                "user_data": {
                    "id": "u1", "username": "ada", "level": 2, "hp": 50,
                    "max_hp": 60, "current_xp": 10, "xp_to_next_level": 120,
                    "streak": 3, "habits_completed": 8
                }
            }
        }"#;

        match decode(frame) {
            Some(PushEvent::UserUpdate { user_id, user_data }) => {
                assert_eq!(user_id, "u1");
                assert_eq!(user_data.level, 2);
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn test_decode_habit_list_update() {
        let frame = r#"{
            "event": "habit_list_update",
            "data": {
                "habit_list_id": "l1",
                "habit_list_data": {
                    "id": "l1",
                    "name": "Morning",
                    "habits": [{"id": "h1", "description": "Run", "type": "preset"}]
                }
            }
        }"#;

        match decode(frame) {
            Some(PushEvent::HabitListUpdate {
                habit_list_id,
                habit_list_data,
            }) => {
                assert_eq!(habit_list_id, "l1");
                assert_eq!(habit_list_data.habits[0].r#type, HabitKind::Preset);
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn test_decode_skips_unknown_and_malformed() {
        assert_eq!(decode(r#"{"event": "server_restart", "data": {}}"#), None);
        assert_eq!(decode("not json"), None);
        assert_eq!(
            decode(r#"{"event": "user_update", "data": {"wrong": true}}"#),
            None
        );
    }

    #[test]
    fn test_classify_level_up_wins_over_hp() {
        // Leveling typically raises max HP and refills; the level notice
        // must win.
        let notice = StatChange::classify(&user(1, 20), &user(2, 60));
        assert_eq!(notice, Some(StatChange::LevelUp(2)));
    }

    #[test]
    fn test_classify_hp_loss_and_restore() {
        assert_eq!(
            StatChange::classify(&user(3, 50), &user(3, 40)),
            Some(StatChange::HpLoss)
        );
        assert_eq!(
            StatChange::classify(&user(3, 40), &user(3, 50)),
            Some(StatChange::HpRestored)
        );
    }

    #[test]
    fn test_classify_no_change() {
        assert_eq!(StatChange::classify(&user(3, 50), &user(3, 50)), None);
    }
}
