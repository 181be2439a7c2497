//! Client-side snapshots of backend-owned entities.
//!
//! All of these are transient, non-authoritative copies. The backend mutates
//! them and the client receives full replacements via responses or push
//! events; nothing here computes level, XP, or HP transitions.

use serde::{Deserialize, Serialize};

/// Full gamified profile snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
    pub streak: u32,
    pub habits_completed: u32,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub vitality: u32,
    #[serde(default)]
    pub dexterity: u32,
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub luck: u32,
}

/// A category grouping preset habits. Habits are fetched lazily per name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A preset habit template belonging to a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetHabit {
    pub id: String,
    pub description: String,
}

/// A user-authored habit, not tied to any category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHabit {
    pub id: String,
    pub description: String,
}

/// Where a habit in a list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    Preset,
    Custom,
}

impl HabitKind {
    /// Path segment the backend uses for this kind's list routes.
    pub fn path_segment(self) -> &'static str {
        match self {
            HabitKind::Preset => "habits",
            HabitKind::Custom => "custom_habits",
        }
    }
}

/// A habit as rendered inside a list, tagged with its origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub description: String,
    pub r#type: HabitKind,
}

/// A named, user-owned collection of habits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

/// One row of `GET /users/leaderboard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    pub level: u32,
    #[serde(rename = "XP")]
    pub xp: u32,
}

/// Successful `POST /habit_lists` response: the new list's id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedHabitList {
    pub id: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: String,
}

/// The backend's error (and occasional success) envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msg: String,
}

/// Union of a list's preset and custom habit fetches, each side tagged with
/// its origin.
///
/// The merge is eager per-arrival: either side may still be absent, and the
/// caller recomputes as each response lands. A transient view reflecting
/// only one of the two fetches is expected until the second resolves.
pub fn merge_habits(
    preset: Option<&[PresetHabit]>,
    custom: Option<&[CustomHabit]>,
) -> Vec<Habit> {
    let mut merged = Vec::new();
    if let Some(preset) = preset {
        merged.extend(preset.iter().map(|habit| Habit {
            id: habit.id.clone(),
            description: habit.description.clone(),
            r#type: HabitKind::Preset,
        }));
    }
    if let Some(custom) = custom {
        merged.extend(custom.iter().map(|habit| Habit {
            id: habit.id.clone(),
            description: habit.description.clone(),
            r#type: HabitKind::Custom,
        }));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_parses_backend_shape() {
        let json = r#"{
            "id": "u1",
            "username": "ada",
            "email": "ada@example.com",
            "level": 3,
            "hp": 40,
            "max_hp": 70,
            "current_xp": 20,
            "xp_to_next_level": 130,
            "streak": 5,
            "habits_completed": 17,
            "strength": 10,
            "vitality": 6,
            "dexterity": 7,
            "intelligence": 9,
            "luck": 5
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(user.max_hp, 70);
        assert_eq!(user.xp_to_next_level, 130);
        assert_eq!(user.strength, 10);
    }

    #[test]
    fn test_habit_type_tag_is_lowercase() {
        let habit: Habit =
            serde_json::from_str(r#"{"id": "h1", "description": "Run", "type": "preset"}"#)
                .unwrap();
        assert_eq!(habit.r#type, HabitKind::Preset);

        let back = serde_json::to_string(&habit).unwrap();
        assert!(back.contains(r#""type":"preset""#));
    }

    #[test]
    fn test_leaderboard_entry_xp_wire_name() {
        let entry: LeaderboardEntry =
            serde_json::from_str(r#"{"id": "u1", "username": "ada", "level": 4, "XP": 900}"#)
                .unwrap();
        assert_eq!(entry.xp, 900);
    }

    #[test]
    fn test_habit_list_habits_default_empty() {
        let list: HabitList = serde_json::from_str(r#"{"id": "l1", "name": "Morning"}"#).unwrap();
        assert!(list.habits.is_empty());
    }

    #[test]
    fn test_merge_tags_both_sides() {
        let preset = vec![PresetHabit {
            id: "p1".to_string(),
            description: "Run".to_string(),
        }];
        let custom = vec![CustomHabit {
            id: "c1".to_string(),
            description: "Journal".to_string(),
        }];

        let merged = merge_habits(Some(&preset), Some(&custom));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].r#type, HabitKind::Preset);
        assert_eq!(merged[1].r#type, HabitKind::Custom);
    }

    #[test]
    fn test_merge_with_one_side_missing() {
        let custom = vec![CustomHabit {
            id: "c1".to_string(),
            description: "Journal".to_string(),
        }];

        let merged = merge_habits(None, Some(&custom));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].r#type, HabitKind::Custom);

        assert!(merge_habits(None, None).is_empty());
    }
}
