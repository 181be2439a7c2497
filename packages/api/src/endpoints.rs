//! The backend's route catalogue as request configurations.
//!
//! Each constructor is pure: it builds the [`RequestConfig`] for one route
//! and nothing else, so call sites (and tests) decide when to execute.

use serde_json::{json, Value};

use crate::config::ApiConfig;
use crate::models::HabitKind;
use crate::request::{Method, RequestConfig};

/// `POST /users`: create an account.
pub fn signup(config: &ApiConfig, username: &str, email: &str, password: &str) -> RequestConfig {
    RequestConfig::new(config.url("/users"))
        .method(Method::Post)
        .body(json!({
            "username": username,
            "email": email,
            "password": password,
        }))
}

/// `POST /login`: exchange credentials for a token and user id.
pub fn login(config: &ApiConfig, email: &str, password: &str) -> RequestConfig {
    RequestConfig::new(config.url("/login"))
        .method(Method::Post)
        .body(json!({ "email": email, "password": password }))
}

/// `GET /users/{id}`: profile snapshot.
pub fn user(config: &ApiConfig, user_id: &str) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/users/{user_id}")))
}

/// `PUT /users/{id}`: profile update.
pub fn update_user(config: &ApiConfig, user_id: &str, payload: Value) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/users/{user_id}")))
        .method(Method::Put)
        .body(payload)
}

/// `GET /users/leaderboard`: ranked user list.
pub fn leaderboard(config: &ApiConfig) -> RequestConfig {
    RequestConfig::new(config.url("/users/leaderboard"))
}

/// `GET /categories/`: all categories.
pub fn categories(config: &ApiConfig) -> RequestConfig {
    RequestConfig::new(config.url("/categories/"))
}

/// `GET /categories/{name}/preset_habits`: a category's preset habits.
pub fn preset_habits(config: &ApiConfig, category: &str) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/categories/{category}/preset_habits")))
}

/// `POST /custom_habits`: author a custom habit.
pub fn create_custom_habit(config: &ApiConfig, description: &str) -> RequestConfig {
    RequestConfig::new(config.url("/custom_habits"))
        .method(Method::Post)
        .body(json!({ "description": description }))
}

/// `GET /custom_habits/user_habits`: the user's custom habits.
pub fn user_custom_habits(config: &ApiConfig) -> RequestConfig {
    RequestConfig::new(config.url("/custom_habits/user_habits"))
}

/// `POST /habit_lists`: create a named list.
pub fn create_habit_list(config: &ApiConfig, name: &str) -> RequestConfig {
    RequestConfig::new(config.url("/habit_lists"))
        .method(Method::Post)
        .body(json!({ "name": name }))
}

/// `GET /habit_lists/user`: the user's lists.
pub fn user_habit_lists(config: &ApiConfig) -> RequestConfig {
    RequestConfig::new(config.url("/habit_lists/user"))
}

/// `DELETE /habit_lists/{id}`.
pub fn delete_habit_list(config: &ApiConfig, list_id: &str) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/habit_lists/{list_id}"))).method(Method::Delete)
}

/// `POST /habit_lists/{id}/habits`: attach preset habits to a list.
pub fn add_preset_habits(config: &ApiConfig, list_id: &str, habit_ids: &[String]) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/habit_lists/{list_id}/habits")))
        .method(Method::Post)
        .body(json!({ "preset_habit_ids": habit_ids }))
}

/// `POST /habit_lists/{id}/custom_habits`: attach custom habits to a list.
pub fn add_custom_habits(config: &ApiConfig, list_id: &str, habit_ids: &[String]) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/habit_lists/{list_id}/custom_habits")))
        .method(Method::Post)
        .body(json!({ "custom_habit_ids": habit_ids }))
}

/// `GET /habit_lists/{id}/habits`: a list's preset habits.
pub fn list_preset_habits(config: &ApiConfig, list_id: &str) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/habit_lists/{list_id}/habits")))
}

/// `GET /habit_lists/{id}/custom_habits`: a list's custom habits.
pub fn list_custom_habits(config: &ApiConfig, list_id: &str) -> RequestConfig {
    RequestConfig::new(config.url(&format!("/habit_lists/{list_id}/custom_habits")))
}

/// `POST /habit_lists/{id}/{habits|custom_habits}/{habitId}/complete`:
/// mark a habit done. The kind picks the path segment.
pub fn complete_habit(
    config: &ApiConfig,
    list_id: &str,
    habit_id: &str,
    kind: HabitKind,
) -> RequestConfig {
    RequestConfig::new(config.url(&format!(
        "/habit_lists/{list_id}/{}/{habit_id}/complete",
        kind.path_segment()
    )))
    .method(Method::Post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig::new("http://127.0.0.1:5000")
    }

    #[test]
    fn test_login_request() {
        let request = login(&config(), "ada@example.com", "hunter2!");
        assert_eq!(request.url, "http://127.0.0.1:5000/login");
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            Some(json!({ "email": "ada@example.com", "password": "hunter2!" }))
        );
    }

    #[test]
    fn test_complete_habit_picks_path_segment() {
        let preset = complete_habit(&config(), "l1", "h1", HabitKind::Preset);
        assert_eq!(
            preset.url,
            "http://127.0.0.1:5000/habit_lists/l1/habits/h1/complete"
        );
        assert_eq!(preset.method, Method::Post);

        let custom = complete_habit(&config(), "l1", "h2", HabitKind::Custom);
        assert_eq!(
            custom.url,
            "http://127.0.0.1:5000/habit_lists/l1/custom_habits/h2/complete"
        );
    }

    #[test]
    fn test_delete_habit_list_request() {
        let request = delete_habit_list(&config(), "l9");
        assert_eq!(request.url, "http://127.0.0.1:5000/habit_lists/l9");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_add_preset_habits_body() {
        let ids = vec!["p1".to_string(), "p2".to_string()];
        let request = add_preset_habits(&config(), "l1", &ids);
        assert_eq!(
            request.body,
            Some(json!({ "preset_habit_ids": ["p1", "p2"] }))
        );
    }

    #[test]
    fn test_category_routes() {
        assert_eq!(
            categories(&config()).url,
            "http://127.0.0.1:5000/categories/"
        );
        assert_eq!(
            preset_habits(&config(), "Fitness").url,
            "http://127.0.0.1:5000/categories/Fitness/preset_habits"
        );
    }
}
