//! Client-side form validation.
//!
//! Pure and synchronous: each validator returns the ordered list of
//! violation messages for its form, empty when the input is valid. No
//! network call is made until the list is empty.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Minimum password length for login and signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum username length for signup.
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Maximum custom habit description length, inclusive.
pub const MAX_HABIT_DESCRIPTION_LENGTH: usize = 200;

/// Login form: email shape, password length.
pub fn validate_login(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if !EMAIL_PATTERN.is_match(email) {
        errors.push("Invalid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push("Invalid password".to_string());
    }
    errors
}

/// Signup form: username length, email shape, password length.
pub fn validate_signup(username: &str, email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if username.chars().count() < MIN_USERNAME_LENGTH {
        errors.push("Username is required".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        errors.push("Invalid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push("Password must be at least 8 characters long".to_string());
    }
    errors
}

/// Custom habit form: description length between 1 and 200 inclusive.
pub fn validate_habit_description(description: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let length = description.chars().count();
    if length < 1 {
        errors.push("Habit description is required".to_string());
    } else if length > MAX_HABIT_DESCRIPTION_LENGTH {
        errors.push("Habit description must be at most 200 characters".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_valid() {
        assert!(validate_login("ada@example.com", "longenough").is_empty());
    }

    #[test]
    fn test_login_collects_both_messages_in_order() {
        let errors = validate_login("not-an-email", "1234567");
        assert_eq!(
            errors,
            vec![
                "Invalid email address".to_string(),
                "Invalid password".to_string(),
            ]
        );
    }

    #[test]
    fn test_email_requires_domain_dot() {
        assert_eq!(validate_login("a@b", "12345678").len(), 1);
        assert!(validate_login("a@b.co", "12345678").is_empty());
    }

    #[test]
    fn test_signup_messages() {
        let errors = validate_signup("ab", "nope", "short");
        assert_eq!(
            errors,
            vec![
                "Username is required".to_string(),
                "Invalid email address".to_string(),
                "Password must be at least 8 characters long".to_string(),
            ]
        );

        assert!(validate_signup("ada", "ada@example.com", "12345678").is_empty());
    }

    #[test]
    fn test_habit_description_boundaries() {
        assert_eq!(
            validate_habit_description(""),
            vec!["Habit description is required".to_string()]
        );

        let exactly_200 = "x".repeat(200);
        assert!(validate_habit_description(&exactly_200).is_empty());

        let too_long = "x".repeat(201);
        assert_eq!(
            validate_habit_description(&too_long),
            vec!["Habit description must be at most 200 characters".to_string()]
        );
    }
}
