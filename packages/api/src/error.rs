//! Failure taxonomy for backend calls.

use thiserror::Error;

use crate::models::Message;

/// What went wrong with a backend call.
///
/// The `Display` string is what the UI renders: the backend's own `msg`
/// verbatim when it sent one, a generic message otherwise.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (refused connection, DNS,
    /// aborted fetch).
    #[error("An error occurred")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response arrived but did not match the expected shape.
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl ApiError {
    /// The string shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Build the error for a non-2xx response, surfacing the backend's
    /// `{"msg": ...}` body when present.
    pub(crate) fn from_error_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Message>(body)
            .ok()
            .map(|m| m.msg)
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| "An error occurred".to_string());
        ApiError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_surfaces_verbatim() {
        let err = ApiError::from_error_body(401, br#"{"msg": "Bad email or password"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                message: "Bad email or password".to_string()
            }
        );
        assert_eq!(err.user_message(), "Bad email or password");
    }

    #[test]
    fn test_messageless_body_falls_back() {
        let err = ApiError::from_error_body(500, b"<html>Internal Server Error</html>");
        assert_eq!(err.user_message(), "An error occurred");
    }

    #[test]
    fn test_empty_msg_falls_back() {
        let err = ApiError::from_error_body(400, br#"{"msg": ""}"#);
        assert_eq!(err.user_message(), "An error occurred");
    }

    #[test]
    fn test_generic_messages() {
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).user_message(),
            "An error occurred"
        );
        assert_eq!(
            ApiError::Unexpected.user_message(),
            "An unexpected error occurred"
        );
    }
}
