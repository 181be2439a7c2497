//! One authenticated call against the backend.
//!
//! A [`RequestConfig`] is created where the call site is, usually from a
//! constructor in [`crate::endpoints`]. [`RequestOverrides`] covers the
//! targets that are not known until invocation time (delete-by-id,
//! complete-habit). [`send`] executes exactly one call and records exactly
//! one outcome; nothing here retries, queues, or cancels.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP method for a request. GET unless the call site says otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Target of a single backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestConfig {
    pub url: String,
    pub method: Method,
    pub body: Option<Value>,
}

impl RequestConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Apply per-invocation overrides; unset fields keep the configured
    /// value.
    pub fn with_overrides(&self, overrides: &RequestOverrides) -> RequestConfig {
        RequestConfig {
            url: overrides.url.clone().unwrap_or_else(|| self.url.clone()),
            method: overrides.method.unwrap_or(self.method),
            body: overrides.body.clone().or_else(|| self.body.clone()),
        }
    }
}

/// Per-invocation override of url, method, or body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOverrides {
    pub url: Option<String>,
    pub method: Option<Method>,
    pub body: Option<Value>,
}

impl RequestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override everything from a fully-built config, for call sites whose
    /// target is only known at invocation time.
    pub fn from_config(config: RequestConfig) -> Self {
        Self {
            url: Some(config.url),
            method: Some(config.method),
            body: config.body,
        }
    }
}

/// Execute one call and parse the response.
///
/// Attaches `Authorization: Bearer <token>` when a token is present and a
/// JSON body when the config carries one. A non-2xx response surfaces the
/// backend's `msg` field when the error body has one.
pub async fn send<T: DeserializeOwned>(
    config: &RequestConfig,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let client = reqwest::Client::new();
    let mut request = client.request(config.method.as_reqwest(), &config.url);

    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    if let Some(body) = &config.body {
        request = request.json(body);
    }

    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::from_error_body(status.as_u16(), &bytes));
    }

    // A bodyless 2xx parses as JSON null.
    let payload: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
    serde_json::from_slice(payload).map_err(|_| ApiError::Unexpected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_defaults_to_get() {
        let config = RequestConfig::new("http://x/y");
        assert_eq!(config.method, Method::Get);
        assert_eq!(config.body, None);
    }

    #[test]
    fn test_overrides_replace_only_set_fields() {
        let config = RequestConfig::new("http://x/habit_lists")
            .method(Method::Post)
            .body(json!({"name": "morning"}));

        let resolved = config.with_overrides(&RequestOverrides::new().url("http://x/other"));
        assert_eq!(resolved.url, "http://x/other");
        assert_eq!(resolved.method, Method::Post);
        assert_eq!(resolved.body, Some(json!({"name": "morning"})));
    }

    #[test]
    fn test_override_body_wins() {
        let config = RequestConfig::new("http://x/custom_habits").method(Method::Post);

        let resolved = config.with_overrides(
            &RequestOverrides::new().body(json!({"description": "stretch"})),
        );
        assert_eq!(resolved.body, Some(json!({"description": "stretch"})));
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let config = RequestConfig::new("http://x/y").method(Method::Delete);
        let resolved = config.with_overrides(&RequestOverrides::new());
        assert_eq!(resolved, config);
    }
}
