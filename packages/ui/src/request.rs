//! Per-call-site request state: last data, in-flight flag, last error.
//!
//! Each [`use_request`] call site owns its own three slots; nothing is
//! shared or cached across call sites. Triggering a second send before the
//! first resolves leaves both in flight, and the last to resolve wins the slots.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use api::request::{send, RequestConfig, RequestOverrides};
use api::ApiError;

/// Handle returned by [`use_request`].
pub struct UseRequest<T: 'static> {
    pub data: Signal<Option<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    config: Signal<RequestConfig>,
}

impl<T> Clone for UseRequest<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for UseRequest<T> {}

/// Create a request call site from its configuration.
pub fn use_request<T: 'static>(
    make_config: impl FnOnce() -> RequestConfig + 'static,
) -> UseRequest<T> {
    UseRequest {
        data: use_signal(|| None),
        loading: use_signal(|| false),
        error: use_signal(|| None),
        config: use_signal(make_config),
    }
}

impl<T: 'static> UseRequest<T> {
    /// Whether a call is currently in flight.
    pub fn loading(&self) -> bool {
        self.loading.cloned()
    }

    /// The last recorded error message, if the most recent call failed.
    pub fn error(&self) -> Option<String> {
        self.error.cloned()
    }
}

impl<T: Clone + 'static> UseRequest<T> {
    /// The last successful response payload, if any.
    pub fn data(&self) -> Option<T> {
        self.data.cloned()
    }
}

impl<T: DeserializeOwned + Clone + 'static> UseRequest<T> {
    /// Execute the configured call.
    pub async fn send(self) -> Result<T, ApiError> {
        self.send_with(RequestOverrides::new()).await
    }

    /// Execute with per-invocation overrides (late-bound url/method/body).
    ///
    /// Clears the previous error, raises `loading` for the duration of the
    /// call whatever the outcome, reads the bearer token from the session
    /// store at call time, and records exactly one outcome, which is also
    /// returned to the caller.
    pub async fn send_with(mut self, overrides: RequestOverrides) -> Result<T, ApiError> {
        self.loading.set(true);
        self.error.set(None);

        let config = self.config.peek().with_overrides(&overrides);
        let token = store::session_store().token();
        let result = send::<T>(&config, token.as_deref()).await;

        match &result {
            Ok(value) => self.data.set(Some(value.clone())),
            Err(err) => self.error.set(Some(err.user_message())),
        }
        self.loading.set(false);

        result
    }
}
