//! Where the backend lives.

/// Base URL of the backend serving both the HTTP API and the push channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("LEVELUP_API_URL")
            .unwrap_or("http://127.0.0.1:5000")
            .to_string();
        Self { base_url }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join an absolute path (starting with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// The push-notification endpoint: same host, websocket scheme.
    pub fn events_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let ws = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{ws}/events")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let config = ApiConfig::new("http://127.0.0.1:5000");
        assert_eq!(config.url("/login"), "http://127.0.0.1:5000/login");

        let trailing = ApiConfig::new("http://127.0.0.1:5000/");
        assert_eq!(trailing.url("/login"), "http://127.0.0.1:5000/login");
    }

    #[test]
    fn test_events_url_scheme() {
        let http = ApiConfig::new("http://127.0.0.1:5000");
        assert_eq!(http.events_url(), "ws://127.0.0.1:5000/events");

        let https = ApiConfig::new("https://levelup.example.com");
        assert_eq!(https.events_url(), "wss://levelup.example.com/events");
    }
}
