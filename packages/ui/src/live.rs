//! Live update subscription scoped to the view that opens it.

use dioxus::prelude::*;
use futures::StreamExt;

use api::{ApiConfig, PushEvent};

/// Subscribe to the push channel for the lifetime of the calling view.
///
/// One connection per call, opened on mount. Events reach the handler in
/// arrival order, each applied synchronously, with no buffering or coalescing.
/// The consumer task is scoped to the view, so unmounting cancels the loop
/// and drops (closes) the connection; there is no partial unsubscribe, and
/// no reconnect beyond remounting the view.
pub fn use_live_updates(mut handler: impl FnMut(PushEvent) + 'static) {
    use_hook(move || {
        spawn(async move {
            let config = ApiConfig::default();
            match api::events::connect(&config) {
                Ok(events) => {
                    let mut events = std::pin::pin!(events);
                    while let Some(event) = events.next().await {
                        handler(event);
                    }
                    tracing::debug!("push channel closed");
                }
                Err(err) => {
                    tracing::error!("push channel unavailable: {err}");
                }
            }
        });
    });
}
