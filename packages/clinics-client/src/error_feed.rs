//! User-visible error messages with a fixed display window.
//!
//! The response pipeline pushes the message payload of 400/404/409
//! responses here; whatever screen is showing errors reads the current
//! list. Twelve seconds after a push the whole visible list is cleared,
//! matching the display contract of the error banner.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::debug;

/// How long pushed messages stay visible.
pub const DISPLAY_TTL: Duration = Duration::from_secs(12);

/// Broadcast list of user-visible error messages. Cheap to clone; clones
/// share the same list.
#[derive(Clone, Default)]
pub struct ErrorFeed {
    messages: Arc<RwLock<Vec<String>>>,
}

impl ErrorFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append messages and schedule a clear of the visible list after
    /// [`DISPLAY_TTL`]. An empty payload is ignored.
    pub fn push(&self, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }

        debug!(count = messages.len(), "pushing error messages");
        self.messages
            .write()
            .expect("error feed lock poisoned")
            .extend(messages);

        let feed = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(DISPLAY_TTL).await;
            feed.clear();
        });
    }

    /// Currently visible messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .read()
            .expect("error feed lock poisoned")
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages
            .read()
            .expect("error feed lock poisoned")
            .is_empty()
    }

    pub fn clear(&self) {
        self.messages
            .write()
            .expect("error feed lock poisoned")
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pushed_messages_expire_after_display_ttl() {
        let feed = ErrorFeed::new();
        feed.push(vec!["clinic not found".to_string()]);

        assert_eq!(feed.messages(), vec!["clinic not found".to_string()]);

        // Just short of the window the message is still visible
        tokio::time::sleep(DISPLAY_TTL - Duration::from_secs(1)).await;
        assert!(!feed.is_empty());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(feed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_payload_is_ignored() {
        let feed = ErrorFeed::new();
        feed.push(Vec::new());
        assert!(feed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn pushes_accumulate_until_cleared() {
        let feed = ErrorFeed::new();
        feed.push(vec!["first".to_string()]);
        feed.push(vec!["second".to_string()]);

        assert_eq!(feed.messages().len(), 2);

        tokio::time::sleep(DISPLAY_TTL + Duration::from_secs(1)).await;
        assert!(feed.is_empty());
    }
}
