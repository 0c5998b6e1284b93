//! Transient user-visible notices ("please sign in", sync failures).
//!
//! Notices expire on their own after a fixed duration; nothing needs to
//! acknowledge them. Expiry is measured with `tokio::time::Instant` so paused
//! test clocks drive it too.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Shown when an anonymous user tries to favorite an entry.
pub const SIGN_IN_REQUIRED: &str = "Please sign in to save favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
    pub raised_at: Instant,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Default)]
struct NoticeQueue {
    next_id: u64,
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    fn prune(&mut self, now: Instant) {
        self.notices.retain(|notice| !notice.is_expired(now));
    }
}

/// Shared handle to the notice queue. Clones see the same notices.
#[derive(Clone)]
pub struct NoticeCenter {
    queue: Arc<Mutex<NoticeQueue>>,
    ttl: Duration,
}

impl fmt::Debug for NoticeCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("NoticeCenter");
        debug.field("ttl", &self.ttl);
        match self.queue.try_lock() {
            Some(queue) => debug.field("pending", &queue.notices.len()),
            None => debug.field("pending", &"<locked>"),
        };
        debug.finish()
    }
}

impl NoticeCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: Arc::new(Mutex::new(NoticeQueue::default())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        let now = Instant::now();
        let mut queue = self.queue.lock();
        queue.prune(now);

        queue.next_id += 1;
        let id = NoticeId(queue.next_id);
        let message = message.into();
        debug!(?level, %message, "notice raised");
        queue.notices.push_back(Notice {
            id,
            level,
            message,
            raised_at: now,
            expires_at: now + self.ttl,
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Info, message)
    }

    pub fn error(&self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Error, message)
    }

    /// Notices that have not yet expired, oldest first.
    pub fn active(&self) -> Vec<Notice> {
        let mut queue = self.queue.lock();
        queue.prune(Instant::now());
        queue.notices.iter().cloned().collect()
    }

    /// Remove a notice before it expires.
    pub fn dismiss(&self, id: NoticeId) -> bool {
        let mut queue = self.queue.lock();
        let before = queue.notices.len();
        queue.notices.retain(|notice| notice.id != id);
        queue.notices.len() != before
    }

    pub fn clear(&self) {
        self.queue.lock().notices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notices_expire_after_ttl() {
        let center = NoticeCenter::new(Duration::from_secs(3));
        center.info(SIGN_IN_REQUIRED);
        assert_eq!(center.active().len(), 1);

        tokio::time::advance(Duration::from_millis(2_999)).await;
        assert_eq!(center.active().len(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(center.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_single_notice() {
        let center = NoticeCenter::new(Duration::from_secs(3));
        let first = center.info("first");
        center.error("second");

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));

        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].level, NoticeLevel::Error);
        assert_eq!(active[0].message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_queue() {
        let center = NoticeCenter::new(Duration::from_secs(3));
        let other = center.clone();
        other.error("sync failed");
        assert_eq!(center.active().len(), 1);
    }
}
