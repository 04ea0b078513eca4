//! Liveness of one mounted screen.
//!
//! A screen's store and controller share one `ScreenLifetime`. Once it is torn
//! down, results of calls that were still pending must be dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use uuid::Uuid;

#[derive(Clone)]
pub struct ScreenLifetime {
    id: Uuid,
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            torn_down: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Identifier used to correlate log lines of one screen instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        !self.torn_down.load(Ordering::SeqCst)
    }

    /// Mark the screen as gone. Idempotent.
    pub fn tear_down(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            tracing::debug!(screen_id = %self.id, "Screen torn down");
            self.notify.notify_waiters();
        }
    }

    /// Resolves once the screen has been torn down.
    pub async fn torn_down(&self) {
        // Register before checking the flag so a concurrent tear_down is not missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if !self.is_alive() {
            return;
        }
        notified.await;
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}
