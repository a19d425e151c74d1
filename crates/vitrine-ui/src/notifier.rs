//! # Notifier
//!
//! Transient toast notices: one visible at a time, last write wins, removed
//! after a fixed delay.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Toast Lifecycle                                   │
//! │                                                                         │
//! │  notify("Added to cart!") ──► clear current ──► mount ──► timer (2.5s) │
//! │                                                              │          │
//! │            notify(...) again before expiry                   ▼          │
//! │            aborts the old timer and replaces ──────────► clear          │
//! │            the toast (no queue, no stacking)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::surface::Surface;

/// Success message after an add.
pub const MSG_ADDED: &str = "Added to cart!";

/// Error message after a failed add.
pub const MSG_ADD_FAILED: &str = "Failed to add to cart";

/// Mounts transient toasts on the surface.
///
/// Must be used inside a tokio runtime: removal is scheduled as a task.
pub struct Notifier {
    surface: Arc<dyn Surface>,
    duration: Duration,
    removal: Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    pub fn new(surface: Arc<dyn Surface>, duration: Duration) -> Self {
        Notifier {
            surface,
            duration,
            removal: Mutex::new(None),
        }
    }

    /// Shows a toast, replacing any currently displayed one.
    pub fn notify(&self, message: &str, is_error: bool) {
        debug!(message, is_error, "notify");

        let mut removal = self.removal.lock().expect("removal lock");
        if let Some(handle) = removal.take() {
            handle.abort();
        }

        self.surface.clear_notice();
        self.surface.mount_notice(message, is_error);

        let surface = Arc::clone(&self.surface);
        let duration = self.duration;
        *removal = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            surface.clear_notice();
        }));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    fn notifier(surface: Arc<RecordingSurface>) -> Notifier {
        Notifier::new(surface, Duration::from_millis(2500))
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_removed_after_delay() {
        let surface = Arc::new(RecordingSurface::new());
        let n = notifier(surface.clone());

        n.notify(MSG_ADDED, false);
        assert_eq!(
            surface.notice(),
            Some(("Added to cart!".to_string(), false))
        );

        // Still mounted just before expiry
        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert!(surface.notice().is_some());

        // Gone after
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(surface.notice(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_write_wins() {
        let surface = Arc::new(RecordingSurface::new());
        let n = notifier(surface.clone());

        n.notify(MSG_ADDED, false);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        n.notify(MSG_ADD_FAILED, true);

        // The replacement is the only toast mounted
        assert_eq!(
            surface.notice(),
            Some(("Failed to add to cart".to_string(), true))
        );

        // The first toast's timer was aborted: 2.5s after the FIRST notify
        // the second toast is still up
        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert!(surface.notice().is_some());

        // ...and it expires on its own schedule
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(surface.notice(), None);

        assert_eq!(surface.notice_history().len(), 2);
    }
}
