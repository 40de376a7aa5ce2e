//! Toast notifications.
//!
//! Form submissions report their outcome through short-lived toasts. Time is
//! the event loop's clock (elapsed since start), passed in by the caller.

use crate::contact::Notifier;
use std::time::Duration;

/// Maximum number of visible toasts
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Default toast duration
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Kind of toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Positive confirmation.
    Success,
    /// Failure report.
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Message to display
    pub message: String,
    /// Kind (affects color/icon)
    pub kind: ToastKind,
    /// Clock time the toast was raised
    pub created_at: Duration,
    /// How long to show it
    pub duration: Duration,
}

impl Toast {
    /// True once `now` is past the toast's lifetime.
    pub fn is_expired(&self, now: Duration) -> bool {
        now.saturating_sub(self.created_at) >= self.duration
    }

    /// Remaining fraction of the lifetime, 1.0 when fresh.
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.created_at).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total == 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / total).max(0.0)
    }
}

/// Queue of toast notifications
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    now: Duration,
}

impl ToastQueue {
    /// Create a new empty toast queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a toast at the queue's current clock.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        // Same message already showing
        if self.toasts.iter().any(|t| t.message == message) {
            return;
        }
        while self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            message,
            kind,
            created_at: self.now,
            duration: DEFAULT_TOAST_DURATION,
        });
    }

    /// Advance the clock and drop expired toasts. Returns true if any were removed.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.now = now;
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Current clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Number of live toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Visible toasts, most recent first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(MAX_VISIBLE_TOASTS)
    }
}

impl Notifier for ToastQueue {
    fn success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_suppressed() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Success, "Sent");
        queue.push(ToastKind::Success, "Sent");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn oldest_is_dropped_at_capacity() {
        let mut queue = ToastQueue::new();
        for msg in ["a", "b", "c", "d"] {
            queue.push(ToastKind::Error, msg);
        }
        let visible: Vec<_> = queue.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(visible, vec!["d", "c", "b"]);
    }

    #[test]
    fn tick_expires_old_toasts() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Success, "Sent");
        assert!(!queue.tick(Duration::from_secs(4)));
        assert!(queue.tick(Duration::from_secs(5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn toasts_are_stamped_with_current_clock() {
        let mut queue = ToastQueue::new();
        queue.tick(Duration::from_secs(10));
        queue.push(ToastKind::Success, "Sent");
        assert!(!queue.tick(Duration::from_secs(14)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn progress_counts_down() {
        let toast = Toast {
            message: "x".into(),
            kind: ToastKind::Success,
            created_at: Duration::ZERO,
            duration: Duration::from_secs(4),
        };
        assert_eq!(toast.progress(Duration::ZERO), 1.0);
        assert_eq!(toast.progress(Duration::from_secs(2)), 0.5);
        assert_eq!(toast.progress(Duration::from_secs(9)), 0.0);
    }

    #[test]
    fn notifier_maps_to_kinds() {
        let mut queue = ToastQueue::new();
        Notifier::success(&mut queue, "ok");
        Notifier::error(&mut queue, "bad");
        let kinds: Vec<_> = queue.visible().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Error, ToastKind::Success]);
    }
}
