//! Transient copy confirmations
//!
//! Indicators carry an absolute deadline and are cleared by the event loop
//! tick once it passes. Expiring an already cleared indicator is a no-op.

use std::time::{Duration, Instant};

/// Text of the notification raised by every command copy
pub const COPIED_NOTIFICATION: &str = "Command copied to clipboard!";

/// A "copied" indicator with an expiry deadline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    until: Option<Instant>,
}

impl CopyFeedback {
    /// Show the indicator for `duration` starting at `now`.
    /// Re-triggering restarts the countdown.
    pub fn trigger(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn is_active(&self) -> bool {
        self.until.is_some()
    }

    /// Clear the indicator if its deadline has passed.
    /// Returns `true` only on the call that cleared it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.until = None;
    }
}

/// Toast shown at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    feedback: CopyFeedback,
}

impl Notification {
    pub fn new(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        let mut feedback = CopyFeedback::default();
        feedback.trigger(now, duration);
        Self {
            message: message.into(),
            feedback,
        }
    }

    /// Whether the toast should be dropped at `now`
    pub fn expire(&mut self, now: Instant) -> bool {
        self.feedback.expire(now) || !self.feedback.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECONDS: Duration = Duration::from_millis(2000);

    #[test]
    fn test_feedback_inactive_by_default() {
        let feedback = CopyFeedback::default();
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_feedback_expires_after_duration() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.trigger(start, TWO_SECONDS);

        assert!(!feedback.expire(start + Duration::from_millis(1999)));
        assert!(feedback.is_active());

        assert!(feedback.expire(start + TWO_SECONDS));
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_expire_is_idempotent() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.trigger(start, TWO_SECONDS);

        let later = start + Duration::from_secs(5);
        assert!(feedback.expire(later));
        assert!(!feedback.expire(later));
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_retrigger_restarts_countdown() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.trigger(start, TWO_SECONDS);
        feedback.trigger(start + Duration::from_millis(1500), TWO_SECONDS);

        assert!(!feedback.expire(start + Duration::from_millis(2500)));
        assert!(feedback.is_active());
    }

    #[test]
    fn test_notification_expiry() {
        let start = Instant::now();
        let mut toast = Notification::new(COPIED_NOTIFICATION, start, TWO_SECONDS);
        assert!(!toast.expire(start + Duration::from_millis(100)));
        assert!(toast.expire(start + TWO_SECONDS));
        assert_eq!(toast.message, "Command copied to clipboard!");
    }
}
