//! Shared scan target
//!
//! One process-wide reactive cell holds the host/IP every builder acts on.
//! Any holder of a [`SharedTarget`] can read or replace the value; builders
//! that derive state from it take a [`TargetSubscription`] and ask whether
//! the value moved since they last looked.

use std::sync::Arc;

use tokio::sync::watch;

/// Reactive cell holding the current target
#[derive(Debug, Clone)]
pub struct SharedTarget {
    tx: Arc<watch::Sender<String>>,
}

impl Default for SharedTarget {
    fn default() -> Self {
        Self::new("")
    }
}

impl SharedTarget {
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(initial.into());
        Self { tx: Arc::new(tx) }
    }

    /// Current value
    pub fn get(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Run `f` against the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.tx.borrow().as_str())
    }

    /// Replace the value. Subscribers are only notified when it changed.
    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    /// Edit the value in place, notifying subscribers if it changed
    pub fn update(&self, f: impl FnOnce(&mut String)) {
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        });
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribe to changes. The new subscription starts out "seen".
    pub fn subscribe(&self) -> TargetSubscription {
        TargetSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Change-tracking view of a [`SharedTarget`]
#[derive(Debug, Clone)]
pub struct TargetSubscription {
    rx: watch::Receiver<String>,
}

impl TargetSubscription {
    /// Whether the target changed since the last [`Self::take`]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Current value, marking it as seen
    pub fn take(&mut self) -> String {
        self.rx.borrow_and_update().clone()
    }

    /// Current value without touching the seen marker
    pub fn peek(&self) -> String {
        self.rx.borrow().clone()
    }
}

/// Address family hint for the target field.
///
/// Purely decorative: it changes the placeholder text and never gates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    V4,
    V6,
}

impl AddressFamily {
    pub fn label(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "IPv4",
            AddressFamily::V6 => "IPv6",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Enter {} address or hostname", self.label())
    }

    pub fn toggled(self) -> Self {
        match self {
            AddressFamily::V4 => AddressFamily::V6,
            AddressFamily::V6 => AddressFamily::V4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_visible_to_all_clones() {
        let a = SharedTarget::default();
        let b = a.clone();
        a.set("10.0.0.5");
        assert_eq!(b.get(), "10.0.0.5");
        b.set("example.com");
        assert_eq!(a.get(), "example.com");
    }

    #[test]
    fn test_subscription_sees_changes_once() {
        let target = SharedTarget::default();
        let mut sub = target.subscribe();
        assert!(!sub.has_changed());

        target.set("10.0.0.5");
        assert!(sub.has_changed());
        assert_eq!(sub.take(), "10.0.0.5");
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_setting_same_value_does_not_notify() {
        let target = SharedTarget::new("host");
        let sub = target.subscribe();
        target.set("host");
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_update_in_place() {
        let target = SharedTarget::new("10.0.0");
        let sub = target.subscribe();
        target.update(|t| t.push_str(".5"));
        assert!(sub.has_changed());
        assert_eq!(target.get(), "10.0.0.5");

        let sub = target.subscribe();
        target.update(|t| t.push_str(""));
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_no_normalization() {
        let target = SharedTarget::default();
        target.set("  FE80::1 ");
        assert_eq!(target.get(), "  FE80::1 ");
        target.with(|t| assert_eq!(t.len(), 10));
    }

    #[test]
    fn test_address_family_placeholder() {
        assert_eq!(
            AddressFamily::V4.placeholder(),
            "Enter IPv4 address or hostname"
        );
        assert_eq!(AddressFamily::V4.toggled(), AddressFamily::V6);
        assert_eq!(
            AddressFamily::V6.placeholder(),
            "Enter IPv6 address or hostname"
        );
    }
}
