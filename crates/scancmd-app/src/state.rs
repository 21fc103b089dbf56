//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use crate::advance_mode::AdvanceModeState;
use crate::config::{ModeTab, Settings};
use crate::feedback::{CopyFeedback, Notification};
use crate::simple_mode::SimpleModeState;
use scancmd_core::{AddressFamily, SharedTarget};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The shared target field
    #[default]
    Target,
    /// The active tab's content
    Body,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Target => Focus::Body,
            Focus::Body => Focus::Target,
        }
    }
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub phase: AppPhase,

    /// Target shared by both modes
    pub target: SharedTarget,
    pub address_family: AddressFamily,
    pub target_copied: CopyFeedback,

    pub active_tab: ModeTab,
    pub focus: Focus,

    /// Both modes stay alive so switching tabs never loses state
    pub simple: SimpleModeState,
    pub advance: AdvanceModeState,

    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_target(settings, "")
    }

    /// Start with the target field pre-filled
    pub fn with_target(settings: Settings, target: &str) -> Self {
        let shared = SharedTarget::new(target);
        let advance = AdvanceModeState::new(&shared);
        Self {
            active_tab: settings.behavior.default_tab,
            settings,
            phase: AppPhase::Running,
            target: shared,
            address_family: AddressFamily::default(),
            target_copied: CopyFeedback::default(),
            focus: Focus::default(),
            simple: SimpleModeState::default(),
            advance,
            notification: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// How long copy indicators stay visible
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.settings.behavior.copy_feedback_ms)
    }

    /// Whether a field or the command line is capturing keystrokes
    pub fn is_editing(&self) -> bool {
        self.active_tab == ModeTab::Advance && self.advance.is_editing()
    }

    /// Commit any open field or command edit
    pub fn commit_edits(&mut self) {
        self.advance.edit_commit();
        self.advance.command.commit();
    }

    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification::new(message, now, self.feedback_duration()));
    }

    /// Clear every indicator whose deadline passed
    pub fn expire_feedback(&mut self, now: Instant) {
        self.target_copied.expire(now);
        self.simple.expire(now);
        self.advance.expire(now);
        if let Some(notification) = self.notification.as_mut() {
            if notification.expire(now) {
                self.notification = None;
            }
        }
    }

    /// Propagate shared-target changes into derived state
    pub fn sync_derived(&mut self) {
        self.advance.sync_target();
    }
}
