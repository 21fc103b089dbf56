//! Preset catalog view state

use std::time::{Duration, Instant};

use crate::feedback::CopyFeedback;
use scancmd_core::{Preset, PRESETS};

/// Selection and per-entry copy indicators for the preset catalog
#[derive(Debug, Clone)]
pub struct SimpleModeState {
    pub selected: usize,
    copied: Vec<CopyFeedback>,
}

impl Default for SimpleModeState {
    fn default() -> Self {
        Self {
            selected: 0,
            copied: vec![CopyFeedback::default(); PRESETS.len()],
        }
    }
}

impl SimpleModeState {
    pub fn select_next(&mut self) {
        if !PRESETS.is_empty() {
            self.selected = (self.selected + 1) % PRESETS.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !PRESETS.is_empty() {
            self.selected = (self.selected + PRESETS.len() - 1) % PRESETS.len();
        }
    }

    pub fn selected_preset(&self) -> Option<&'static Preset> {
        PRESETS.get(self.selected)
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.get(index).is_some_and(CopyFeedback::is_active)
    }

    pub fn mark_copied(&mut self, index: usize, now: Instant, duration: Duration) {
        if let Some(feedback) = self.copied.get_mut(index) {
            feedback.trigger(now, duration);
        }
    }

    /// Clear every indicator whose deadline passed
    pub fn expire(&mut self, now: Instant) {
        for feedback in &mut self.copied {
            feedback.expire(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut state = SimpleModeState::default();
        state.select_previous();
        assert_eq!(state.selected, PRESETS.len() - 1);
        state.select_next();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_copied_indicator_is_per_entry() {
        let now = Instant::now();
        let mut state = SimpleModeState::default();
        state.mark_copied(2, now, Duration::from_secs(2));

        assert!(state.is_copied(2));
        assert!(!state.is_copied(0));
        assert!(!state.is_copied(PRESETS.len()));

        state.expire(now + Duration::from_secs(2));
        assert!(!state.is_copied(2));
    }

    #[test]
    fn test_selected_preset_starts_at_first_entry() {
        let state = SimpleModeState::default();
        assert_eq!(state.selected_preset().map(|p| p.id), Some("Ulimit-Scan"));
    }
}
