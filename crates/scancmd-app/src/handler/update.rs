//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::config::ModeTab;
use crate::feedback::COPIED_NOTIFICATION;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use scancmd_core::PRESETS;
use tracing::debug;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    update_at(state, message, Instant::now())
}

/// [`update`] with an explicit clock, used for feedback deadlines
pub fn update_at(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    let result = dispatch(state, message, now);
    state.sync_derived();
    result
}

/// Hiding the Advance tab blurs its inputs, so pending edits commit first
fn switch_tab(state: &mut AppState, tab: ModeTab) {
    if tab != state.active_tab {
        state.commit_edits();
        state.active_tab = tab;
    }
}

fn dispatch(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_feedback(now);
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Tabs
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            // Leaving the body is a blur: field and command edits commit
            if state.is_editing() {
                state.commit_edits();
            }
            state.focus = state.focus.toggled();
            UpdateResult::none()
        }

        Message::SelectTab(tab) => {
            switch_tab(state, tab);
            UpdateResult::none()
        }

        Message::NextTab => {
            switch_tab(state, state.active_tab.next());
            UpdateResult::none()
        }

        Message::PrevTab => {
            switch_tab(state, state.active_tab.prev());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Target Field
        // ─────────────────────────────────────────────────────────
        Message::TargetInput(c) => {
            state.target.update(|target| target.push(c));
            UpdateResult::none()
        }

        Message::TargetBackspace => {
            state.target.update(|target| {
                target.pop();
            });
            UpdateResult::none()
        }

        Message::TargetClear => {
            state.target.set("");
            UpdateResult::none()
        }

        Message::SetTarget(text) => {
            state.target.set(text);
            UpdateResult::none()
        }

        Message::ToggleAddressFamily => {
            state.address_family = state.address_family.toggled();
            UpdateResult::none()
        }

        Message::CopyTarget => {
            let text = state.target.get();
            if text.is_empty() {
                return UpdateResult::none();
            }
            state.target_copied.trigger(now, state.feedback_duration());
            copy(text)
        }

        // ─────────────────────────────────────────────────────────
        // Simple Mode
        // ─────────────────────────────────────────────────────────
        Message::PresetDown => {
            state.simple.select_next();
            UpdateResult::none()
        }

        Message::PresetUp => {
            state.simple.select_previous();
            UpdateResult::none()
        }

        Message::CopyPreset { index } => {
            let Some(preset) = PRESETS.get(index) else {
                return UpdateResult::none();
            };
            let text = state.target.with(|target| preset.render(target));
            let duration = state.feedback_duration();
            state.simple.mark_copied(index, now, duration);
            state.notify(COPIED_NOTIFICATION, now);
            debug!("Copying preset {}", preset.id);
            copy(text)
        }

        // ─────────────────────────────────────────────────────────
        // Advance Mode
        // ─────────────────────────────────────────────────────────
        Message::FieldDown => {
            state.advance.select_next();
            UpdateResult::none()
        }

        Message::FieldUp => {
            state.advance.select_previous();
            UpdateResult::none()
        }

        Message::FieldActivate => {
            state.advance.activate();
            UpdateResult::none()
        }

        Message::FieldCycle { forward } => {
            state.advance.cycle(forward);
            UpdateResult::none()
        }

        Message::FieldInput(c) => {
            state.advance.edit_push(c);
            UpdateResult::none()
        }

        Message::FieldBackspace => {
            state.advance.edit_pop();
            UpdateResult::none()
        }

        Message::FieldClear => {
            state.advance.edit_clear();
            UpdateResult::none()
        }

        Message::FieldCommit => {
            state.advance.edit_commit();
            UpdateResult::none()
        }

        Message::FieldCancel => {
            state.advance.edit_cancel();
            UpdateResult::none()
        }

        Message::Configure(change) => {
            state.advance.apply(change);
            UpdateResult::none()
        }

        Message::CommandInput(c) => {
            state.advance.command.push(c);
            UpdateResult::none()
        }

        Message::CommandBackspace => {
            state.advance.command.pop();
            UpdateResult::none()
        }

        Message::CommandClear => {
            state.advance.command.clear_draft();
            UpdateResult::none()
        }

        Message::CommandCommit => {
            if state.advance.command.commit() {
                debug!("Hand-edited command committed");
            }
            UpdateResult::none()
        }

        Message::CopyCommand => {
            let text = state.advance.copy_text().to_string();
            let duration = state.feedback_duration();
            state.advance.mark_copied(now, duration);
            state.notify(COPIED_NOTIFICATION, now);
            copy(text)
        }
    }
}

fn copy(text: String) -> UpdateResult {
    UpdateResult::action(UpdateAction::CopyToClipboard { text })
}
