//! Key event handlers for each focus and mode

use crate::advance_mode::FieldKind;
use crate::config::ModeTab;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus and tab
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys, available everywhere
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(1) => return Some(Message::SelectTab(ModeTab::Simple)),
        InputKey::F(2) => return Some(Message::SelectTab(ModeTab::Advance)),
        _ => {}
    }

    match state.focus {
        Focus::Target => handle_key_target(key),
        Focus::Body => match state.active_tab {
            ModeTab::Simple => handle_key_simple(state, key),
            ModeTab::Advance => handle_key_advance(state, key),
        },
    }
}

/// Handle key events while the target field is focused
fn handle_key_target(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::BackTab | InputKey::Down | InputKey::Enter | InputKey::Esc => {
            Some(Message::ToggleFocus)
        }
        InputKey::Backspace => Some(Message::TargetBackspace),
        InputKey::CharCtrl('u') => Some(Message::TargetClear),
        InputKey::CharCtrl('y') => Some(Message::CopyTarget),
        InputKey::F(3) => Some(Message::ToggleAddressFamily),
        InputKey::Char(c) if !c.is_control() => Some(Message::TargetInput(c)),
        _ => None,
    }
}

/// Keys shared by both tabs when not editing
fn handle_key_body_common(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Char(']') => Some(Message::NextTab),
        InputKey::Char('[') => Some(Message::PrevTab),
        _ => None,
    }
}

/// Handle key events in the preset catalog
fn handle_key_simple(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::PresetDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::PresetUp),
        InputKey::Enter | InputKey::Char('c') | InputKey::Char('y') => Some(Message::CopyPreset {
            index: state.simple.selected,
        }),
        _ => handle_key_body_common(key),
    }
}

/// Handle key events in the configurable builder
fn handle_key_advance(state: &AppState, key: InputKey) -> Option<Message> {
    let advance = &state.advance;

    if advance.command.is_editing() {
        return handle_key_command_edit(key);
    }

    if let Some(edit) = advance.edit.as_ref() {
        return handle_key_field_edit(edit.field.kind(), key);
    }

    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::FieldDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::FieldUp),
        InputKey::Char(' ') | InputKey::Enter => Some(Message::FieldActivate),
        InputKey::Left | InputKey::Char('h') => Some(Message::FieldCycle { forward: false }),
        InputKey::Right | InputKey::Char('l') => Some(Message::FieldCycle { forward: true }),
        InputKey::Char('c') | InputKey::Char('y') => Some(Message::CopyCommand),
        _ => handle_key_body_common(key),
    }
}

/// Handle key events while a numeric or text field is being edited
fn handle_key_field_edit(kind: FieldKind, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::FieldCommit),
        InputKey::Esc => Some(Message::FieldCancel),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Backspace => Some(Message::FieldBackspace),
        InputKey::CharCtrl('u') => Some(Message::FieldClear),
        InputKey::Char(c) if kind == FieldKind::Number && !c.is_ascii_digit() => None,
        InputKey::Char(c) => Some(Message::FieldInput(c)),
        _ => None,
    }
}

/// Handle key events while the generated command is hand edited.
/// Every way of leaving the line commits the edit.
fn handle_key_command_edit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Up | InputKey::Down => {
            Some(Message::CommandCommit)
        }
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Backspace => Some(Message::CommandBackspace),
        InputKey::CharCtrl('u') => Some(Message::CommandClear),
        InputKey::Char(c) => Some(Message::CommandInput(c)),
        _ => None,
    }
}
