//! Full-screen rendering tests

use super::view;
use crate::test_utils::{create_test_state, create_test_state_with_target, TestTerminal};

use scancmd_app::advance_mode::FormField;
use scancmd_app::config::ModeTab;
use scancmd_app::handler::update;
use scancmd_app::message::Message;
use scancmd_app::state::{AppState, Focus};

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_simple_tab_initial_screen() {
    let state = create_test_state();
    let term = render(&state);

    assert!(term.buffer_contains("RustScan Command Generator"));
    assert!(term.buffer_contains("F1 Simple"));
    assert!(term.buffer_contains("Enter IPv4 address or hostname"));
    assert!(term.buffer_contains("Common Commands"));
    assert!(term.buffer_contains("rustscan -a  -r 1-65535"));
}

#[test]
fn test_target_flows_into_presets() {
    let mut state = create_test_state();
    for c in "10.0.0.5".chars() {
        update(&mut state, Message::TargetInput(c));
    }
    let term = render(&state);

    assert!(term.buffer_contains("10.0.0.5_"));
    assert!(term.buffer_contains("rustscan -a 10.0.0.5 -r 1-65535"));
}

#[test]
fn test_advance_tab_shows_form_and_command() {
    let mut state = create_test_state_with_target("10.0.0.5");
    update(&mut state, Message::SelectTab(ModeTab::Advance));
    let term = render(&state);

    assert!(term.buffer_contains("Scan Options"));
    assert!(term.buffer_contains("Port Specification"));
    assert!(term.buffer_contains("Generated Command"));
    assert!(term.buffer_contains("$ rustscan 10.0.0.5"));
    assert!(!term.buffer_contains("Common Commands"));
}

#[test]
fn test_advance_command_tracks_form() {
    let mut state = create_test_state_with_target("host");
    update(&mut state, Message::SelectTab(ModeTab::Advance));
    update(&mut state, Message::ToggleFocus);
    // Accessible Mode is the first field
    update(&mut state, Message::FieldActivate);
    let term = render(&state);

    assert!(term.buffer_contains("[x] Accessible Mode"));
    assert!(term.buffer_contains("$ rustscan host --accessible"));
}

#[test]
fn test_copy_shows_toast_and_badge() {
    let mut state = create_test_state_with_target("host");
    state.focus = Focus::Body;
    update(&mut state, Message::SelectTab(ModeTab::Advance));
    update(&mut state, Message::CopyCommand);
    let term = render(&state);

    assert!(term.buffer_contains("Command copied to clipboard!"));
    assert!(term.buffer_contains("✓ Copied!"));
}

#[test]
fn test_command_row_selected_highlights_block() {
    let mut state = create_test_state_with_target("host");
    state.focus = Focus::Body;
    update(&mut state, Message::SelectTab(ModeTab::Advance));
    state.advance.selected = FormField::ORDER.len() - 1;
    let term = render(&state);

    assert!(term.buffer_contains("Enter edit command"));
}

#[test]
fn test_compact_terminal_renders_list_form() {
    let mut state = create_test_state_with_target("host");
    update(&mut state, Message::SelectTab(ModeTab::Advance));
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Scan Options"));
    assert!(term.buffer_contains("$ rustscan host"));
}

#[test]
fn test_footer_hints_follow_focus() {
    let mut state = create_test_state();
    let term = render(&state);
    let footer = term.area().height - 1;
    assert!(term.line_contains(footer, "^Y copy"));

    state.focus = Focus::Body;
    let term = render(&state);
    assert!(term.line_contains(footer, "Enter copy"));
}
