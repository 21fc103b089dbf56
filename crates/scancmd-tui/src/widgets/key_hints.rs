//! Footer key hints for the focused area

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scancmd_app::advance_mode::FieldKind;
use scancmd_app::config::ModeTab;
use scancmd_app::state::{AppState, Focus};

use crate::theme::styles;

type Hint = (&'static str, &'static str);

const TARGET_HINTS: &[Hint] = &[
    ("Tab", "body"),
    ("^Y", "copy"),
    ("^U", "clear"),
    ("F3", "IPv4/IPv6"),
    ("F1/F2", "mode"),
    ("^C", "quit"),
];

const SIMPLE_HINTS: &[Hint] = &[
    ("↑↓", "select"),
    ("Enter", "copy"),
    ("Tab", "target"),
    ("[ ]", "mode"),
    ("q", "quit"),
];

const ADVANCE_HINTS: &[Hint] = &[
    ("↑↓", "field"),
    ("Space", "toggle/edit"),
    ("←→", "cycle"),
    ("c", "copy"),
    ("Tab", "target"),
    ("q", "quit"),
];

const FIELD_EDIT_HINTS: &[Hint] = &[("Enter", "apply"), ("Esc", "cancel"), ("^U", "clear")];

const COMMAND_EDIT_HINTS: &[Hint] = &[("Enter", "done"), ("^U", "clear"), ("Tab", "target")];

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [Hint] {
        let state = self.state;
        match (state.focus, state.active_tab) {
            (Focus::Target, _) => TARGET_HINTS,
            (Focus::Body, ModeTab::Simple) => SIMPLE_HINTS,
            (Focus::Body, ModeTab::Advance) => {
                if state.advance.command.is_editing() {
                    COMMAND_EDIT_HINTS
                } else if state.advance.edit.is_some() {
                    FIELD_EDIT_HINTS
                } else {
                    ADVANCE_HINTS
                }
            }
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
        }
        let advance = &self.state.advance;
        if self.state.active_tab == ModeTab::Advance
            && self.state.focus == Focus::Body
            && advance.selected_field().kind() == FieldKind::Command
            && !advance.command.is_editing()
        {
            spans.push(Span::styled("  ", styles::text_muted()));
            spans.push(Span::styled("Enter", styles::keybinding()));
            spans.push(Span::styled(" edit command", styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use scancmd_app::config::Settings;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(KeyHints::new(state), term.area());
        term
    }

    #[test]
    fn test_target_hints() {
        let state = AppState::new(Settings::default());
        let term = render(&state);
        assert!(term.buffer_contains("^Y copy"));
        assert!(term.buffer_contains("F3 IPv4/IPv6"));
    }

    #[test]
    fn test_body_hints_follow_tab() {
        let mut state = AppState::new(Settings::default());
        state.focus = Focus::Body;
        assert!(render(&state).buffer_contains("Enter copy"));

        state.active_tab = ModeTab::Advance;
        assert!(render(&state).buffer_contains("Space toggle/edit"));
    }

    #[test]
    fn test_field_edit_hints() {
        let mut state = AppState::new(Settings::default());
        state.focus = Focus::Body;
        state.active_tab = ModeTab::Advance;
        state.advance.selected = 1;
        state.advance.activate();
        let term = render(&state);
        assert!(term.buffer_contains("Esc cancel"));
        assert!(!term.buffer_contains("cycle"));
    }
}
