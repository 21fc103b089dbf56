//! Preset catalog widget (Simple tab)
//!
//! Each entry shows its label and the command rendered for the current
//! target. The selected entry also shows its explanation.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use scancmd_app::simple_mode::SimpleModeState;
use scancmd_core::{PRESETS, TIPS};

use crate::theme::{icons::IconSet, styles};

pub struct PresetList<'a> {
    state: &'a SimpleModeState,
    target: &'a str,
    focused: bool,
    show_tips: bool,
    icons: IconSet,
}

impl<'a> PresetList<'a> {
    pub fn new(state: &'a SimpleModeState, target: &'a str, icons: IconSet) -> Self {
        Self {
            state,
            target,
            focused: false,
            show_tips: true,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_tips(mut self, show: bool) -> Self {
        self.show_tips = show;
        self
    }

    /// Catalog lines plus the row range of the selected entry
    fn lines(&self) -> (Vec<Line<'static>>, (usize, usize)) {
        let mut lines = Vec::new();
        let mut selected_rows = (0, 0);

        for (index, preset) in PRESETS.iter().enumerate() {
            let selected = index == self.state.selected;
            let start = lines.len();

            let label_style = match (selected, self.focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::unfocused_selected(),
                _ => styles::text_bright_bold(),
            };
            let marker = if selected {
                self.icons.chevron_right()
            } else {
                " "
            };

            let mut label = vec![
                Span::styled(marker, styles::accent()),
                Span::raw(" "),
                Span::styled(format!(" {} ", preset.label), label_style),
            ];
            if self.state.is_copied(index) {
                label.push(Span::raw(" "));
                label.push(Span::styled(self.icons.check(), styles::success()));
                label.push(Span::styled(" Copied!", styles::success()));
            }
            lines.push(Line::from(label));

            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{} ", self.icons.command()), styles::text_muted()),
                Span::styled(preset.render(self.target), styles::command()),
            ]));

            if selected {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{} ", self.icons.info()), styles::accent()),
                    Span::styled(preset.explanation, styles::text_secondary()),
                ]));
                selected_rows = (start, lines.len());
            }
        }

        (lines, selected_rows)
    }

    fn tip_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(" Tips", styles::accent_bold()))];
        lines.extend(TIPS.iter().map(|tip| {
            Line::from(vec![
                Span::styled("  • ", styles::text_muted()),
                Span::styled(*tip, styles::text_secondary()),
            ])
        }));
        lines
    }
}

/// First visible row so that `rows` fits in a viewport of `height`
fn scroll_offset(rows: (usize, usize), height: usize) -> usize {
    let (start, end) = rows;
    if height == 0 || end <= height {
        0
    } else {
        (end - height).min(start)
    }
}

impl Widget for PresetList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Common Commands", styles::accent_bold()),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, selected_rows) = self.lines();
        let tips = self.tip_lines();

        // Tips only when the whole catalog still fits
        let tips_height = tips.len() as u16 + 1;
        let show_tips = self.show_tips && inner.height >= lines.len() as u16 + tips_height;

        let (list_area, tips_area) = if show_tips {
            let chunks =
                Layout::vertical([Constraint::Min(1), Constraint::Length(tips_height)]).split(inner);
            (chunks[0], Some(chunks[1]))
        } else {
            (inner, None)
        };

        let offset = scroll_offset(selected_rows, list_area.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(list_area, buf);

        if let Some(tips_area) = tips_area {
            Paragraph::new(tips)
                .wrap(Wrap { trim: false })
                .render(tips_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use scancmd_app::config::IconMode;
    use std::time::{Duration, Instant};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_renders_commands_for_target() {
        let state = SimpleModeState::default();
        let mut term = TestTerminal::with_size(100, 40);
        term.render_widget(PresetList::new(&state, "10.0.0.5", icons()), term.area());

        assert!(term.buffer_contains("Basic Scan"));
        assert!(term.buffer_contains("rustscan -a 10.0.0.5 -r 1-65535"));
        assert!(term.buffer_contains("rustscan -a 10.0.0.5 -- -sU"));
    }

    #[test]
    fn test_explanation_only_for_selected() {
        let mut state = SimpleModeState::default();
        state.selected = 1;
        let mut term = TestTerminal::with_size(120, 40);
        term.render_widget(PresetList::new(&state, "h", icons()), term.area());

        assert!(term.buffer_contains(PRESETS[1].explanation));
        assert!(!term.buffer_contains(PRESETS[0].explanation));
    }

    #[test]
    fn test_copied_indicator() {
        let mut state = SimpleModeState::default();
        state.mark_copied(0, Instant::now(), Duration::from_secs(2));
        let mut term = TestTerminal::with_size(100, 40);
        term.render_widget(PresetList::new(&state, "h", icons()), term.area());
        assert!(term.buffer_contains("✓ Copied!"));
    }

    #[test]
    fn test_selected_entry_scrolled_into_view() {
        let mut state = SimpleModeState::default();
        state.selected = PRESETS.len() - 1;
        let mut term = TestTerminal::with_size(100, 8);
        term.render_widget(PresetList::new(&state, "h", icons()), term.area());
        assert!(term.buffer_contains("UDP Scan"));
        assert!(!term.buffer_contains("Increase Ulimit"));
    }

    #[test]
    fn test_tips_toggle() {
        let state = SimpleModeState::default();
        let mut term = TestTerminal::with_size(120, 50);
        term.render_widget(PresetList::new(&state, "h", icons()), term.area());
        assert!(term.buffer_contains("Tips"));

        let mut term = TestTerminal::with_size(120, 50);
        term.render_widget(
            PresetList::new(&state, "h", icons()).show_tips(false),
            term.area(),
        );
        assert!(!term.buffer_contains("Tips"));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset((0, 3), 10), 0);
        assert_eq!(scroll_offset((27, 30), 10), 20);
        assert_eq!(scroll_offset((5, 8), 0), 0);
    }
}
