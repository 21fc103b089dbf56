//! Scan option form (Advance tab)
//!
//! Renders every [`FormField`] grouped by [`FormSection`]. Wide terminals get
//! one column per section; narrow ones a single scrolling list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scancmd_app::advance_mode::{AdvanceModeState, FieldKind, FormField, FormSection};

use crate::theme::{icons::IconSet, styles};

/// Minimum width for the three-column layout
const COLUMNS_MIN_WIDTH: u16 = 96;

/// Sections shown in the form; the command line has its own widget
const FORM_SECTIONS: [FormSection; 3] = [
    FormSection::ScanOptions,
    FormSection::PortSpecification,
    FormSection::Output,
];

pub struct ScanForm<'a> {
    state: &'a AdvanceModeState,
    focused: bool,
    icons: IconSet,
}

impl<'a> ScanForm<'a> {
    pub fn new(state: &'a AdvanceModeState, icons: IconSet) -> Self {
        Self {
            state,
            focused: false,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn section_icon(&self, section: FormSection) -> &'static str {
        match section {
            FormSection::ScanOptions => self.icons.settings(),
            FormSection::PortSpecification => self.icons.network(),
            FormSection::Output | FormSection::GeneratedCommand => self.icons.command(),
        }
    }

    /// Lines for one section, plus the row of the selected field if it is here
    fn section_lines(&self, section: FormSection) -> (Vec<Line<'static>>, Option<usize>) {
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", self.section_icon(section)), styles::accent()),
            Span::styled(section.title(), styles::accent_bold()),
        ])];
        let mut selected_row = None;
        let selected_field = self.state.selected_field();

        for field in FormField::ORDER.iter().filter(|f| f.section() == section) {
            let selected = *field == selected_field;
            if selected {
                selected_row = Some(lines.len());
            }
            lines.push(self.field_line(*field, selected));
            if selected {
                if let Some(hint) = field.hint() {
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(hint, styles::text_muted()),
                    ]));
                }
            }
        }

        (lines, selected_row)
    }

    fn field_line(&self, field: FormField, selected: bool) -> Line<'static> {
        let state = self.state;
        let enabled = state.is_field_enabled(field);
        let editing = state.edit.as_ref().filter(|e| e.field == field);

        let marker = if selected {
            self.icons.chevron_right()
        } else {
            " "
        };
        let label_style = match (selected, self.focused, enabled) {
            (_, _, false) => styles::text_muted(),
            (true, true, _) => styles::focused_selected(),
            (true, false, _) => styles::unfocused_selected(),
            _ => styles::text_primary(),
        };

        let mut spans = vec![Span::styled(marker, styles::accent()), Span::raw(" ")];

        match field.kind() {
            FieldKind::Toggle => {
                spans.push(Span::styled(
                    format!("{} ", self.icons.checkbox(state.is_checked(field))),
                    styles::accent(),
                ));
                spans.push(Span::styled(field.label(), label_style));
            }
            FieldKind::Radio => {
                spans.push(Span::styled(
                    format!("{} ", self.icons.radio(state.is_checked(field))),
                    styles::accent(),
                ));
                spans.push(Span::styled(field.label(), label_style));
                if let FormField::Port(spec) = field {
                    if let Some(description) = spec.description() {
                        spans.push(Span::styled(format!(" {description}"), styles::text_muted()));
                    }
                }
            }
            FieldKind::Number | FieldKind::Text => {
                if field.kind() == FieldKind::Text {
                    spans.push(Span::raw("    "));
                }
                spans.push(Span::styled(field.label(), label_style));
                spans.push(Span::raw(": "));
                match editing {
                    Some(edit) => {
                        spans.push(Span::styled(
                            format!("{}_", edit.buffer),
                            styles::command_editing(),
                        ));
                        if let Some(bounds) = field.bounds() {
                            spans.push(Span::styled(
                                format!(" ({}-{})", bounds.start(), bounds.end()),
                                styles::text_muted(),
                            ));
                        }
                    }
                    None => {
                        let text = state.field_text(field);
                        if text.is_empty() {
                            spans.push(Span::styled(
                                field.hint().unwrap_or_default(),
                                styles::text_muted(),
                            ));
                        } else {
                            let style = if enabled {
                                styles::text_bright_bold()
                            } else {
                                styles::text_muted()
                            };
                            spans.push(Span::styled(text, style));
                        }
                    }
                }
                if enabled && state.looks_malformed(field) {
                    spans.push(Span::styled(
                        format!(" {} looks malformed", self.icons.alert()),
                        styles::warning(),
                    ));
                }
            }
            FieldKind::Choice => {
                spans.push(Span::styled(field.label(), label_style));
                spans.push(Span::raw(": "));
                spans.push(Span::styled("‹ ", styles::text_muted()));
                spans.push(Span::styled(
                    state.field_text(field),
                    styles::text_bright_bold(),
                ));
                spans.push(Span::styled(" ›", styles::text_muted()));
            }
            FieldKind::Command => {
                spans.push(Span::styled(field.label(), label_style));
            }
        }

        Line::from(spans)
    }

    fn render_columns(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for (section, column) in FORM_SECTIONS.iter().zip(columns.iter()) {
            let (lines, _) = self.section_lines(*section);
            Paragraph::new(lines).render(*column, buf);
        }
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        let mut selected_row = 0;
        for section in FORM_SECTIONS {
            let (section_lines, row) = self.section_lines(section);
            if let Some(row) = row {
                selected_row = lines.len() + row;
            }
            lines.extend(section_lines);
            lines.push(Line::default());
        }

        // Keep the selected row and its hint on screen
        let offset = (selected_row + 2).saturating_sub(area.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}

impl Widget for ScanForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let padded = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(1),
            ..inner
        };

        if area.width >= COLUMNS_MIN_WIDTH {
            self.render_columns(padded, buf);
        } else {
            self.render_list(padded, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use scancmd_app::advance_mode::ConfigChange;
    use scancmd_app::config::IconMode;
    use scancmd_core::{PortSpec, SharedTarget};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn select(state: &mut AdvanceModeState, field: FormField) {
        state.selected = FormField::ORDER.iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn test_wide_layout_shows_all_sections() {
        let state = AdvanceModeState::new(&SharedTarget::default());
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(ScanForm::new(&state, icons()), term.area());

        assert!(term.buffer_contains("Scan Options"));
        assert!(term.buffer_contains("Port Specification"));
        assert!(term.buffer_contains("Output & Post-Processing"));
        assert!(term.buffer_contains("[ ] Accessible Mode"));
        assert!(term.buffer_contains("Batch Size: 4500"));
        assert!(term.buffer_contains("(●) Top 1000 Ports (Default)"));
        assert!(term.buffer_contains("Nmap Script: ‹ None ›"));
    }

    #[test]
    fn test_selected_field_shows_hint() {
        let mut state = AdvanceModeState::new(&SharedTarget::default());
        select(&mut state, FormField::Ulimit);
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(ScanForm::new(&state, icons()), term.area());
        assert!(term.buffer_contains("Open files limit (default: 5000)"));
        assert!(!term.buffer_contains("Ports per batch"));
    }

    #[test]
    fn test_editing_number_shows_buffer_and_bounds() {
        let mut state = AdvanceModeState::new(&SharedTarget::default());
        select(&mut state, FormField::Timeout);
        state.activate();
        state.edit_clear();
        state.edit_push('9');
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(ScanForm::new(&state, icons()).focused(true), term.area());
        assert!(term.buffer_contains("Timeout (ms): 9_ (100-10000)"));
    }

    #[test]
    fn test_malformed_custom_ports_hint() {
        let mut state = AdvanceModeState::new(&SharedTarget::default());
        state.apply(ConfigChange::PortSpec(PortSpec::Custom));
        state.apply(ConfigChange::CustomPorts("80,,".to_string()));
        let mut term = TestTerminal::with_size(140, 20);
        term.render_widget(ScanForm::new(&state, icons()), term.area());
        assert!(term.buffer_contains("looks malformed"));
    }

    #[test]
    fn test_narrow_layout_scrolls_to_selection() {
        let mut state = AdvanceModeState::new(&SharedTarget::default());
        select(&mut state, FormField::PostScan);
        let mut term = TestTerminal::with_size(70, 10);
        term.render_widget(ScanForm::new(&state, icons()), term.area());
        assert!(term.buffer_contains("Nmap Script"));
        assert!(!term.buffer_contains("Accessible Mode"));
    }
}
