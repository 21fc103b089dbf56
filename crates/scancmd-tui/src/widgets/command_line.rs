//! Generated command line (Advance tab)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use scancmd_core::EditableCommand;

use crate::theme::{icons::IconSet, styles};

const ELLIPSIS: char = '…';

pub struct CommandLine<'a> {
    command: &'a EditableCommand,
    selected: bool,
    copied: bool,
    icons: IconSet,
}

impl<'a> CommandLine<'a> {
    pub fn new(command: &'a EditableCommand, icons: IconSet) -> Self {
        Self {
            command,
            selected: false,
            copied: false,
            icons,
        }
    }

    /// Highlight the block as the current form row
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    fn badge(&self) -> Line<'static> {
        if self.copied {
            Line::from(vec![
                Span::styled(self.icons.check(), styles::success()),
                Span::styled(" Copied! ", styles::success()),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("{} ", self.icons.copy()), styles::text_muted()),
                Span::styled("c", styles::keybinding()),
                Span::styled(" Copy ", styles::text_muted()),
            ])
        }
    }
}

/// Keep the end of `text` within `width` columns, marking the cut
fn fit_tail(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut used = 1;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    std::iter::once(ELLIPSIS).chain(kept.into_iter().rev()).collect()
}

/// Keep the start of `text` within `width` columns, marking the cut
fn fit_head(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 1;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

impl Widget for CommandLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = vec![
            Span::raw(" "),
            Span::styled("Generated Command", styles::accent_bold()),
            Span::raw(" "),
        ];
        if self.command.is_hand_edited() {
            title.push(Span::styled("(edited) ", styles::warning()));
        }

        let block = styles::glass_block(self.selected)
            .title(Line::from(title))
            .title_top(self.badge().right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let prompt = format!(" {} ", self.icons.command());
        let room = (inner.width as usize).saturating_sub(prompt.chars().count());

        let line = if self.command.is_editing() {
            let text = fit_tail(self.command.displayed(), room.saturating_sub(1));
            Line::from(vec![
                Span::styled(prompt, styles::text_muted()),
                Span::styled(text, styles::command_editing()),
                Span::styled("_", styles::keybinding()),
            ])
        } else {
            let style = if self.selected {
                styles::focused_selected()
            } else {
                styles::command()
            };
            Line::from(vec![
                Span::styled(prompt, styles::text_muted()),
                Span::styled(fit_head(self.command.displayed(), room), style),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use scancmd_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_renders_command_with_prompt() {
        let command = EditableCommand::new("rustscan -a 10.0.0.5 -b 4500");
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(CommandLine::new(&command, icons()), term.area());

        assert!(term.line_contains(0, "Generated Command"));
        assert!(term.line_contains(0, "⧉ c Copy"));
        assert!(term.line_contains(1, "$ rustscan -a 10.0.0.5 -b 4500"));
    }

    #[test]
    fn test_editing_shows_cursor_and_marker() {
        let mut command = EditableCommand::new("rustscan -a h");
        command.begin_edit();
        command.push('x');
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(CommandLine::new(&command, icons()), term.area());
        assert!(term.line_contains(1, "rustscan -a hx_"));

        command.commit();
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(CommandLine::new(&command, icons()), term.area());
        assert!(term.line_contains(0, "(edited)"));
    }

    #[test]
    fn test_no_edited_marker_while_draft_is_open() {
        let mut command = EditableCommand::new("rustscan <IP>");
        command.begin_edit();
        command.refresh("rustscan 10.0.0.5".to_string());
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(CommandLine::new(&command, icons()), term.area());

        assert!(term.line_contains(1, "rustscan <IP>_"));
        assert!(!term.buffer_contains("(edited)"));
    }

    #[test]
    fn test_copied_badge() {
        let command = EditableCommand::new("rustscan -a h");
        let mut term = TestTerminal::with_size(60, 3);
        term.render_widget(
            CommandLine::new(&command, icons()).copied(true),
            term.area(),
        );
        assert!(term.line_contains(0, "✓ Copied!"));
    }

    #[test]
    fn test_long_command_truncated() {
        let command = EditableCommand::new(format!("rustscan -a {}", "a".repeat(100)));
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(CommandLine::new(&command, icons()), term.area());
        assert!(term.line_contains(1, "$ rustscan -a"));
        assert!(term.line_contains(1, "…"));
    }

    #[test]
    fn test_fit_helpers() {
        assert_eq!(fit_tail("abcdef", 10), "abcdef");
        assert_eq!(fit_tail("abcdef", 4), "…def");
        assert_eq!(fit_head("abcdef", 4), "abc…");
        assert_eq!(fit_head("abcdef", 0), "");
    }
}
