//! Transient copy confirmation

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub struct Toast<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> Toast<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }

    /// Columns needed to show the whole message inside the border
    pub fn width(&self) -> u16 {
        // border + padding + icon + space
        (self.message.chars().count() + 6) as u16
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::toast_block();
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.check(), styles::success()),
            Span::raw(" "),
            Span::styled(self.message, styles::text_primary()),
        ]))
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use scancmd_app::config::IconMode;

    #[test]
    fn test_toast_renders_message() {
        let toast = Toast::new("Command copied to clipboard!", IconSet::new(IconMode::Unicode));
        assert_eq!(toast.width(), 34);

        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(toast, Rect::new(0, 0, 34, 3));
        assert!(term.line_contains(1, "✓ Command copied to clipboard!"));
    }
}
