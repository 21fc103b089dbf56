//! Shared target field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scancmd_core::AddressFamily;

use crate::theme::{icons::IconSet, styles};

/// The host/IP field shown above both modes
pub struct TargetInput<'a> {
    value: &'a str,
    family: AddressFamily,
    focused: bool,
    copied: bool,
    icons: IconSet,
}

impl<'a> TargetInput<'a> {
    pub fn new(value: &'a str, family: AddressFamily, icons: IconSet) -> Self {
        Self {
            value,
            family,
            focused: false,
            copied: false,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    fn copy_badge(&self) -> Line<'static> {
        if self.copied {
            Line::from(vec![
                Span::styled(self.icons.check(), styles::success()),
                Span::styled(" Copied! ", styles::success()),
            ])
        } else if self.value.is_empty() {
            Line::default()
        } else {
            Line::from(vec![
                Span::styled("^Y", styles::keybinding()),
                Span::styled(" Copy ", styles::text_muted()),
            ])
        }
    }
}

impl Widget for TargetInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.globe(), styles::accent()),
            Span::raw(" Target "),
            Span::styled(format!("[{} F3] ", self.family.label()), styles::text_muted()),
        ]);
        let block = styles::glass_block(self.focused)
            .title(title)
            .title_top(self.copy_badge().right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(self.family.placeholder(), styles::text_muted()));
        } else {
            spans.push(Span::styled(self.value, styles::text_primary()));
            if self.focused {
                spans.push(Span::styled("_", styles::keybinding()));
            }
            if self.value.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(self.family.placeholder(), styles::text_muted()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
