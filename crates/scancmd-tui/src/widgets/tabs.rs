//! Mode tabs widget
//!
//! Shows which builder (Simple / Advance) is visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use scancmd_app::config::ModeTab;

use crate::theme::styles;

/// Widget displaying the mode tabs with their function-key shortcuts
pub struct ModeTabs {
    active: ModeTab,
}

impl ModeTabs {
    pub fn new(active: ModeTab) -> Self {
        Self { active }
    }

    /// Rendered width, used to right-align the tabs in the header
    pub fn width(&self) -> u16 {
        self.titles().iter().map(|t| t.width() as u16).sum::<u16>()
            + (ModeTab::ALL.len() as u16 - 1) // dividers
            + 2 * ModeTab::ALL.len() as u16 // padding
    }

    fn titles(&self) -> Vec<Line<'static>> {
        ModeTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("F{} ", i + 1), styles::keybinding()),
                    Span::raw(tab.label()),
                ])
            })
            .collect()
    }
}

impl Widget for ModeTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(self.titles())
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");
        tabs.render(area, buf);
    }
}
