//! Header bar widget
//!
//! Title on the left, mode tabs on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scancmd_app::config::ModeTab;

use super::ModeTabs;
use crate::theme::{icons::IconSet, styles};

pub const TITLE: &str = "RustScan Command Generator";

/// Main header showing the app title and the mode tabs
pub struct MainHeader {
    active_tab: ModeTab,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(active_tab: ModeTab, icons: IconSet) -> Self {
        Self { active_tab, icons }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let tabs = ModeTabs::new(self.active_tab);
        let tabs_width = tabs.width().min(inner.width);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.terminal(), styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
        ]);
        let title_width = inner.width.saturating_sub(tabs_width);
        Paragraph::new(title).render(Rect { width: title_width, ..inner }, buf);

        let tabs_area = Rect {
            x: inner.x + inner.width - tabs_width,
            y: inner.y,
            width: tabs_width,
            height: 1,
        };
        tabs.render(tabs_area, buf);
    }
}
