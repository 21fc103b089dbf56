//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header (title + tab bar)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the target field
pub const TARGET_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and mode tabs
    pub header: Rect,

    /// Shared target field
    pub target: Rect,

    /// Active tab content
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TARGET_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        target: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

/// Bottom-right rect for the toast notification
pub fn toast_area(area: Rect, width: u16) -> Rect {
    let w = width.min(area.width);
    let h = 3.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(w),
        area.y + area.height.saturating_sub(h),
        w,
        h,
    )
}
