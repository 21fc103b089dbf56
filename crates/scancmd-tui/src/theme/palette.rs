//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const POPUP_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Command line ---
pub const COMMAND_FG: Color = Color::LightGreen;
pub const COMMAND_EDIT_BG: Color = Color::Rgb(40, 40, 50);

/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;
