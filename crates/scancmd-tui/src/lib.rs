//! scancmd-tui - Terminal UI for scancmd
//!
//! Ratatui front end over the scancmd-app state: terminal setup, event
//! polling, layout, theme and widgets for both builder modes.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
