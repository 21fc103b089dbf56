//! Main TUI runner - entry point and event loop

use ratatui::DefaultTerminal;

use scancmd_app::clipboard::{Clipboard, SystemClipboard};
use scancmd_app::config::Settings;
use scancmd_app::process::process_message;
use scancmd_app::state::AppState;
use scancmd_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive builder until the user quits
pub fn run(settings: Settings, target: Option<&str>) -> Result<()> {
    let mut clipboard = SystemClipboard::detect(&settings.clipboard);
    let mut state = AppState::with_target(settings, target.unwrap_or_default());
    info!(
        "Starting TUI: tab={}, clipboard={}",
        state.active_tab.label(),
        clipboard.is_available()
    );

    let mut term = terminal::init();
    let result = run_loop(&mut term, &mut state, &mut clipboard);
    terminal::restore();

    result
}

/// Draw, poll, update until the state asks to quit
fn run_loop(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, clipboard);
        }
    }

    debug!("Event loop finished");
    Ok(())
}
