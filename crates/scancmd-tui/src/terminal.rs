//! Terminal setup and restoration

use tracing::debug;

/// Enter raw mode and the alternate screen
pub fn init() -> ratatui::DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    ratatui::restore();
    debug!("Terminal restored");
}

/// Install a panic hook that restores the terminal
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
