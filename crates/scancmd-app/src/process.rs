//! Message processing loop
//!
//! Runs a message through [`handler::update`] until no follow-up remains and
//! performs the resulting actions.

use crate::clipboard::Clipboard;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;
use tracing::{error, warn};

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, clipboard: &mut dyn Clipboard) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, clipboard);
        }

        msg = result.message;
    }
}

/// Perform a side effect requested by the update function
pub fn handle_action(action: UpdateAction, clipboard: &mut dyn Clipboard) {
    match action {
        UpdateAction::CopyToClipboard { text } => {
            // The UI already shows success; failures are only logged
            match clipboard.write_text(&text) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => warn!("Clipboard write failed: {}", e),
                Err(e) => error!("Clipboard write failed: {}", e),
            }
        }
    }
}
