//! scancmd-app - Application state and orchestration for scancmd
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: both builder modes, the shared target field, copy feedback,
//! settings loading and the clipboard seam.

pub mod advance_mode;
pub mod clipboard;
pub mod config;
pub mod feedback;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod simple_mode;
pub mod state;

// Re-export primary types
pub use advance_mode::{AdvanceModeState, ConfigChange, FieldKind, FormField, FormSection};
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::{IconMode, ModeTab, Settings};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use simple_mode::SimpleModeState;
pub use state::{AppPhase, AppState, Focus};
