//! Configuration file parsing for scancmd
//!
//! Supports `<config_dir>/scancmd/config.toml` (or `$SCANCMD_CONFIG`).

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, load_user_settings, try_load_settings};
pub use types::*;
