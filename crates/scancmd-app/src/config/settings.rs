//! Settings loader for `<config_dir>/scancmd/config.toml`
//!
//! Settings are read once at startup and never written back.

use std::path::{Path, PathBuf};

use super::types::Settings;
use scancmd_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "scancmd";

/// Overrides the settings file location when set
pub const CONFIG_ENV_VAR: &str = "SCANCMD_CONFIG";

/// Location of the settings file: `$SCANCMD_CONFIG`, else the platform
/// config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location
pub fn load_user_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory available, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from a file, falling back to defaults on any problem
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match try_load_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Load settings from a file, reporting why it could not be used
pub fn try_load_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::config_invalid(format!("Failed to parse {}: {}", config_path.display(), e))
    })
}
