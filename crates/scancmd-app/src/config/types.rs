//! Configuration types

use serde::{Deserialize, Serialize};

/// Application settings (`<config_dir>/scancmd/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Tab shown on startup
    #[serde(default)]
    pub default_tab: ModeTab,

    /// How long copy confirmations stay visible, in milliseconds
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_tab: ModeTab::default(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default) or Nerd Font
/// glyphs, which need a Nerd Font installed in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Show the usage tips under the preset catalog
    #[serde(default = "default_true")]
    pub show_tips: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_tips: true,
        }
    }
}

/// Clipboard settings
///
/// Leave `command` unset to auto-detect one of the platform tools.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClipboardSettings {
    /// Program receiving the text on stdin (e.g. "xclip")
    #[serde(default)]
    pub command: Option<String>,

    /// Arguments passed to `command`
    #[serde(default)]
    pub args: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level tab selecting which builder is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeTab {
    /// Preset command catalog
    #[default]
    Simple,
    /// Configurable command builder
    Advance,
}

impl ModeTab {
    pub const ALL: [ModeTab; 2] = [ModeTab::Simple, ModeTab::Advance];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Advance => "Advance",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Simple => 0,
            Self::Advance => 1,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Simple => Self::Advance,
            Self::Advance => Self::Simple,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}
