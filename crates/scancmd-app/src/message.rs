//! Message types for the application (TEA pattern)

use crate::advance_mode::ConfigChange;
use crate::config::ModeTab;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (expires copy indicators)
    Tick,

    /// Exit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus & Tabs
    // ─────────────────────────────────────────────────────────
    /// Move focus between the target field and the active tab
    ToggleFocus,

    /// Show a specific tab
    SelectTab(ModeTab),

    /// Show the next tab
    NextTab,

    /// Show the previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Target Field
    // ─────────────────────────────────────────────────────────
    /// Type a character into the target
    TargetInput(char),

    /// Delete the last target character
    TargetBackspace,

    /// Clear the target
    TargetClear,

    /// Replace the whole target
    SetTarget(String),

    /// Switch the IPv4 / IPv6 placeholder hint
    ToggleAddressFamily,

    /// Copy the target to the clipboard
    CopyTarget,

    // ─────────────────────────────────────────────────────────
    // Simple Mode
    // ─────────────────────────────────────────────────────────
    /// Select the next preset
    PresetDown,

    /// Select the previous preset
    PresetUp,

    /// Copy the rendered command of a preset
    CopyPreset { index: usize },

    // ─────────────────────────────────────────────────────────
    // Advance Mode
    // ─────────────────────────────────────────────────────────
    /// Select the next form field
    FieldDown,

    /// Select the previous form field
    FieldUp,

    /// Toggle, select or start editing the selected field
    FieldActivate,

    /// Cycle the selected field's value
    FieldCycle { forward: bool },

    /// Type into the field being edited
    FieldInput(char),

    /// Delete the last character of the field being edited
    FieldBackspace,

    /// Clear the field being edited
    FieldClear,

    /// Commit the field edit
    FieldCommit,

    /// Cancel the field edit
    FieldCancel,

    /// Apply a configuration change directly
    Configure(ConfigChange),

    /// Type into the hand-edited command
    CommandInput(char),

    /// Delete the last character of the hand-edited command
    CommandBackspace,

    /// Clear the hand-edited command
    CommandClear,

    /// Commit the hand edit (Enter or blur)
    CommandCommit,

    /// Copy the generated command
    CopyCommand,
}
