//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next field (wraps)
    FocusNext,

    /// Move focus to the previous field (wraps)
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Edit Messages (all end in SearchPanel::on_change)
    // ─────────────────────────────────────────────────────────
    /// Append a character to the focused text/date field
    CharInput(char),

    /// Delete the last character of the focused text/date field
    Backspace,

    /// Set the focused text/date field to ""
    ClearField,

    /// Choose the option after the selected one (wraps)
    SelectNextOption,

    /// Choose the option before the selected one (wraps)
    SelectPrevOption,

    /// Set a parameter directly (headless edit scripts)
    SetParam { key: String, value: String },
}
