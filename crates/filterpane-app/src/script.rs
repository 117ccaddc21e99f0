//! Edit scripts for headless mode
//!
//! One command per line:
//!
//! ```text
//! # comment
//! filename=sunset.jpg
//! orientation=2
//! quit
//! ```
//!
//! Blank lines and `#` comments are skipped. Values keep their whitespace;
//! keys are trimmed.

use filterpane_core::prelude::*;
use filterpane_core::parse_assignment;

use crate::message::Message;

/// One parsed line of an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Edit a field through the panel's change handler
    Set { key: String, value: String },

    Quit,
}

impl ScriptCommand {
    /// Message that applies this command to the app state
    pub fn into_message(self) -> Message {
        match self {
            Self::Set { key, value } => Message::SetParam { key, value },
            Self::Quit => Message::Quit,
        }
    }
}

/// Parse one script line. `line_no` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ScriptCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    if matches!(trimmed, "q" | "quit") {
        return Ok(Some(ScriptCommand::Quit));
    }

    match parse_assignment(line.trim_start()) {
        Some((key, value)) => Ok(Some(ScriptCommand::Set { key, value })),
        None if !trimmed.contains('=') => Err(Error::script(line_no, "expected key=value")),
        None => Err(Error::script(line_no, "empty parameter key")),
    }
}

/// Parse a whole script, stopping at the first invalid line
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(idx + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
