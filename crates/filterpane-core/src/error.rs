//! Application error types with rich context
//!
//! The panel operations themselves never fail; errors only come from the
//! layers around them (configuration, terminal, host registration, scripts).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Host Registration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No component registered under name: {name}")]
    UnknownComponent { name: String },

    #[error("Component {component} requires the '{prop}' prop")]
    MissingProp { component: String, prop: String },

    #[error("Unknown search panel: {name} (expected 'photo' or 'video')")]
    UnknownPanel { name: String },

    // ─────────────────────────────────────────────────────────────
    // Headless Script Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Edit script line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Invalid parameter assignment '{input}', expected key=value")]
    InvalidAssignment { input: String },

    #[error("Directory not found: {path}")]
    NoDirectory { path: PathBuf },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }

    pub fn missing_prop(component: impl Into<String>, prop: impl Into<String>) -> Self {
        Self::MissingProp {
            component: component.into(),
            prop: prop.into(),
        }
    }

    pub fn unknown_panel(name: impl Into<String>) -> Self {
        Self::UnknownPanel { name: name.into() }
    }

    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_assignment(input: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            input: input.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::Toml(_) | Error::Script { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::UnknownComponent { .. }
                | Error::UnknownPanel { .. }
                | Error::NoDirectory { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
