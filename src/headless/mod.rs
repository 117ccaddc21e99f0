//! Headless mode - NDJSON event output instead of the TUI
//!
//! Every event is one JSON object on its own line, tagged by an `"event"`
//! field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"panel_ready","panel":"photo","component":"anpSearchPanel","template":"<anp-search-panel params=\"params\" scope=\"scope\"></anp-search-panel>","fields":["reference","filename","orientation","firstdate"],"params":{},"timestamp":1704700001000}
//! {"event":"param_changed","key":"orientation","value":"2","params":{"orientation":"2"},"timestamp":1704700002000}
//! {"event":"finished","edits":1,"timestamp":1704700002001}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use filterpane_core::ParamMap;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Panel mounted on the parameters object
    PanelReady {
        panel: String,
        component: String,
        /// Companion markup registered by the panel's host module
        template: Option<String>,
        fields: Vec<String>,
        params: ParamMap,
        timestamp: i64,
    },

    /// A field edit went through the panel, `params` is the object afterwards
    ParamChanged {
        key: String,
        value: String,
        params: ParamMap,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// End of input or an explicit quit
    Finished { edits: usize, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as a single JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> filterpane_core::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn panel_ready(
        panel: &str,
        component: &str,
        template: Option<&str>,
        fields: Vec<String>,
        params: ParamMap,
    ) -> Self {
        Self::PanelReady {
            panel: panel.to_string(),
            component: component.to_string(),
            template: template.map(str::to_string),
            fields,
            params,
            timestamp: Self::now(),
        }
    }

    pub fn param_changed(key: &str, value: &str, params: ParamMap) -> Self {
        Self::ParamChanged {
            key: key.to_string(),
            value: value.to_string(),
            params,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn finished(edits: usize) -> Self {
        Self::Finished {
            edits,
            timestamp: Self::now(),
        }
    }
}
