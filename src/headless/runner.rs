//! Headless mode runner - applies an edit script to a mounted panel
//!
//! Reads `key=value` lines, pushes each through the panel's change handler,
//! and reports the parameters object after every edit as an NDJSON event.

use std::io::{self, BufRead, Write};

use filterpane_app::{parse_line, process_message, AppState, ScriptCommand};
use filterpane_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode on stdin/stdout
pub fn run_headless(state: &mut AppState) -> Result<()> {
    info!(
        panel = state.domain.name(),
        component = state.domain.component_name(),
        "filterpane starting in headless mode"
    );

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let result = run_script(state, stdin, &mut stdout);

    match &result {
        Ok(edits) => info!(edits, "headless mode exiting"),
        Err(e) => {
            error!("headless mode failed: {:?}", e);
            // The run is over, whatever the error kind
            HeadlessEvent::error(e.to_string(), true).emit();
        }
    }
    result.map(|_| ())
}

/// Apply every command read from `input`, writing events to `out`.
///
/// Invalid lines, including ones that are not UTF-8, are reported as
/// non-fatal `error` events and skipped.
/// Returns the number of edits applied.
pub fn run_script<R: BufRead, W: Write>(
    state: &mut AppState,
    mut input: R,
    out: &mut W,
) -> Result<usize> {
    panel_ready(state).write_to(out)?;

    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut edits = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let parsed = match std::str::from_utf8(&buf) {
            Ok(text) => parse_line(line_no, strip_line_ending(text)),
            Err(_) => Err(Error::script(line_no, "invalid UTF-8")),
        };
        let command = match parsed {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) if e.is_recoverable() => {
                warn!("skipping script line: {}", e);
                HeadlessEvent::error(e.to_string(), false).write_to(out)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let edit = match &command {
            ScriptCommand::Set { key, value } => Some((key.clone(), value.clone())),
            ScriptCommand::Quit => None,
        };
        process_message(state, command.into_message());

        if let Some((key, value)) = edit {
            edits += 1;
            HeadlessEvent::param_changed(&key, &value, state.params.snapshot()).write_to(out)?;
        }
        if state.should_quit() {
            debug!(line = line_no, "quit requested by script");
            break;
        }
    }

    HeadlessEvent::finished(edits).write_to(out)?;
    Ok(edits)
}

/// Drop a trailing `\n` or `\r\n`; values keep any other whitespace
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn panel_ready(state: &AppState) -> HeadlessEvent {
    HeadlessEvent::panel_ready(
        state.domain.name(),
        state.domain.component_name(),
        state.host.templates().get(state.domain.template_key()),
        state.panel.schema().keys().map(str::to_string).collect(),
        state.params.snapshot(),
    )
}
