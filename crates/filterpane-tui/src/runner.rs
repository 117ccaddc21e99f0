//! TUI runner - terminal lifecycle and event loop

use ratatui::DefaultTerminal;

use filterpane_app::{process_message, AppState};
use filterpane_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive panel until the user quits
pub fn run(state: &mut AppState) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!(panel = state.domain.name(), "TUI started");

    let result = run_loop(&mut term, state);

    ratatui::restore();
    info!(params = state.params.len(), "TUI stopped");

    result
}

fn run_loop(term: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}
