//! filterpane-tui - Terminal UI for search filter panels
//!
//! Renders a mounted [`filterpane_app::SearchPanel`] with ratatui, next to a
//! live view of the parameters object it edits.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
