//! filterpane library
//!
//! Frontends that drive a search panel: the headless edit-script runner lives
//! here, the terminal UI in `filterpane-tui`.

pub mod headless;

pub use headless::runner::{run_headless, run_script};
