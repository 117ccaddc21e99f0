//! Custom widgets for the search panel TUI

mod params_inspector;
mod search_panel;

pub use params_inspector::ParamsInspector;
pub use search_panel::SearchPanelWidget;
