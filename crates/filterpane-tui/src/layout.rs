//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the parameters inspector column
const INSPECTOR_WIDTH: u16 = 34;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub panel: Rect,

    /// Parameters inspector, absent when hidden in settings
    pub inspector: Option<Rect>,

    /// Single-row key hint bar
    pub footer: Rect,
}

/// Split the screen into panel, optional inspector, and footer
pub fn create(area: Rect, show_inspector: bool) -> ScreenAreas {
    let [body, footer] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    if !show_inspector {
        return ScreenAreas {
            panel: body,
            inspector: None,
            footer,
        };
    }

    let [panel, inspector] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(INSPECTOR_WIDTH)]).areas(body);

    ScreenAreas {
        panel,
        inspector: Some(inspector),
        footer,
    }
}
