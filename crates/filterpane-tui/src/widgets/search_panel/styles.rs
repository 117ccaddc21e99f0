//! Styling helpers for search panel rendering

use ratatui::style::{Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::palette;

/// Layout constants for field rows
pub const INDICATOR_WIDTH: u16 = 3;
pub const LABEL_WIDTH: u16 = 14;

pub const RADIO_CHECKED: &str = "(•)";
pub const RADIO_UNCHECKED: &str = "( )";
pub const CURSOR: &str = "▌";
pub const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Style for labels
pub fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}

/// Style for the value of a focused text/date input
pub fn editing_style() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .bg(palette::BORDER_DIM)
}

pub fn value_style() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC)
}

pub fn radio_style(checked: bool, is_focused: bool) -> Style {
    match (checked, is_focused) {
        (true, true) => Style::default()
            .fg(palette::STATUS_INDIGO)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(palette::STATUS_INDIGO),
        (false, _) => Style::default().fg(palette::TEXT_SECONDARY),
    }
}

pub fn focus_bar_style() -> Style {
    Style::default().fg(palette::ACCENT)
}

/// Truncate to a display width, marking the cut with an ellipsis
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
