//! Semantic styles shared by widgets

use ratatui::style::{Modifier, Style};

use super::palette;

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    }
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn kbd_badge() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn kbd_label() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn empty_state() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC)
}
