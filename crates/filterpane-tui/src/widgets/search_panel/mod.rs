//! Search panel widget - renders a panel's fieldset
//!
//! One labeled control per field, in schema order:
//! - text/date: a single input row, with a cursor when focused
//! - single-select: one `(•)` / `( )` row per option

mod styles;

#[cfg(test)]
mod tests;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use filterpane_app::{Control, FieldView, PanelView, RadioChoice};

use crate::theme::{palette, styles as theme};

use styles::{
    editing_style, focus_bar_style, label_style, placeholder_style, radio_style, truncate_str,
    value_style, CURSOR, DATE_PLACEHOLDER, INDICATOR_WIDTH, LABEL_WIDTH, RADIO_CHECKED,
    RADIO_UNCHECKED,
};

/// Fieldset widget for a rendered [`PanelView`]
pub struct SearchPanelWidget<'a> {
    view: &'a PanelView,

    /// Index of the field with keyboard focus
    focused: Option<usize>,

    title: &'a str,

    /// Search domain shown next to the title
    subtitle: Option<&'a str>,
}

impl<'a> SearchPanelWidget<'a> {
    pub fn new(view: &'a PanelView) -> Self {
        Self {
            view,
            focused: None,
            title: "Search filters",
            subtitle: None,
        }
    }

    pub fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Rows a field occupies
    fn field_height(field: &FieldView) -> u16 {
        match &field.control {
            Control::Input { .. } => 1,
            Control::Radio { choices } => choices.len().max(1) as u16,
        }
    }
}

impl Widget for SearchPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.subtitle {
            Some(subtitle) => format!(" {} · {} ", self.title, subtitle),
            None => format!(" {} ", self.title),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(self.focused.is_some()))
            .title(Span::styled(title, theme::title()))
            .style(Style::default().bg(palette::SURFACE));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.view.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let mut y = inner.y;
        for (idx, field) in self.view.fields.iter().enumerate() {
            if y >= inner.bottom() {
                break; // Out of space
            }
            let is_focused = self.focused == Some(idx);
            self.render_field(inner, y, buf, field, is_focused);
            y = y.saturating_add(Self::field_height(field));
        }
    }
}

impl SearchPanelWidget<'_> {
    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(Line::from(Span::styled(
            "No filter fields for this search",
            theme::empty_state(),
        )))
        .alignment(Alignment::Center)
        .render(row, buf);
    }

    fn render_field(&self, area: Rect, y: u16, buf: &mut Buffer, field: &FieldView, focused: bool) {
        let mut col = area.x;

        // Column 0: focus bar
        if focused {
            buf.set_stringn(col, y, "▎", 1, focus_bar_style());
        }
        col += INDICATOR_WIDTH;

        // Column 1: label
        let label = truncate_str(&field.label, LABEL_WIDTH.saturating_sub(1) as usize);
        buf.set_stringn(col, y, &label, LABEL_WIDTH as usize, label_style(focused));
        col += LABEL_WIDTH;

        // Column 2: control
        let width = area.right().saturating_sub(col) as usize;
        if width == 0 {
            return;
        }
        match &field.control {
            Control::Input { input_type, value } => {
                self.render_input(col, y, width, buf, input_type, value, focused)
            }
            Control::Radio { choices } => {
                self.render_choices(col, y, width, area.bottom(), buf, choices, focused)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_input(
        &self,
        x: u16,
        y: u16,
        width: usize,
        buf: &mut Buffer,
        input_type: &str,
        value: &str,
        focused: bool,
    ) {
        if focused {
            let display = format!("{value}{CURSOR}");
            // Keep the cursor visible by showing the tail of long values
            let shown = tail_to_width(&display, width);
            buf.set_stringn(x, y, shown, width, editing_style());
        } else if value.is_empty() && input_type == "date" {
            buf.set_stringn(x, y, DATE_PLACEHOLDER, width, placeholder_style());
        } else {
            buf.set_stringn(x, y, truncate_str(value, width), width, value_style());
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_choices(
        &self,
        x: u16,
        y: u16,
        width: usize,
        bottom: u16,
        buf: &mut Buffer,
        choices: &[RadioChoice],
        focused: bool,
    ) {
        for (offset, choice) in choices.iter().enumerate() {
            let row = y.saturating_add(offset as u16);
            if row >= bottom {
                break;
            }
            let marker = if choice.checked {
                RADIO_CHECKED
            } else {
                RADIO_UNCHECKED
            };
            let text = truncate_str(&format!("{marker} {}", choice.label), width);
            buf.set_stringn(x, row, text, width, radio_style(choice.checked, focused));
        }
    }
}

/// Longest suffix of `s` that fits in `width` display columns
fn tail_to_width(s: &str, width: usize) -> &str {
    use unicode_width::UnicodeWidthChar;

    let mut used = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}
