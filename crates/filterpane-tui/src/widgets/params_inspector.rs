//! Parameters inspector widget
//!
//! Read-only view of the host-owned parameters object, rendered from a fresh
//! snapshot every frame. It observes the same object the panel publishes to.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use filterpane_core::SearchParams;

use crate::theme::{palette, styles as theme};

pub struct ParamsInspector<'a> {
    params: &'a SearchParams,
}

impl<'a> ParamsInspector<'a> {
    pub fn new(params: &'a SearchParams) -> Self {
        Self { params }
    }
}

impl Widget for ParamsInspector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(false))
            .title(Span::styled(" params ", theme::title()));

        let snapshot = self.params.snapshot();
        let lines: Vec<Line> = if snapshot.is_empty() {
            vec![Line::from(Span::styled("(empty)", theme::empty_state()))]
        } else {
            snapshot
                .iter()
                .map(|(key, value)| {
                    Line::from(vec![
                        Span::styled(key.clone(), Style::default().fg(palette::ACCENT_DIM)),
                        Span::raw(" = "),
                        Span::styled(
                            format!("{value:?}"),
                            Style::default().fg(palette::STATUS_GREEN),
                        ),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
