//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use filterpane_app::AppState;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{ParamsInspector, SearchPanelWidget};

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_params);

    let view = state.panel.render();
    let mut panel = SearchPanelWidget::new(&view)
        .title(&state.settings.ui.title)
        .subtitle(state.domain.name());
    if state.field_count() > 0 {
        panel = panel.focused(state.focus.index);
    }
    frame.render_widget(panel, areas.panel);

    if let Some(inspector) = areas.inspector {
        frame.render_widget(ParamsInspector::new(&state.params), inspector);
    }

    frame.render_widget(Paragraph::new(footer_hints(state)), areas.footer);
}

/// Key hints relevant to the focused field
fn footer_hints(state: &AppState) -> Line<'static> {
    let mut hints: Vec<(&str, &str)> = Vec::new();
    if let Some(field) = state.focused_field() {
        hints.push(("Tab", "next"));
        hints.push(("S-Tab", "prev"));
        if field.kind.is_free_form() {
            hints.push(("^U", "clear"));
        } else {
            hints.push(("←/→", "choose"));
        }
    }
    hints.push(("Esc", "quit"));

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), styles::kbd_badge()));
        spans.push(Span::styled(format!(" {label}  "), styles::kbd_label()));
    }
    Line::from(spans)
}
