//! Rendering tests for the search panel widget

use filterpane_core::SearchParams;

use super::*;
use crate::test_utils::{photo_state, video_state, TestTerminal};

fn render(view: &PanelView, focused: Option<usize>) -> TestTerminal {
    let mut term = TestTerminal::new();
    let mut widget = SearchPanelWidget::new(view).subtitle("photo");
    if let Some(index) = focused {
        widget = widget.focused(index);
    }
    term.render_widget(widget, term.area());
    term
}

#[test]
fn test_empty_params_check_first_orientation() {
    let state = photo_state(&SearchParams::new());
    let term = render(&state.panel.render(), None);

    assert!(term.buffer_contains("(•) any"));
    assert!(term.buffer_contains("( ) landscape"));
    assert!(term.buffer_contains("( ) panoramic"));
}

#[test]
fn test_stored_orientation_is_checked() {
    let state = photo_state(&SearchParams::from_pairs([("orientation", "3")]));
    let term = render(&state.panel.render(), None);

    assert!(term.buffer_contains("( ) any"));
    assert!(term.buffer_contains("(•) square"));
}

#[test]
fn test_fields_render_in_schema_order() {
    let state = photo_state(&SearchParams::new());
    let term = render(&state.panel.render(), None);

    let rows: Vec<u16> = ["Reference", "File name", "Orientation", "First date"]
        .iter()
        .map(|label| term.find_line(label).expect("label rendered"))
        .collect();
    assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_values_render_next_to_labels() {
    let state = photo_state(&SearchParams::from_pairs([
        ("reference", "ANP-42"),
        ("firstdate", "2020-01-01"),
    ]));
    let term = render(&state.panel.render(), None);

    let row = term.find_line("Reference").unwrap();
    assert!(term.line_contains(row, "ANP-42"));
    let row = term.find_line("First date").unwrap();
    assert!(term.line_contains(row, "2020-01-01"));
}

#[test]
fn test_empty_date_shows_placeholder() {
    let state = photo_state(&SearchParams::new());
    let term = render(&state.panel.render(), None);

    let row = term.find_line("First date").unwrap();
    assert!(term.line_contains(row, DATE_PLACEHOLDER));
}

#[test]
fn test_focused_input_shows_cursor() {
    let state = photo_state(&SearchParams::from_pairs([("filename", "sunset")]));
    let term = render(&state.panel.render(), Some(1));

    let row = term.find_line("File name").unwrap();
    assert!(term.line_contains(row, "sunset▌"));
    assert!(term.line_contains(row, "▎"));
}

#[test]
fn test_title_includes_subtitle() {
    let state = photo_state(&SearchParams::new());
    let term = render(&state.panel.render(), None);

    assert!(term.line_contains(0, "Search filters · photo"));
}

#[test]
fn test_video_panel_renders_empty_state() {
    let state = video_state(&SearchParams::new());
    let view = state.panel.render();
    let mut term = TestTerminal::new();

    term.render_widget(SearchPanelWidget::new(&view).subtitle("video"), term.area());

    assert!(term.buffer_contains("No filter fields for this search"));
    assert!(!term.buffer_contains("(•)"));
}

#[test]
fn test_small_area_does_not_panic() {
    let state = photo_state(&SearchParams::new());
    let view = state.panel.render();
    let mut term = TestTerminal::with_size(12, 4);

    term.render_widget(SearchPanelWidget::new(&view).focused(2), term.area());
}

#[test]
fn test_tail_to_width_keeps_suffix() {
    assert_eq!(tail_to_width("abcdef", 3), "def");
    assert_eq!(tail_to_width("abc", 10), "abc");
    assert_eq!(tail_to_width("abc", 0), "");
}
