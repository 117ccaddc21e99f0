//! Tests for the update loop driving the search panel

use filterpane_core::SearchParams;

use super::*;
use crate::config::Settings;
use crate::domain::SearchDomain;
use crate::input_key::InputKey;
use crate::state::AppState;

fn photo_state(params: &SearchParams) -> AppState {
    AppState::new(Settings::default(), SearchDomain::Photo, params.clone()).unwrap()
}

fn type_keys(state: &mut AppState, text: &str) {
    for c in text.chars() {
        process_message(state, Message::Key(InputKey::Char(c)));
    }
}

fn focus(state: &mut AppState, key: &str) {
    while state.focused_field().map(|f| f.key) != Some(key) {
        process_message(state, Message::FocusNext);
    }
}

#[test]
fn test_typing_updates_params_after_every_key() {
    let params = SearchParams::new();
    let mut state = photo_state(&params);
    focus(&mut state, "filename");

    type_keys(&mut state, "sun");
    assert_eq!(params.get("filename").as_deref(), Some("sun"));

    type_keys(&mut state, "set.jpg");
    assert_eq!(params.get("filename").as_deref(), Some("sunset.jpg"));
}

#[test]
fn test_backspace_and_clear() {
    let params = SearchParams::from_pairs([("reference", "ANP-12")]);
    let mut state = photo_state(&params);

    process_message(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(params.get("reference").as_deref(), Some("ANP-1"));

    process_message(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert_eq!(params.get("reference").as_deref(), Some(""));
}

#[test]
fn test_backspace_on_empty_field_does_not_write() {
    let params = SearchParams::new();
    let mut state = photo_state(&params);

    process_message(&mut state, Message::Key(InputKey::Backspace));

    assert!(params.is_empty());
}

#[test]
fn test_right_arrow_moves_off_default_orientation() {
    let params = SearchParams::from_pairs([("orientation", "")]);
    let mut state = photo_state(&params);
    focus(&mut state, "orientation");

    process_message(&mut state, Message::Key(InputKey::Right));

    assert_eq!(params.get("orientation").as_deref(), Some("1"));
    let view = state.panel.render();
    assert_eq!(view.field("orientation").unwrap().checked_ids(), vec!["1"]);
}

#[test]
fn test_left_arrow_wraps_to_last_option() {
    let params = SearchParams::new();
    let mut state = photo_state(&params);
    focus(&mut state, "orientation");

    process_message(&mut state, Message::Key(InputKey::Left));

    assert_eq!(params.get("orientation").as_deref(), Some("4"));
}

#[test]
fn test_typing_on_radio_field_is_ignored() {
    let params = SearchParams::new();
    let mut state = photo_state(&params);
    focus(&mut state, "orientation");

    type_keys(&mut state, "x");

    assert!(params.is_empty());
}

#[test]
fn test_enter_advances_focus() {
    let mut state = photo_state(&SearchParams::new());

    process_message(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.focused_field().map(|f| f.key), Some("filename"));
}

#[test]
fn test_focus_cycles_through_all_fields() {
    let mut state = photo_state(&SearchParams::new());
    let mut seen = Vec::new();

    for _ in 0..state.field_count() {
        seen.push(state.focused_field().unwrap().key);
        process_message(&mut state, Message::Key(InputKey::Tab));
    }

    assert_eq!(seen, vec!["reference", "filename", "orientation", "firstdate"]);
    assert_eq!(state.focus.index, 0);

    process_message(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focused_field().map(|f| f.key), Some("firstdate"));
}

#[test]
fn test_set_param_accepts_unknown_keys() {
    let params = SearchParams::new();
    let mut state = photo_state(&params);

    process_message(
        &mut state,
        Message::SetParam {
            key: "colour".into(),
            value: "red".into(),
        },
    );

    assert_eq!(params.get("colour").as_deref(), Some("red"));
    assert!(state.panel.render().field("colour").is_none());
}

#[test]
fn test_video_panel_ignores_edit_keys() {
    let params = SearchParams::from_pairs([("q", "goal")]);
    let mut state = AppState::new(Settings::default(), SearchDomain::Video, params.clone()).unwrap();

    type_keys(&mut state, "abc");
    process_message(&mut state, Message::Key(InputKey::Right));
    process_message(&mut state, Message::Key(InputKey::Tab));

    assert_eq!(params.snapshot().len(), 1);
    assert_eq!(params.get("q").as_deref(), Some("goal"));
}

#[test]
fn test_quit_keys() {
    for key in [InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut state = photo_state(&SearchParams::new());
        process_message(&mut state, Message::Key(key));
        assert!(state.should_quit());
    }
}
