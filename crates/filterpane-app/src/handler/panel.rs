//! Focus and edit handlers
//!
//! Every edit reads the focused field's current value, computes the new one
//! and hands it to `SearchPanel::on_change`, which commits locally and then
//! publishes to the parameters object.

use filterpane_core::prelude::*;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    let count = state.field_count();
    state.focus.next(count);
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    let count = state.field_count();
    state.focus.prev(count);
    UpdateResult::none()
}

/// Key and current value of the focused free-form field
fn focused_input(state: &AppState) -> Option<(&'static str, String)> {
    let field = state.focused_field()?;
    if !field.kind.is_free_form() {
        return None;
    }
    let value = state.panel.value(field.key).unwrap_or_default().to_string();
    Some((field.key, value))
}

pub fn handle_char_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some((key, mut value)) = focused_input(state) {
        value.push(c);
        state.panel.on_change(key, value);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some((key, mut value)) = focused_input(state) {
        if value.pop().is_some() {
            state.panel.on_change(key, value);
        }
    }
    UpdateResult::none()
}

pub fn handle_clear_field(state: &mut AppState) -> UpdateResult {
    if let Some((key, _)) = focused_input(state) {
        state.panel.on_change(key, "");
    }
    UpdateResult::none()
}

/// Select the neighbouring option of the focused single-select field
pub fn handle_cycle_option(state: &mut AppState, forward: bool) -> UpdateResult {
    let Some(field) = state.focused_field() else {
        return UpdateResult::none();
    };
    let options = field.kind.options();
    if options.is_empty() {
        return UpdateResult::none();
    }

    let key = field.key;
    let view = state.panel.render();
    // A stored value matching no option counts as sitting on the default
    let current = view
        .field(key)
        .and_then(|f| f.checked_index())
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % options.len()
    } else {
        (current + options.len() - 1) % options.len()
    };
    let id = options[next].id;

    debug!(key, option = id, "option selected");
    state.panel.on_change(key, id);
    UpdateResult::none()
}

pub fn handle_set_param(state: &mut AppState, key: &str, value: String) -> UpdateResult {
    state.panel.on_change(key, value);
    UpdateResult::none()
}
