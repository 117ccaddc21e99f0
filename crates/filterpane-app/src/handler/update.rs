//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::keys::handle_key;
use super::{panel, UpdateResult};

/// Process a message and update state
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => panel::handle_focus_next(state),
        Message::FocusPrev => panel::handle_focus_prev(state),

        // ─────────────────────────────────────────────────────────
        // Edit Messages
        // ─────────────────────────────────────────────────────────
        Message::CharInput(c) => panel::handle_char_input(state, c),
        Message::Backspace => panel::handle_backspace(state),
        Message::ClearField => panel::handle_clear_field(state),
        Message::SelectNextOption => panel::handle_cycle_option(state, true),
        Message::SelectPrevOption => panel::handle_cycle_option(state, false),
        Message::SetParam { key, value } => panel::handle_set_param(state, &key, value),
    }
}
