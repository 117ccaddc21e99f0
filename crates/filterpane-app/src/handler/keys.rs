//! Key event handlers

use filterpane_core::FieldKind;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages for the focused field
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        _ => {}
    }

    match &state.focused_field()?.kind {
        FieldKind::Text | FieldKind::Date => match key {
            InputKey::Char(c) => Some(Message::CharInput(c)),
            InputKey::Backspace => Some(Message::Backspace),
            InputKey::CharCtrl('u') => Some(Message::ClearField),
            InputKey::Enter => Some(Message::FocusNext),
            _ => None,
        },
        FieldKind::SingleSelect(_) => match key {
            InputKey::Right | InputKey::Char(' ') | InputKey::Char('l') => {
                Some(Message::SelectNextOption)
            }
            InputKey::Left | InputKey::Char('h') => Some(Message::SelectPrevOption),
            InputKey::Enter => Some(Message::FocusNext),
            _ => None,
        },
    }
}
