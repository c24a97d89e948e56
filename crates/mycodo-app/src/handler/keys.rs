//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key event to a message
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc if state.nav_focus.is_some() => Some(Message::ClearLinkFocus),
        InputKey::Esc => Some(Message::Quit),

        // Navigation links by position: '1' is the first link
        InputKey::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            (index < state.chrome().link_count()).then_some(Message::ActivateNavItem(index))
        }

        // Keyboard cursor over the links
        InputKey::Tab => Some(Message::FocusNextLink),
        InputKey::BackTab => Some(Message::FocusPrevLink),
        InputKey::Enter if state.nav_focus.is_some() => Some(Message::ActivateFocusedLink),

        // History
        InputKey::Char('[') | InputKey::AltLeft | InputKey::Backspace => Some(Message::Back),
        InputKey::Char(']') | InputKey::AltRight => Some(Message::Forward),
        InputKey::Char('r') | InputKey::F(5) => Some(Message::Reload),

        _ => None,
    }
}
