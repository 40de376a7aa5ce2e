//! Keyboard bindings for the terminal preview.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to page actions.
///
/// Defaults are vim-style scrolling plus browser-like history keys. Player
/// shortcuts are not listed here; they apply only while the player has focus.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        let table = [
            // Scrolling
            (plain(KeyCode::Char('j')), KeyAction::ScrollDown),
            (plain(KeyCode::Down), KeyAction::ScrollDown),
            (plain(KeyCode::Char('k')), KeyAction::ScrollUp),
            (plain(KeyCode::Up), KeyAction::ScrollUp),
            (plain(KeyCode::PageDown), KeyAction::PageDown),
            (ctrl('d'), KeyAction::PageDown),
            (plain(KeyCode::PageUp), KeyAction::PageUp),
            (ctrl('u'), KeyAction::PageUp),
            (plain(KeyCode::Char('g')), KeyAction::ScrollToTop),
            (plain(KeyCode::Home), KeyAction::ScrollToTop),
            (
                KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
                KeyAction::ScrollToBottom,
            ),
            (plain(KeyCode::End), KeyAction::ScrollToBottom),
            // History
            (plain(KeyCode::Char('[')), KeyAction::HistoryBack),
            (plain(KeyCode::Char(']')), KeyAction::HistoryForward),
            // Menus
            (plain(KeyCode::Tab), KeyAction::FocusNextMenu),
            (
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                KeyAction::FocusPrevMenu,
            ),
            (plain(KeyCode::Esc), KeyAction::CloseMenu),
            // Widgets
            (plain(KeyCode::Char('v')), KeyAction::FocusPlayer),
            (plain(KeyCode::Char('.')), KeyAction::CarouselNext),
            (plain(KeyCode::Char(',')), KeyAction::CarouselPrev),
            (plain(KeyCode::Enter), KeyAction::SendContact),
            // Application
            (plain(KeyCode::Char('q')), KeyAction::Quit),
            (ctrl('c'), KeyAction::Quit),
        ];

        Self {
            bindings: table.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_keys_scroll() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::ScrollDown)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(KeyAction::ScrollUp)
        );
    }

    #[test]
    fn home_and_g_both_scroll_to_top() {
        let bindings = KeyBindings::default();
        for code in [KeyCode::Char('g'), KeyCode::Home] {
            assert_eq!(
                bindings.get(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(KeyAction::ScrollToTop),
                "{code:?}"
            );
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            None,
            "plain 'c' is unbound"
        );
    }

    #[test]
    fn bind_replaces_existing_action() {
        let mut bindings = KeyBindings::default();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        bindings.bind(key, KeyAction::CloseMenu);
        assert_eq!(bindings.get(key), Some(KeyAction::CloseMenu));
    }
}
