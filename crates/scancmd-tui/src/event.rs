//! Terminal input: crossterm events to app messages

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use scancmd_app::message::Message;
use scancmd_app::InputKey;
use scancmd_core::prelude::*;

/// Interval between `Tick` messages when no input arrives
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Wait up to [`TICK_RATE`] for input, yielding `Tick` on timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(TICK_RATE)? {
        return Ok(Some(Message::Tick));
    }
    Ok(translate(event::read()?))
}

/// Key presses become `Message::Key`; releases, mouse and resize are dropped
fn translate(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.is_press() => to_input_key(key).map(Message::Key),
        _ => None,
    }
}

/// Map a key press onto the builder's key vocabulary
pub fn to_input_key(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char(c) if ctrl => Some(InputKey::CharCtrl(c)),
        // Shifted symbols (`:` in IPv6 targets) arrive already resolved
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        // Some terminals send Shift+Tab as Tab with SHIFT
        KeyCode::Tab if shift => Some(InputKey::BackTab),
        code => named_key(code),
    }
}

/// Non-character keys the builder binds
fn named_key(code: KeyCode) -> Option<InputKey> {
    let key = match code {
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::F(n) => InputKey::F(n),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        to_input_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_ctrl_characters() {
        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), Some(InputKey::Char('a')));
        assert_eq!(
            press(KeyCode::Char('y'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('y'))
        );
    }

    #[test]
    fn test_ipv6_colon_passes_through() {
        assert_eq!(press(KeyCode::Char(':'), KeyModifiers::SHIFT), Some(InputKey::Char(':')));
    }

    #[test]
    fn test_named_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Tab, InputKey::Tab),
            (KeyCode::Backspace, InputKey::Backspace),
            (KeyCode::F(3), InputKey::F(3)),
        ];
        for (code, expected) in cases {
            assert_eq!(press(code, KeyModifiers::NONE), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn test_both_back_tab_encodings() {
        assert_eq!(press(KeyCode::Tab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
        assert_eq!(press(KeyCode::BackTab, KeyModifiers::SHIFT), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(press(KeyCode::Insert, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_only_presses_become_messages() {
        let pressed = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(translate(pressed), Some(Message::Key(InputKey::Enter))));

        let released = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert!(translate(released).is_none());

        assert!(translate(Event::Resize(80, 24)).is_none());
    }
}
