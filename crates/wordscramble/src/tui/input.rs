//! Key mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a character to the input line.
    Insert(char),
    /// Delete the last character of the input line.
    Backspace,
    /// Submit the input line, or dismiss an open alert.
    Submit,
    /// Draw a new root word and reset the round.
    NewRound,
    /// Dismiss an open alert, or quit when none is shown.
    Cancel,
    /// Quit immediately.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key event to an [`InputAction`].
pub fn map_key(key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => InputAction::Quit,
        KeyCode::Char('n') if ctrl => InputAction::NewRound,
        KeyCode::Char(_) if ctrl => InputAction::Ignore,
        KeyCode::Char(c) => InputAction::Insert(c),
        KeyCode::Backspace => InputAction::Backspace,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Esc => InputAction::Cancel,
        _ => InputAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_plain_characters_insert() {
        assert_eq!(map_key(key(KeyCode::Char('w'))), InputAction::Insert('w'));
        assert_eq!(map_key(key(KeyCode::Char(' '))), InputAction::Insert(' '));
    }

    #[test]
    fn test_shifted_characters_insert() {
        let event = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(map_key(event), InputAction::Insert('W'));
    }

    #[test]
    fn test_control_bindings() {
        assert_eq!(map_key(ctrl('n')), InputAction::NewRound);
        assert_eq!(map_key(ctrl('c')), InputAction::Quit);
        assert_eq!(map_key(ctrl('x')), InputAction::Ignore);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), InputAction::Submit);
        assert_eq!(map_key(key(KeyCode::Backspace)), InputAction::Backspace);
        assert_eq!(map_key(key(KeyCode::Esc)), InputAction::Cancel);
        assert_eq!(map_key(key(KeyCode::Tab)), InputAction::Ignore);
    }
}
