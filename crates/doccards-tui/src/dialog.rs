use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use doccards_core::TextBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Feed one key into a text field. `Alt+Enter` inserts a line break when
/// `multiline` is set; plain `Enter` always confirms.
pub fn handle_text_input(buffer: &mut TextBuffer, key: KeyEvent, multiline: bool) -> DialogAction {
    match key.code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter if multiline && key.modifiers.contains(KeyModifiers::ALT) => {
            buffer.insert_newline();
            DialogAction::None
        }
        KeyCode::Enter => DialogAction::Confirm,
        KeyCode::Char(c) => {
            buffer.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            buffer.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            buffer.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            buffer.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            buffer.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            buffer.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            buffer.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

/// Yes/no keys for a confirmation dialog. `None` means the key is ignored.
pub fn confirm_answer(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_confirm() {
        let mut buffer = TextBuffer::new();
        for c in "ok".chars() {
            assert_eq!(
                handle_text_input(&mut buffer, key(KeyCode::Char(c)), false),
                DialogAction::None
            );
        }
        assert_eq!(
            handle_text_input(&mut buffer, key(KeyCode::Enter), false),
            DialogAction::Confirm
        );
        assert_eq!(buffer.as_str(), "ok");
    }

    #[test]
    fn test_alt_enter_inserts_newline_when_multiline() {
        let mut buffer = TextBuffer::from_text("a");
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);

        assert_eq!(
            handle_text_input(&mut buffer, alt_enter, true),
            DialogAction::None
        );
        assert_eq!(buffer.as_str(), "a\n");

        assert_eq!(
            handle_text_input(&mut buffer, alt_enter, false),
            DialogAction::Confirm
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut buffer = TextBuffer::from_text("draft");
        assert_eq!(
            handle_text_input(&mut buffer, key(KeyCode::Esc), true),
            DialogAction::Cancel
        );
    }

    #[test]
    fn test_confirm_answer() {
        assert_eq!(confirm_answer(key(KeyCode::Char('y'))), Some(true));
        assert_eq!(confirm_answer(key(KeyCode::Esc)), Some(false));
        assert_eq!(confirm_answer(key(KeyCode::Char('x'))), None);
    }
}
