use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Outcome of feeding a key into a single-line edit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEditResult {
    Handled,
    NotHandled,
}

/// Apply a key event to a single-line edit buffer (`buffer`, byte `cursor`).
/// Covers character input and cursor movement; Enter/Esc are left to the
/// caller, which decides what submit and cancel mean.
pub fn apply_line_edit(buffer: &mut String, cursor: &mut usize, key: KeyEvent) -> LineEditResult {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
            LineEditResult::Handled
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                buffer.replace_range(prev..*cursor, "");
                *cursor = prev;
            }
            LineEditResult::Handled
        }
        (KeyModifiers::NONE, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                buffer.replace_range(*cursor..next, "");
            }
            LineEditResult::Handled
        }
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                *cursor = prev;
            }
            LineEditResult::Handled
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                *cursor = next;
            }
            LineEditResult::Handled
        }
        (KeyModifiers::NONE, KeyCode::Home) => {
            *cursor = 0;
            LineEditResult::Handled
        }
        (KeyModifiers::NONE, KeyCode::End) => {
            *cursor = buffer.len();
            LineEditResult::Handled
        }
        // Ctrl-U: clear the line
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            buffer.clear();
            *cursor = 0;
            LineEditResult::Handled
        }
        _ => LineEditResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut buffer = "Stck".to_string();
        let mut cursor = 2;
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Char('ü')));
        assert_eq!(buffer, "Stück");
        assert_eq!(cursor, 2 + 'ü'.len_utf8());
    }

    #[test]
    fn backspace_removes_multibyte_grapheme() {
        let mut buffer = "Stück".to_string();
        let mut cursor = buffer.len();
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Backspace));
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Backspace));
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Backspace));
        assert_eq!(buffer, "St");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn movement_keys_stay_on_boundaries() {
        let mut buffer = "Stück".to_string();
        let mut cursor = buffer.len();
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Home));
        assert_eq!(cursor, 0);
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Right));
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Right));
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Right));
        assert_eq!(cursor, 2 + 'ü'.len_utf8());
        apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::End));
        assert_eq!(cursor, buffer.len());
    }

    #[test]
    fn ctrl_u_clears() {
        let mut buffer = "weg damit".to_string();
        let mut cursor = 3;
        apply_line_edit(
            &mut buffer,
            &mut cursor,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(buffer, "");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn enter_is_not_handled_here() {
        let mut buffer = String::new();
        let mut cursor = 0;
        let result = apply_line_edit(&mut buffer, &mut cursor, press(KeyCode::Enter));
        assert_eq!(result, LineEditResult::NotHandled);
    }
}
