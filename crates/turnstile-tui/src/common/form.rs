//! Single-line text field with cursor handling.
//!
//! Enough for form inputs and the search box; cursor positions are char
//! indices so multi-byte input behaves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An editable single-line text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in chars (0..=len).
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field prefilled with `value`, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in chars, for rendering.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Leave modified keys (shortcuts) to the caller; shift is typing.
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                true
            }
            _ => false,
        }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_cursor_movement() {
        let mut field = TextField::new();
        for c in "hq".chars() {
            field.handle_key(press(KeyCode::Char(c)));
        }
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Char('x')));
        assert_eq!(field.value(), "hxq");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut field = TextField::with_value("caf\u{e9}");
        field.handle_key(press(KeyCode::Backspace));
        assert_eq!(field.value(), "caf");

        field.handle_key(press(KeyCode::Home));
        field.handle_key(press(KeyCode::Delete));
        assert_eq!(field.value(), "af");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_modified_keys_are_not_consumed() {
        let mut field = TextField::new();
        let consumed = field.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!consumed);
        assert!(field.is_empty());
    }
}
