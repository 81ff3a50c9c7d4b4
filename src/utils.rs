use unicode_width::UnicodeWidthStr;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Single-line editable text with a cursor kept on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Byte offset of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_truncate_string_short() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_long() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.chars().count(), 20);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("éééééééééé", 6), "ééé...");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = typed("Helo");
        input.move_left();
        input.insert('l');
        assert_eq!(input.as_str(), "Hello");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_at_cursor_and_start() {
        let mut input = typed("Hello World");
        for _ in 0..6 {
            input.move_left();
        }
        input.backspace();
        assert_eq!(input.as_str(), "Hell World");

        for _ in 0..20 {
            input.move_left();
        }
        input.backspace();
        assert_eq!(input.as_str(), "Hell World");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = typed("Hi");
        for _ in 0..5 {
            input.move_right();
        }
        assert_eq!(input.cursor(), 2);
        input.clear();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        assert!(input.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("café");
        assert_eq!(input.cursor_column(), 4);
        input.backspace();
        assert_eq!(input.as_str(), "caf");
        input.insert('é');
        input.move_left();
        assert_eq!(input.cursor(), 3);
    }
}
