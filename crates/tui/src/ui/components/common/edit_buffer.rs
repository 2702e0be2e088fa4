//! Reusable UTF-8 safe edit buffer with cursor management.
//!
//! Extracted editing primitives for single-line field widgets. The number
//! input loads this buffer when a field gains focus and drains it on blur;
//! the buffer itself knows nothing about formatting.

#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    /// The underlying text
    text: String,
    /// Cursor byte index into `text` (always on a UTF-8 boundary)
    cursor: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    // ----- Getters -----
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // ----- Setters -----

    /// Replace the buffer contents and park the cursor at the end.
    pub fn load<S: Into<String>>(&mut self, s: S) {
        self.text = s.into();
        self.cursor = self.text.len();
    }

    /// Take the buffer contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.text[..self.cursor]
            .chars()
            .last()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.text[..self.cursor]
            .chars()
            .last()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        let start = self.cursor - prev;
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let len = self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        self.text.drain(self.cursor..self.cursor + len);
    }
}
