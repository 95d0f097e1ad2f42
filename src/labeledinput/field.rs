//! Single-line editing buffer.
//!
//! Text is stored as grapheme clusters so that cursor movement and deletion
//! never split a user-perceived character. Incoming text is sanitized first:
//! newlines and tabs become spaces and other control characters are dropped.

use crate::runeutil::Sanitizer;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    value: Vec<String>,
    pos: usize,
    char_limit: usize,
    sanitizer: Sanitizer,
}

fn graphemes(s: &str) -> Vec<String> {
    s.graphemes(true).map(str::to_string).collect()
}

fn is_space(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

impl Field {
    /// An empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of graphemes. Zero means no limit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
        if limit > 0 && self.value.len() > limit {
            self.value.truncate(limit);
            self.pos = self.pos.min(limit);
        }
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.concat()
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of graphemes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Cursor position in graphemes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.value.iter().map(|g| g.width()).sum()
    }

    /// The graphemes before the cursor, the one under it, and those after.
    pub fn split_at_cursor(&self) -> (String, Option<&str>, String) {
        let before = self.value[..self.pos].concat();
        let under = self.value.get(self.pos).map(String::as_str);
        let after = if self.pos < self.value.len() {
            self.value[self.pos + 1..].concat()
        } else {
            String::new()
        };
        (before, under, after)
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut value = graphemes(&self.sanitizer.sanitize_str(s));
        if self.char_limit > 0 {
            value.truncate(self.char_limit);
        }
        self.value = value;
        self.pos = self.value.len();
    }

    /// Clears the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Inserts text at the cursor, honoring the character limit.
    /// Returns whether anything was inserted.
    pub fn insert(&mut self, s: &str) -> bool {
        let mut incoming = graphemes(&self.sanitizer.sanitize_str(s));
        if self.char_limit > 0 {
            let space = self.char_limit.saturating_sub(self.value.len());
            incoming.truncate(space);
        }
        if incoming.is_empty() {
            return false;
        }
        let n = incoming.len();
        self.value.splice(self.pos..self.pos, incoming);
        self.pos += n;
        true
    }

    /// Deletes the grapheme before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        self.value.remove(self.pos);
        true
    }

    /// Deletes the grapheme under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    /// Deletes everything before the cursor.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.drain(..self.pos);
        self.pos = 0;
        true
    }

    /// Deletes everything after the cursor.
    pub fn delete_after_cursor(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.truncate(self.pos);
        true
    }

    fn word_start_before(&self) -> usize {
        let mut i = self.pos;
        while i > 0 && is_space(&self.value[i - 1]) {
            i -= 1;
        }
        while i > 0 && !is_space(&self.value[i - 1]) {
            i -= 1;
        }
        i
    }

    fn word_end_after(&self) -> usize {
        let mut i = self.pos;
        while i < self.value.len() && is_space(&self.value[i]) {
            i += 1;
        }
        while i < self.value.len() && !is_space(&self.value[i]) {
            i += 1;
        }
        i
    }

    /// Deletes the word before the cursor.
    pub fn delete_word_backward(&mut self) -> bool {
        let start = self.word_start_before();
        if start == self.pos {
            return false;
        }
        self.value.drain(start..self.pos);
        self.pos = start;
        true
    }

    /// Deletes the word after the cursor.
    pub fn delete_word_forward(&mut self) -> bool {
        let end = self.word_end_after();
        if end == self.pos {
            return false;
        }
        self.value.drain(self.pos..end);
        true
    }

    /// Moves one grapheme left.
    pub fn move_left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Moves one grapheme right.
    pub fn move_right(&mut self) {
        self.set_cursor(self.pos + 1);
    }

    /// Moves to the start of the previous word.
    pub fn word_backward(&mut self) {
        self.pos = self.word_start_before();
    }

    /// Moves past the end of the next word.
    pub fn word_forward(&mut self) {
        self.pos = self.word_end_after();
    }

    /// Moves to the start.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves to the end.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }
}
