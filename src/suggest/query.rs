//! Editable single-line query buffer.
//!
//! Cursor positions are char indices so edits stay on UTF-8 boundaries.

use serde::{Deserialize, Serialize};

/// The user's raw input plus caret position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBuffer {
    text: String,
    cursor: usize,
}

impl QueryBuffer {
    /// Current query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text and place the caret at the end.
    ///
    /// Returns `true` when the text changed.
    pub fn set(&mut self, text: &str) -> bool {
        let changed = self.text != text;
        self.text = text.to_string();
        self.cursor = char_count(&self.text);
        changed
    }

    /// Insert one char at the caret.
    pub fn insert(&mut self, ch: char) -> bool {
        let byte_idx = byte_index_at_char(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
        true
    }

    /// Delete the char before the caret.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        delete_char_range(&mut self.text, self.cursor - 1, self.cursor);
        self.cursor -= 1;
        true
    }

    /// Delete the char under the caret.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= char_count(&self.text) {
            return false;
        }
        delete_char_range(&mut self.text, self.cursor, self.cursor + 1);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < char_count(&self.text) {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = char_count(&self.text);
    }

    /// Emacs-style kill-to-start.
    pub fn kill_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        delete_char_range(&mut self.text, 0, self.cursor);
        self.cursor = 0;
        true
    }

    /// Emacs-style kill-to-end.
    pub fn kill_to_end(&mut self) -> bool {
        let end = char_count(&self.text);
        if self.cursor >= end {
            return false;
        }
        delete_char_range(&mut self.text, self.cursor, end);
        true
    }

    /// Emacs-style backward-kill-word.
    pub fn kill_word_back(&mut self) -> bool {
        let start = previous_word_start(&self.text, self.cursor);
        if start >= self.cursor {
            return false;
        }
        delete_char_range(&mut self.text, start, self.cursor);
        self.cursor = start;
        true
    }
}

/// Delete a char range represented in char indices.
fn delete_char_range(buffer: &mut String, start_char: usize, end_char: usize) {
    if start_char >= end_char {
        return;
    }
    let start = byte_index_at_char(buffer, start_char);
    let end = byte_index_at_char(buffer, end_char);
    buffer.replace_range(start..end, "");
}

/// Return the char index where the previous word starts.
fn previous_word_start(buffer: &str, cursor: usize) -> usize {
    let chars: Vec<char> = buffer.chars().take(cursor).collect();
    let mut idx = chars.len();
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Return total char count for a UTF-8 string.
pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}
