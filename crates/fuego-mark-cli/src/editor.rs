use std::ops::Range;

use fuego_mark_engine::{ContentUnit, StyleCommand, word_range};

/// Line-oriented text buffer. Each line is one content unit.
///
/// The caret is a `(row, col)` pair where `col` is a byte offset that always
/// sits on a char boundary. A selection spans from `anchor` to the caret and
/// never leaves the caret's line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
    anchor: Option<usize>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            anchor: None,
        }
    }
}

impl LineBuffer {
    /// Seeds the buffer from source lines, caret at the end of the last line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::default();
        }
        let row = lines.len() - 1;
        let col = lines[row].len();
        Self {
            lines,
            row,
            col,
            anchor: None,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Selected byte range on the caret's line, if any.
    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor.filter(|&a| a != self.col)?;
        Some(anchor.min(self.col)..anchor.max(self.col))
    }

    /// Caret column in characters, for placing the terminal cursor.
    pub fn cursor_char_col(&self) -> usize {
        self.current()[..self.col].chars().count()
    }

    /// Raw units for one pipeline pass.
    pub fn units(&self) -> Vec<ContentUnit> {
        self.lines.iter().cloned().map(ContentUnit::Raw).collect()
    }

    fn current(&self) -> &str {
        &self.lines[self.row]
    }

    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        let col = self.col;
        self.lines[self.row].insert(col, c);
        self.col += c.len_utf8();
    }

    /// Splits the current line at the caret: a new paragraph.
    pub fn newline(&mut self) {
        self.delete_selection();
        let col = self.col;
        let rest = self.lines[self.row].split_off(col);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.col > 0 {
            let prev = self.prev_boundary();
            let col = self.col;
            self.lines[self.row].replace_range(prev..col, "");
            self.col = prev;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn delete(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.col < self.current().len() {
            let next = self.next_boundary();
            let col = self.col;
            self.lines[self.row].replace_range(col..next, "");
        } else if self.row + 1 < self.lines.len() {
            let line = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn left(&mut self) {
        self.anchor = None;
        if self.col > 0 {
            self.col = self.prev_boundary();
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.current().len();
        }
    }

    pub fn right(&mut self) {
        self.anchor = None;
        if self.col < self.current().len() {
            self.col = self.next_boundary();
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn up(&mut self) {
        self.anchor = None;
        if self.row > 0 {
            self.row -= 1;
            self.snap_col();
        }
    }

    pub fn down(&mut self) {
        self.anchor = None;
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.snap_col();
        }
    }

    pub fn home(&mut self) {
        self.anchor = None;
        self.col = 0;
    }

    pub fn end(&mut self) {
        self.anchor = None;
        self.col = self.current().len();
    }

    /// Extends the selection one char left, stopping at the line start.
    pub fn select_left(&mut self) {
        self.anchor.get_or_insert(self.col);
        self.col = self.prev_boundary();
    }

    /// Extends the selection one char right, stopping at the line end.
    pub fn select_right(&mut self) {
        self.anchor.get_or_insert(self.col);
        self.col = self.next_boundary();
    }

    pub fn select_home(&mut self) {
        self.anchor.get_or_insert(self.col);
        self.col = 0;
    }

    pub fn select_end(&mut self) {
        self.anchor.get_or_insert(self.col);
        self.col = self.current().len();
    }

    /// Applies a formatting command to the selection, else to the word under
    /// the caret. Block commands act on the whole line either way.
    pub fn apply(&mut self, command: StyleCommand) {
        let range = self
            .selection()
            .unwrap_or_else(|| word_range(self.current(), self.col));
        self.anchor = None;
        let edit = command.apply(self.current(), range);
        self.lines[self.row] = edit.text;
        self.col = edit.cursor;
        self.snap_col();
    }

    /// Removes the selected text, if any, leaving the caret at its start.
    fn delete_selection(&mut self) -> bool {
        let selection = self.selection();
        self.anchor = None;
        let Some(range) = selection else {
            return false;
        };
        self.lines[self.row].replace_range(range.clone(), "");
        self.col = range.start;
        true
    }

    fn prev_boundary(&self) -> usize {
        self.current()[..self.col]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.current()[self.col..]
            .chars()
            .next()
            .map_or(self.col, |c| self.col + c.len_utf8())
    }

    fn snap_col(&mut self) {
        let line = self.current();
        let mut col = self.col.min(line.len());
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        self.col = col;
    }
}
