//! Formatting commands from the toolbar, palette and keyboard shortcuts.
//!
//! Commands edit a line of source text; the next pipeline pass turns the
//! inserted markers into structure. Inline commands wrap a byte range in a
//! delimiter pair, block commands replace the line's block prefix.

use std::ops::Range;
use std::str::FromStr;

use crate::model::Style;
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCommand {
    Bold,
    Italic,
    Heading,
    Code,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown style command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for StyleCommand {
    type Err = UnknownCommand;

    /// Parses toolbar and palette action names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" => Ok(StyleCommand::Bold),
            "italic" => Ok(StyleCommand::Italic),
            "heading" => Ok(StyleCommand::Heading),
            "code" => Ok(StyleCommand::Code),
            "quote" | "blockquote" => Ok(StyleCommand::Quote),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// Result of applying a command to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub text: String,
    /// Byte offset of the caret in `text`.
    pub cursor: usize,
}

impl StyleCommand {
    /// Palette order.
    pub const ALL: [StyleCommand; 5] = [
        StyleCommand::Heading,
        StyleCommand::Bold,
        StyleCommand::Italic,
        StyleCommand::Quote,
        StyleCommand::Code,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StyleCommand::Bold => "Bold",
            StyleCommand::Italic => "Italic",
            StyleCommand::Heading => "Heading",
            StyleCommand::Code => "Code",
            StyleCommand::Quote => "Quote",
        }
    }

    /// Applies the command to `line`, where `range` is the selection (or an
    /// empty range at the caret).
    ///
    /// `Code` on a blank line starts a code fence; elsewhere it wraps the
    /// selection in backticks.
    pub fn apply(self, line: &str, range: Range<usize>) -> LineEdit {
        let range = clamp_range(line, range);
        match self {
            StyleCommand::Bold => wrap(line, range, Style::Bold.delimiter()),
            StyleCommand::Italic => wrap(line, range, Style::Italic.delimiter()),
            StyleCommand::Code if line.trim().is_empty() => LineEdit {
                text: CodeFence::FENCE.to_string(),
                cursor: CodeFence::FENCE.len(),
            },
            StyleCommand::Code => wrap(line, range, Style::Code.delimiter()),
            StyleCommand::Heading => set_prefix(line, range.end, Heading::H1),
            StyleCommand::Quote => set_prefix(line, range.end, BlockQuote::PREFIX),
        }
    }
}

/// Range of the word under `cursor`: the run of non-whitespace around it.
///
/// Empty when the caret sits between two whitespace characters.
pub fn word_range(line: &str, cursor: usize) -> Range<usize> {
    let cursor = floor_char_boundary(line, cursor.min(line.len()));
    let start = line[..cursor]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let end = line[cursor..]
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map_or(line.len(), |(i, _)| cursor + i);
    start..end
}

fn wrap(line: &str, range: Range<usize>, delim: &str) -> LineEdit {
    let mut text = String::with_capacity(line.len() + 2 * delim.len());
    text.push_str(&line[..range.start]);
    text.push_str(delim);
    text.push_str(&line[range.clone()]);
    text.push_str(delim);
    text.push_str(&line[range.end..]);
    let cursor = if range.is_empty() {
        range.start + delim.len()
    } else {
        range.end + 2 * delim.len()
    };
    LineEdit { text, cursor }
}

/// Replaces any heading or quote prefix of `line` with `prefix`.
fn set_prefix(line: &str, cursor: usize, prefix: &str) -> LineEdit {
    let body = Heading::strip_prefix(line)
        .map(|(_, rest)| rest)
        .or_else(|| BlockQuote::strip_prefix(line))
        .unwrap_or(line);
    let old_prefix = line.len() - body.len();
    let cursor = cursor.saturating_sub(old_prefix) + prefix.len();
    LineEdit {
        text: format!("{prefix}{body}"),
        cursor,
    }
}

fn clamp_range(line: &str, range: Range<usize>) -> Range<usize> {
    let end = floor_char_boundary(line, range.end.min(line.len()));
    let start = floor_char_boundary(line, range.start.min(end));
    start..end
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
