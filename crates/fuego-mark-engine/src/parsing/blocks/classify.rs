use crate::model::{BlockKind, HeadingLevel};

use super::kinds::{BlockQuote, CodeFence, Heading, Paragraph};

/// Outcome of classifying one raw content unit.
///
/// Borrowed from the unit's text; the builder turns it into an owned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass<'a> {
    Heading { level: HeadingLevel, content: &'a str },
    BlockQuote { content: &'a str },
    CodeFence,
    Paragraph { content: &'a str },
    /// Empty or whitespace-only; produces no block.
    Empty,
}

impl<'a> UnitClass<'a> {
    /// Block kind and content text, or `None` for [`UnitClass::Empty`].
    pub fn into_parts(self) -> Option<(BlockKind, &'a str)> {
        match self {
            UnitClass::Heading { level, content } => Some((BlockKind::Heading { level }, content)),
            UnitClass::BlockQuote { content } => Some((BlockKind::BlockQuote, content)),
            UnitClass::CodeFence => Some((BlockKind::CodeFence, "")),
            UnitClass::Paragraph { content } => Some((BlockKind::Paragraph, content)),
            UnitClass::Empty => None,
        }
    }
}

/// Classifies raw unit text into a block kind.
///
/// Rules are tried in a fixed priority order and the first match wins:
/// headings (longest prefix first), blockquote, code fence, paragraph.
/// Classification is total: every input maps to exactly one class.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockClassifier;

impl BlockClassifier {
    pub fn classify<'a>(&self, text: &'a str) -> UnitClass<'a> {
        if let Some((level, content)) = Heading::strip_prefix(text) {
            return UnitClass::Heading { level, content };
        }
        if let Some(content) = BlockQuote::strip_prefix(text) {
            return UnitClass::BlockQuote { content };
        }
        if CodeFence::is_fence(text) {
            return UnitClass::CodeFence;
        }
        if Paragraph::accepts(text) {
            return UnitClass::Paragraph { content: text };
        }
        UnitClass::Empty
    }
}
