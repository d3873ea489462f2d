use serde::Serialize;

use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading};

use super::inline::{self, InlineNode, push_text};

/// Heading depth supported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    Paragraph,
    Heading { level: HeadingLevel },
    BlockQuote,
    /// Raw zone: content is never inline-transformed.
    CodeFence,
}

impl BlockKind {
    /// Markup element name used when serializing.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading { level } => match level {
                HeadingLevel::H1 => "h1",
                HeadingLevel::H2 => "h2",
                HeadingLevel::H3 => "h3",
            },
            BlockKind::BlockQuote => "blockquote",
            BlockKind::CodeFence => "pre",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "p" | "div" => BlockKind::Paragraph,
            "h1" => BlockKind::Heading {
                level: HeadingLevel::H1,
            },
            "h2" => BlockKind::Heading {
                level: HeadingLevel::H2,
            },
            "h3" => BlockKind::Heading {
                level: HeadingLevel::H3,
            },
            "blockquote" => BlockKind::BlockQuote,
            "pre" => BlockKind::CodeFence,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether inline markers inside this block are rewritten into spans.
    pub fn takes_inline(self) -> bool {
        !matches!(self, BlockKind::CodeFence)
    }
}

/// A classified block with its inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub content: Vec<InlineNode>,
}

impl Block {
    /// Creates a block holding a single run of untransformed text.
    pub fn new(kind: BlockKind, text: &str) -> Self {
        let mut content = vec![];
        push_text(&mut content, text);
        Self { kind, content }
    }

    pub fn paragraph(text: &str) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    pub fn heading(level: HeadingLevel, text: &str) -> Self {
        Self::new(BlockKind::Heading { level }, text)
    }

    pub fn block_quote(text: &str) -> Self {
        Self::new(BlockKind::BlockQuote, text)
    }

    pub fn code_fence(text: &str) -> Self {
        Self::new(BlockKind::CodeFence, text)
    }

    /// Visible text with all markers removed.
    pub fn plain_text(&self) -> String {
        inline::plain_text(&self.content)
    }

    /// Editable source for this block: block prefix plus inline content with
    /// delimiters restored.
    ///
    /// A code fence renders as the fence line, followed by its content on the
    /// next line when it has any.
    pub fn source_text(&self) -> String {
        let body = inline::source_text(&self.content);
        match self.kind {
            BlockKind::Paragraph => body,
            BlockKind::Heading { level } => format!("{}{body}", Heading::prefix(level)),
            BlockKind::BlockQuote => format!("{}{body}", BlockQuote::PREFIX),
            BlockKind::CodeFence if body.is_empty() => CodeFence::FENCE.to_string(),
            BlockKind::CodeFence => format!("{}\n{body}", CodeFence::FENCE),
        }
    }
}
