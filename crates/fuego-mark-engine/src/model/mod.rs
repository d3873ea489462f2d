//! # Document Model
//!
//! In-memory tree the pipeline transforms. The host renders it and extracts
//! source text from it for editing; nothing in the core touches host widgets.
//!
//! - **`block`**: `Block`, `BlockKind`, `HeadingLevel`
//! - **`inline`**: `InlineNode`, `Style`
//!
//! A [`Document`] is an ordered list of [`ContentUnit`]s. After a pipeline
//! pass every unit is a [`ContentUnit::Block`].

pub mod block;
pub mod inline;

use serde::Serialize;

pub use block::{Block, BlockKind, HeadingLevel};
pub use inline::{InlineNode, Style};

/// One top-level piece of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContentUnit {
    /// Text awaiting classification.
    Raw(String),
    /// Already classified content; passes through classification untouched.
    Block(Block),
}

impl ContentUnit {
    pub fn raw(text: impl Into<String>) -> Self {
        ContentUnit::Raw(text.into())
    }

    /// Editable source text of this unit.
    pub fn source_text(&self) -> String {
        match self {
            ContentUnit::Raw(text) => text.clone(),
            ContentUnit::Block(block) => block.source_text(),
        }
    }
}

impl From<Block> for ContentUnit {
    fn from(block: Block) -> Self {
        ContentUnit::Block(block)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub units: Vec<ContentUnit>,
}

impl Document {
    pub fn new(units: Vec<ContentUnit>) -> Self {
        Self { units }
    }

    /// Builds a document of raw units, one per line of `text`.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines().map(ContentUnit::raw).collect())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Classified blocks in document order; raw units are skipped.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.units.iter().filter_map(|u| match u {
            ContentUnit::Block(b) => Some(b),
            ContentUnit::Raw(_) => None,
        })
    }

    /// True when the document has no visible text at all.
    pub fn is_blank(&self) -> bool {
        self.units.iter().all(|u| match u {
            ContentUnit::Raw(text) => text.trim().is_empty(),
            ContentUnit::Block(b) => b.plain_text().trim().is_empty(),
        })
    }

    /// Editable source lines, one entry per line of every unit.
    pub fn source_lines(&self) -> Vec<String> {
        self.units
            .iter()
            .flat_map(|u| {
                u.source_text()
                    .split('\n')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
