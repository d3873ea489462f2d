use crate::model::{Block, BlockKind, ContentUnit};

use super::classify::BlockClassifier;

/// Accumulates classified blocks from a stream of content units.
///
/// Raw units are classified and replaced by a fresh block; units that are
/// already blocks pass through unchanged. Empty units are dropped, and so
/// are paragraphs whose source is only whitespace.
pub struct BlockBuilder {
    classifier: BlockClassifier,
    out: Vec<Block>,
    discarded: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: BlockClassifier,
            out: vec![],
            discarded: 0,
        }
    }

    pub fn push(&mut self, unit: ContentUnit) {
        match unit {
            ContentUnit::Block(block) if is_blank_paragraph(&block) => self.discarded += 1,
            ContentUnit::Block(block) => self.out.push(block),
            ContentUnit::Raw(text) => match self.classifier.classify(&text).into_parts() {
                Some((kind, content)) => self.out.push(Block::new(kind, content)),
                None => self.discarded += 1,
            },
        }
    }

    /// Number of empty units dropped so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }
}

/// A paragraph no raw line could classify to. Headings and quotes keep an
/// empty body, since `"# "` and `"> "` classify to them.
fn is_blank_paragraph(block: &Block) -> bool {
    block.kind == BlockKind::Paragraph && block.source_text().trim().is_empty()
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_raw_units_in_order() {
        let mut b = BlockBuilder::new();
        for line in ["# Title", "", "body", "> quote", "```", "   "] {
            b.push(ContentUnit::raw(line));
        }
        assert_eq!(b.discarded(), 2);
        assert_eq!(
            b.finish(),
            vec![
                Block::heading(HeadingLevel::H1, "Title"),
                Block::paragraph("body"),
                Block::block_quote("quote"),
                Block::code_fence(""),
            ]
        );
    }

    #[test]
    fn existing_blocks_pass_through() {
        // A paragraph whose text looks like a heading stays a paragraph.
        let kept = Block::paragraph("# not reclassified");
        let mut b = BlockBuilder::new();
        b.push(ContentUnit::Block(kept.clone()));
        assert_eq!(b.finish(), vec![kept]);
    }

    #[test]
    fn blank_paragraphs_are_dropped() {
        let mut b = BlockBuilder::new();
        b.push(ContentUnit::Block(Block::paragraph("\n")));
        b.push(ContentUnit::Block(Block::paragraph("   ")));
        b.push(ContentUnit::Block(Block {
            kind: BlockKind::Paragraph,
            content: vec![],
        }));
        b.push(ContentUnit::Block(Block::heading(HeadingLevel::H1, "")));
        b.push(ContentUnit::Block(Block::code_fence("")));

        assert_eq!(b.discarded(), 3);
        assert_eq!(
            b.finish(),
            vec![Block::heading(HeadingLevel::H1, ""), Block::code_fence("")]
        );
    }
}
