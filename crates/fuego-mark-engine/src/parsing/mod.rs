pub mod blocks;
pub mod inline;

use crate::model::{Block, ContentUnit, Document};

use blocks::BlockBuilder;
use inline::transform_block;

/// Runs one full pass over a document: classify every unit, then transform
/// the inline content of every resulting block.
///
/// The result holds only [`ContentUnit::Block`] units. Blocks that were
/// already classified pass through classification untouched and are
/// re-transformed, which is a no-op for content transformed before.
///
/// The whole document is rescanned on every call; cost grows linearly with
/// document size.
pub fn on_content_changed(document: Document) -> Document {
    let units = document.units.len();
    let blocks = transform_blocks(classify_units(document.units));
    log::debug!("pipeline pass: {units} units -> {} blocks", blocks.len());
    Document::new(blocks.into_iter().map(ContentUnit::Block).collect())
}

/// Classifies units into blocks, dropping empty ones.
pub fn classify_units(units: Vec<ContentUnit>) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for unit in units {
        builder.push(unit);
    }
    if builder.discarded() > 0 {
        log::trace!("discarded {} empty units", builder.discarded());
    }
    builder.finish()
}

/// Applies the inline transformer to every block that accepts inline markup.
pub fn transform_blocks(blocks: Vec<Block>) -> Vec<Block> {
    blocks.into_iter().map(transform_block).collect()
}

#[cfg(test)]
mod tests;
