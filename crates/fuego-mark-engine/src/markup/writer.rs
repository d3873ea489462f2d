use html_escape::encode_text;

use crate::model::{Block, ContentUnit, Document, InlineNode};

/// Serializes a document to its persisted markup form.
///
/// One element per unit, joined with newlines. Raw units are written as
/// escaped text.
pub fn to_markup(doc: &Document) -> String {
    let mut out = String::new();
    for (i, unit) in doc.units.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match unit {
            ContentUnit::Raw(text) => out.push_str(&encode_text(text)),
            ContentUnit::Block(block) => write_block(block, &mut out),
        }
    }
    out
}

/// Serializes a single block element.
pub fn block_markup(block: &Block) -> String {
    let mut out = String::new();
    write_block(block, &mut out);
    out
}

fn write_block(block: &Block, out: &mut String) {
    let tag = block.kind.tag();
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_inline(&block.content, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_inline(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(&encode_text(text)),
            InlineNode::Span { style, children } => {
                let tag = style.tag();
                out.push('<');
                out.push_str(tag);
                out.push('>');
                write_inline(children, out);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
