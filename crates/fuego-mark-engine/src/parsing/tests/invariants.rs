use crate::model::{BlockKind, ContentUnit, Document, InlineNode};

/// Asserts the structural invariants every pipeline output must hold.
pub fn check(doc: &Document) {
    for unit in &doc.units {
        let ContentUnit::Block(block) = unit else {
            panic!("unclassified unit survived a pass: {unit:?}");
        };
        if block.kind == BlockKind::Paragraph {
            assert!(
                !block.source_text().trim().is_empty(),
                "blank paragraph survived a pass"
            );
        }
        check_inline(&block.content);
    }
}

fn check_inline(nodes: &[InlineNode]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [InlineNode::Text(_), InlineNode::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
    for node in nodes {
        match node {
            InlineNode::Text(t) => assert!(!t.is_empty(), "empty text node"),
            InlineNode::Span { children, .. } => check_inline(children),
        }
    }
}
