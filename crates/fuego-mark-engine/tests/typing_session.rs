//! Drives a session the way a host does: one pipeline pass per keystroke.

use fuego_mark_engine::{
    Block, BlockKind, ContentUnit, Document, EditorSession, HeadingLevel, InlineNode,
    MemoryStore, Style, StyleCommand, from_markup, on_content_changed, to_markup, word_range,
};
use pretty_assertions::assert_eq;

/// Types `text` one character at a time into a single-line buffer and
/// returns the markup persisted after every keystroke.
fn type_line(session: &mut EditorSession<MemoryStore>, text: &str) -> Vec<String> {
    let mut buffer = String::new();
    let mut persisted = vec![];
    for c in text.chars() {
        buffer.push(c);
        session
            .on_content_changed(vec![ContentUnit::raw(buffer.clone())])
            .unwrap();
        persisted.push(session.markup().to_string());
    }
    persisted
}

#[test]
fn heading_forms_as_prefix_is_typed() {
    let mut session = EditorSession::open(MemoryStore::new(), "doc").unwrap();
    let steps = type_line(&mut session, "### Hi");

    assert_eq!(
        steps,
        vec![
            "<p>#</p>",
            "<p>##</p>",
            "<p>###</p>",
            "<h3></h3>",
            "<h3>H</h3>",
            "<h3>Hi</h3>",
        ]
    );
}

#[test]
fn bold_appears_when_closing_delimiter_is_typed() {
    let mut session = EditorSession::open(MemoryStore::new(), "doc").unwrap();
    let steps = type_line(&mut session, "**a**");

    assert_eq!(steps[3], "<p>**a*</p>");
    assert_eq!(steps[4], "<p><strong>a</strong></p>");
    assert_eq!(session.store().writes(), 5);
}

#[test]
fn reload_preserves_document_exactly() {
    let mut session = EditorSession::open(MemoryStore::new(), "doc").unwrap();
    session
        .on_content_changed(Document::from_lines("# T\n_a_ **b** `c`\n> q\n```").units)
        .unwrap();
    let saved = session.markup().to_string();

    let store = MemoryStore::with_value("doc", &saved);
    let reopened = EditorSession::open(store, "doc").unwrap();
    assert_eq!(reopened.markup(), saved);

    // A further pass over the reloaded blocks changes nothing.
    let again = on_content_changed(from_markup(&saved));
    assert_eq!(to_markup(&again), saved);
}

#[test]
fn host_can_reedit_a_loaded_block_through_source_text() {
    let doc = on_content_changed(Document::from_lines("## old **title**"));
    let mut lines = doc.source_lines();
    assert_eq!(lines, vec!["## old **title**"]);

    // Promote to a level 1 heading from the palette, then italicise a word.
    let edit = StyleCommand::Heading.apply(&lines[0], 0..0);
    lines[0] = edit.text;
    let word = word_range(&lines[0], 3);
    lines[0] = StyleCommand::Italic.apply(&lines[0], word).text;

    let doc = on_content_changed(Document::from_lines(&lines.join("\n")));
    let block = doc.blocks().next().unwrap();
    assert_eq!(
        block,
        &Block {
            kind: BlockKind::Heading {
                level: HeadingLevel::H1
            },
            content: vec![
                InlineNode::span(Style::Italic, vec![InlineNode::text("old")]),
                InlineNode::text(" "),
                InlineNode::span(Style::Bold, vec![InlineNode::text("title")]),
            ],
        }
    );
}
