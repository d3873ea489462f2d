//! Tests for the full classify-then-transform pass.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::markup::{from_markup, to_markup};
use crate::model::{Block, BlockKind, ContentUnit, Document, HeadingLevel, InlineNode, Style};
use crate::parsing::{inline::transform_inline, on_content_changed};

fn run(source: &str) -> Document {
    let doc = on_content_changed(Document::from_lines(source));
    invariants::check(&doc);
    doc
}

fn blocks(doc: &Document) -> Vec<Block> {
    doc.blocks().cloned().collect()
}

#[test]
fn mixed_document() {
    let doc = run("# Notes\n\nSome **bold** text\n> a _quote_\n```\n   \n### Small");
    insta::assert_snapshot!(to_markup(&doc), @r"
    <h1>Notes</h1>
    <p>Some <strong>bold</strong> text</p>
    <blockquote>a <em>quote</em></blockquote>
    <pre></pre>
    <h3>Small</h3>
    ");
}

#[rstest]
#[case("### Title", 3, "Title")]
#[case("## Title", 2, "Title")]
#[case("# Title", 1, "Title")]
fn heading_prefixes_longest_first(#[case] input: &str, #[case] level: u8, #[case] content: &str) {
    let level = HeadingLevel::from_u8(level).unwrap();
    assert_eq!(blocks(&run(input)), vec![Block::heading(level, content)]);
}

/// Every heading prefix, checked against every body that could confuse a
/// shorter-prefix-first classifier.
#[test]
fn no_heading_keeps_leftover_hashes() {
    for body in ["Title", "", "#", "# x", "a # b"] {
        for (hashes, level) in [("###", 3u8), ("##", 2), ("#", 1)] {
            let doc = run(&format!("{hashes} {body}"));
            let [block] = blocks(&doc).try_into().unwrap();
            assert_eq!(
                block.kind,
                BlockKind::Heading {
                    level: HeadingLevel::from_u8(level).unwrap()
                }
            );
            assert_eq!(block.plain_text(), body);
        }
    }
}

#[rstest]
#[case("> quoted", Block::block_quote("quoted"))]
#[case("```", Block::code_fence(""))]
#[case("```   ", Block::code_fence(""))]
#[case("plain text", Block::paragraph("plain text"))]
fn single_unit_classification(#[case] input: &str, #[case] expected: Block) {
    assert_eq!(blocks(&run(input)), vec![expected]);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_units_produce_no_block(#[case] input: &str) {
    let doc = on_content_changed(Document::new(vec![
        ContentUnit::raw("before"),
        ContentUnit::raw(input),
        ContentUnit::raw("after"),
    ]));
    assert_eq!(doc.len(), 2);
}

#[test]
fn code_fence_content_is_never_transformed() {
    let doc = on_content_changed(Document::new(vec![Block::code_fence("**text**").into()]));
    assert_eq!(blocks(&doc), vec![Block::code_fence("**text**")]);
    assert_eq!(to_markup(&doc), "<pre>**text**</pre>");
}

#[test]
fn bold_wraps_italic() {
    let doc = run("**_x_**");
    assert_eq!(
        blocks(&doc)[0].content,
        vec![InlineNode::span(
            Style::Bold,
            vec![InlineNode::span(Style::Italic, vec![InlineNode::text("x")])]
        )]
    );
}

#[test]
fn already_classified_blocks_are_not_reclassified() {
    let para = Block::paragraph("# literal hash");
    let doc = on_content_changed(Document::new(vec![para.clone().into()]));
    assert_eq!(blocks(&doc), vec![para]);
}

#[test]
fn pipeline_is_stable_on_its_own_output() {
    let once = run("# **T**\n_a_ `b` c\n> **q");
    let twice = on_content_changed(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn persist_and_reload_is_byte_identical() {
    let source = "# Fuego **Mark**\nA _quick_ note with `code` & <tags>\n> quote **_nested_**\n```\n**unclosed and snake_case\n";
    let first = to_markup(&run(source));
    let reloaded = on_content_changed(from_markup(&first));
    invariants::check(&reloaded);
    assert_eq!(to_markup(&reloaded), first);
}

#[test]
fn blank_stored_paragraphs_are_dropped_on_reload() {
    let reloaded = on_content_changed(from_markup("<p><br></p>\n<p>   </p>\n<h1></h1>"));
    invariants::check(&reloaded);
    assert_eq!(blocks(&reloaded), vec![Block::heading(HeadingLevel::H1, "")]);

    // An empty heading is what "# " classifies to, so it survives reloads.
    let typed = to_markup(&run("# \n\n"));
    assert_eq!(typed, "<h1></h1>");
    assert_eq!(to_markup(&on_content_changed(from_markup(&typed))), typed);
}

#[test]
fn source_text_reclassifies_to_the_same_block() {
    let source = "## a **b** _c_\n> q `x`\nplain **_y_** z_\n# # deep";
    for block in blocks(&run(source)) {
        let again = run(&block.source_text());
        assert_eq!(blocks(&again), vec![block]);
    }
}

/// Every string over the delimiter alphabet up to length 6 transforms
/// idempotently.
#[test]
fn transform_is_idempotent_exhaustively() {
    const ALPHABET: [char; 4] = ['*', '_', '`', 'a'];
    let mut inputs = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..6 {
        frontier = frontier
            .iter()
            .flat_map(|s| {
                ALPHABET.iter().map(move |c| {
                    let mut next = s.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        inputs.extend(frontier.iter().cloned());
    }

    for s in inputs {
        let once = crate::parsing::inline::parse_inline(&s);
        let twice = transform_inline(once.clone());
        assert_eq!(twice, once, "not idempotent for {s:?}");
        // Transforming never loses or invents visible text beyond delimiters.
        let restored: String = once.iter().map(InlineNode::source_text).collect();
        assert_eq!(restored, s, "source not preserved for {s:?}");
    }
}

#[test]
fn empty_document() {
    let doc = run("");
    assert!(doc.is_empty());
    assert_eq!(to_markup(&doc), "");
}

#[test]
fn blank_lines_only() {
    assert!(run("\n\n\n").is_empty());
}
