use crate::model::{
    Block, InlineNode, Style,
    inline::{push_node, push_text},
};

use super::cursor::Cursor;

/// Passes in application order. Each runs over the output of the previous.
pub const PASSES: [Style; 3] = [Style::Bold, Style::Italic, Style::Code];

/// Rewrites delimiter pairs in `nodes` into style spans.
///
/// Runs the bold, italic and code passes in that order. Each pass scans
/// left to right, pairs each opener with the first following delimiter
/// (empty spans allowed), and never revisits what it already matched.
/// Existing code spans are raw zones and are left alone.
///
/// Re-running on the output is a no-op.
pub fn transform_inline(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    PASSES.into_iter().fold(nodes, run_pass)
}

/// Parses a string of source text into transformed inline nodes.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut nodes = vec![];
    push_text(&mut nodes, s);
    transform_inline(nodes)
}

/// Transforms a block's content unless the block is a raw zone.
pub fn transform_block(block: Block) -> Block {
    if !block.kind.takes_inline() {
        return block;
    }
    Block {
        kind: block.kind,
        content: transform_inline(block.content),
    }
}

/// One pass for `style` over a node sequence and, recursively, over the
/// children of its non-code spans.
fn run_pass(nodes: Vec<InlineNode>, style: Style) -> Vec<InlineNode> {
    let nodes = nodes
        .into_iter()
        .map(|n| match n {
            InlineNode::Span {
                style: s,
                children,
            } if s != Style::Code => InlineNode::Span {
                style: s,
                children: run_pass(children, style),
            },
            other => other,
        })
        .collect();
    rewrite_level(nodes, style)
}

/// Pairs delimiters found in the text nodes of a single level.
///
/// An opener and its closer may sit in different text nodes; whatever lies
/// between them, spans included, becomes the new span's children. An opener
/// without a closer is restored as literal text.
fn rewrite_level(nodes: Vec<InlineNode>, style: Style) -> Vec<InlineNode> {
    let delim = style.delimiter();
    let mut out = vec![];
    // Children collected since an unmatched opener.
    let mut open: Option<Vec<InlineNode>> = None;

    for node in nodes {
        let text = match node {
            InlineNode::Text(text) => text,
            span => {
                match open.as_mut() {
                    Some(inner) => inner.push(span),
                    None => out.push(span),
                }
                continue;
            }
        };

        let mut cur = Cursor::new(&text);
        while !cur.eof() {
            let Some(at) = cur.find(delim) else {
                let target = open.as_mut().unwrap_or(&mut out);
                push_text(target, cur.take_rest());
                break;
            };
            let before = cur.take(at);
            cur.bump_n(delim.len());
            match open.take() {
                None => {
                    push_text(&mut out, before);
                    open = Some(vec![]);
                }
                Some(mut inner) => {
                    push_text(&mut inner, before);
                    out.push(InlineNode::span(style, inner));
                }
            }
        }
    }

    if let Some(inner) = open {
        push_text(&mut out, delim);
        for n in inner {
            push_node(&mut out, n);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineNode {
        InlineNode::text(s)
    }

    fn span(style: Style, children: Vec<InlineNode>) -> InlineNode {
        InlineNode::span(style, children)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_produces_nothing() {
        assert!(parse_inline("").is_empty());
    }

    #[rstest]
    #[case("**bold**", Style::Bold, "bold")]
    #[case("_it_", Style::Italic, "it")]
    #[case("`c`", Style::Code, "c")]
    fn single_span(#[case] input: &str, #[case] style: Style, #[case] inner: &str) {
        assert_eq!(parse_inline(input), vec![span(style, vec![text(inner)])]);
    }

    #[test]
    fn spans_inside_text() {
        assert_eq!(
            parse_inline("a **b** c _d_ e `f` g"),
            vec![
                text("a "),
                span(Style::Bold, vec![text("b")]),
                text(" c "),
                span(Style::Italic, vec![text("d")]),
                text(" e "),
                span(Style::Code, vec![text("f")]),
                text(" g"),
            ]
        );
    }

    #[test]
    fn bold_is_outer_when_wrapping_italic() {
        assert_eq!(
            parse_inline("**_x_**"),
            vec![span(Style::Bold, vec![span(Style::Italic, vec![text("x")])])]
        );
    }

    #[test]
    fn italic_can_wrap_an_earlier_bold_span() {
        assert_eq!(
            parse_inline("_**x**_"),
            vec![span(Style::Italic, vec![span(Style::Bold, vec![text("x")])])]
        );
    }

    #[test]
    fn first_closing_delimiter_wins() {
        assert_eq!(
            parse_inline("**a** b **c**"),
            vec![
                span(Style::Bold, vec![text("a")]),
                text(" b "),
                span(Style::Bold, vec![text("c")]),
            ]
        );
    }

    #[test]
    fn empty_inner_is_allowed() {
        assert_eq!(parse_inline("****"), vec![span(Style::Bold, vec![])]);
        assert_eq!(parse_inline("``"), vec![span(Style::Code, vec![])]);
    }

    #[rstest]
    #[case("**unclosed")]
    #[case("a _b")]
    #[case("`code")]
    #[case("***")]
    fn unclosed_markers_stay_literal(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![text(input)]);
    }

    #[test]
    fn trailing_unmatched_delimiter_is_kept() {
        assert_eq!(
            parse_inline("_a_ b_"),
            vec![span(Style::Italic, vec![text("a")]), text(" b_")]
        );
    }

    #[test]
    fn underscores_inside_words_match() {
        assert_eq!(
            parse_inline("snake_case_name"),
            vec![
                text("snake"),
                span(Style::Italic, vec![text("case")]),
                text("name"),
            ]
        );
    }

    #[test]
    fn code_pass_wraps_spans_made_by_earlier_passes() {
        assert_eq!(
            parse_inline("`a**b**c`"),
            vec![span(
                Style::Code,
                vec![text("a"), span(Style::Bold, vec![text("b")]), text("c")]
            )]
        );
    }

    #[test]
    fn existing_code_spans_are_raw_zones() {
        let nodes = vec![span(Style::Code, vec![text("**not bold**")])];
        assert_eq!(transform_inline(nodes.clone()), nodes);
    }

    #[test]
    fn passes_descend_into_existing_spans() {
        let nodes = vec![span(Style::Bold, vec![text("x _y_")])];
        assert_eq!(
            transform_inline(nodes),
            vec![span(
                Style::Bold,
                vec![text("x "), span(Style::Italic, vec![text("y")])]
            )]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            parse_inline("héllo **wörld** ✓"),
            vec![
                text("héllo "),
                span(Style::Bold, vec![text("wörld")]),
                text(" ✓"),
            ]
        );
    }

    #[test]
    fn transform_is_idempotent_on_samples() {
        for s in [
            "**_x_**",
            "_**x**_",
            "`a**b**c`",
            "** _ ` ** _ `",
            "a_b**c_d**e`f",
            "****__``",
            "*_*_*",
        ] {
            let once = parse_inline(s);
            assert_eq!(transform_inline(once.clone()), once, "input: {s:?}");
        }
    }

    #[test]
    fn code_fence_blocks_are_not_transformed() {
        let block = Block::code_fence("**text**");
        assert_eq!(transform_block(block.clone()), block);
    }

    #[test]
    fn paragraph_blocks_are_transformed() {
        let block = transform_block(Block::paragraph("**text**"));
        assert_eq!(block.kind, BlockKind::Paragraph);
        assert_eq!(block.content, vec![span(Style::Bold, vec![text("text")])]);
    }
}
