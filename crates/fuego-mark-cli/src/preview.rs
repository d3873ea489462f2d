//! Renders classified blocks as styled terminal lines.

use fuego_mark_engine::{
    Block as DocBlock, BlockKind, Document, HeadingLevel, InlineNode, Style as InlineStyle,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn render_document(document: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in document.blocks() {
        lines.extend(render_block(block));
    }
    lines
}

pub fn render_block(block: &DocBlock) -> Vec<Line<'static>> {
    match block.kind {
        BlockKind::Heading { level } => {
            let base = heading_style(level);
            let mut spans = vec![];
            render_inline(&block.content, base, &mut spans);
            vec![Line::from(spans), Line::default()]
        }
        BlockKind::Paragraph => {
            let mut spans = vec![];
            render_inline(&block.content, Style::default(), &mut spans);
            vec![Line::from(spans)]
        }
        BlockKind::BlockQuote => {
            let base = Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC);
            let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
            render_inline(&block.content, base, &mut spans);
            vec![Line::from(spans)]
        }
        BlockKind::CodeFence => {
            let style = Style::default().fg(Color::Green).bg(Color::Black);
            let mut lines = vec![Line::styled("┌─ code", Style::default().fg(Color::DarkGray))];
            let body = block.plain_text();
            lines.extend(body.lines().map(|l| Line::styled(format!("│ {l}"), style)));
            lines
        }
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let color = match level {
        HeadingLevel::H1 => Color::Magenta,
        HeadingLevel::H2 => Color::Cyan,
        HeadingLevel::H3 => Color::Blue,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level == HeadingLevel::H1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn render_inline(nodes: &[InlineNode], base: Style, out: &mut Vec<Span<'static>>) {
    for node in nodes {
        match node {
            InlineNode::Text(t) => out.push(Span::styled(t.clone(), base)),
            InlineNode::Span { style, children } => {
                let nested = match style {
                    InlineStyle::Bold => base.add_modifier(Modifier::BOLD),
                    InlineStyle::Italic => base.add_modifier(Modifier::ITALIC),
                    InlineStyle::Code => base.fg(Color::Yellow),
                };
                render_inline(children, nested, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuego_mark_engine::on_content_changed;
    use pretty_assertions::assert_eq;

    fn rendered(text: &str) -> Vec<Line<'static>> {
        render_document(&on_content_changed(Document::from_lines(text)))
    }

    #[test]
    fn nested_spans_accumulate_modifiers() {
        let lines = rendered("**a _b_**");
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans[0].content, "a ");
        assert_eq!(spans[0].style, Style::default().add_modifier(Modifier::BOLD));
        assert_eq!(spans[1].content, "b");
        assert_eq!(
            spans[1].style,
            Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC)
        );
    }

    #[test]
    fn heading_is_followed_by_blank_line() {
        let lines = rendered("## Title");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "Title");
        assert_eq!(lines[0].spans[0].style, heading_style(HeadingLevel::H2));
        assert_eq!(lines[1], Line::default());
    }

    #[test]
    fn quote_gets_gutter() {
        let lines = rendered("> said");
        assert_eq!(lines[0].spans[0].content, "│ ");
        assert_eq!(lines[0].spans[1].content, "said");
    }

    #[test]
    fn code_fence_shows_header() {
        let lines = render_block(&DocBlock::code_fence("let x = 1;"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0].content, "│ let x = 1;");
    }

    #[test]
    fn code_span_keeps_delimiters_out() {
        let lines = rendered("run `ls`");
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "run ls");
        assert_eq!(lines[0].spans[1].style, Style::default().fg(Color::Yellow));
    }
}
