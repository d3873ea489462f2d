use serde::Serialize;

use crate::parsing::inline::kinds::{Bold, CodeSpan, Italic};

/// The formatting carried by a style span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    /// Delimiter that opens and closes this style in source text.
    pub fn delimiter(self) -> &'static str {
        match self {
            Style::Bold => Bold::DELIM,
            Style::Italic => Italic::DELIM,
            Style::Code => CodeSpan::DELIM,
        }
    }

    /// Markup element name used when serializing.
    pub fn tag(self) -> &'static str {
        match self {
            Style::Bold => "strong",
            Style::Italic => "em",
            Style::Code => "code",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "strong" | "b" => Some(Style::Bold),
            "em" | "i" => Some(Style::Italic),
            "code" => Some(Style::Code),
            _ => None,
        }
    }
}

/// A node of a block's inline content.
///
/// Sequences of inline nodes never contain two adjacent `Text` nodes nor an
/// empty `Text` node; use [`push_text`] to maintain that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    Text(String),
    Span {
        style: Style,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }

    pub fn span(style: Style, children: Vec<InlineNode>) -> Self {
        InlineNode::Span { style, children }
    }

    /// Concatenated text of this node with all delimiters dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            InlineNode::Text(t) => out.push_str(t),
            InlineNode::Span { children, .. } => {
                for c in children {
                    c.write_plain(out);
                }
            }
        }
    }

    /// Text of this node with delimiters restored, suitable for re-editing.
    pub fn source_text(&self) -> String {
        let mut out = String::new();
        self.write_source(&mut out);
        out
    }

    fn write_source(&self, out: &mut String) {
        match self {
            InlineNode::Text(t) => out.push_str(t),
            InlineNode::Span { style, children } => {
                out.push_str(style.delimiter());
                for c in children {
                    c.write_source(out);
                }
                out.push_str(style.delimiter());
            }
        }
    }
}

/// Appends text to an inline sequence, merging with a trailing text node.
pub fn push_text(out: &mut Vec<InlineNode>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(last)) = out.last_mut() {
        last.push_str(s);
    } else {
        out.push(InlineNode::Text(s.to_string()));
    }
}

/// Appends a node, merging text into a trailing text node.
pub fn push_node(out: &mut Vec<InlineNode>, node: InlineNode) {
    match node {
        InlineNode::Text(t) => push_text(out, &t),
        span => out.push(span),
    }
}

/// Source text of a whole inline sequence.
pub fn source_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::source_text).collect()
}

/// Plain text of a whole inline sequence.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}
