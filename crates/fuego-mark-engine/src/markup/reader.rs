use std::iter::Peekable;

use html_escape::decode_html_entities;

use crate::model::{
    Block, BlockKind, ContentUnit, Document, InlineNode, Style,
    inline::{self, push_node, push_text},
};
use crate::parsing::inline::cursor::Cursor;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

/// Open elements a block may nest before further elements are spliced into
/// their parent.
pub const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open { name: String, void: bool },
    Close { name: String },
}

/// Splits markup into text, open-tag and close-tag tokens.
///
/// Comments, doctypes and processing instructions are skipped. A `<` that
/// does not start a tag is text. Attributes are ignored.
struct Tokenizer<'a> {
    cur: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            cur: Cursor::new(s),
        }
    }

    fn starts_tag(&self) -> bool {
        let mut chars = self.cur.rest().chars();
        chars.next() == Some('<')
            && chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
    }

    fn text(&mut self) -> &'a str {
        // Skip the leading byte so a literal `<` does not stop the scan.
        let skip = usize::from(self.cur.starts_with("<"));
        let len = self.cur.rest()[skip..]
            .find('<')
            .map_or(self.cur.rest().len(), |at| at + skip);
        self.cur.take(len)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if self.cur.eof() {
                return None;
            }
            if !self.starts_tag() {
                return Some(Token::Text(self.text()));
            }
            if self.cur.starts_with("<!--") {
                match self.cur.find("-->") {
                    Some(at) => self.cur.bump_n(at + 3),
                    None => {
                        self.cur.take_rest();
                    }
                }
                continue;
            }
            let Some(end) = self.cur.find(">") else {
                // Unterminated tag: the rest is text.
                return Some(Token::Text(self.cur.take_rest()));
            };
            let raw = self.cur.take(end + 1);
            let body = &raw[1..raw.len() - 1];
            if body.starts_with('!') || body.starts_with('?') {
                continue;
            }
            if let Some(name) = body.strip_prefix('/') {
                return Some(Token::Close {
                    name: tag_name(name),
                });
            }
            let name = tag_name(body);
            let void = body.ends_with('/') || VOID_TAGS.contains(&name.as_str());
            return Some(Token::Open { name, void });
        }
    }
}

fn tag_name(body: &str) -> String {
    body.trim_start()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Reads persisted markup back into a document.
///
/// Top-level text becomes raw units, so whitespace between elements is
/// discarded by the next classification. Unsupported elements are flattened:
/// at the top level they become a raw unit holding their source text, inside
/// a block their children are spliced into the parent. Inline styles inside
/// a code fence are flattened to plain text. Malformed markup never fails.
pub fn from_markup(markup: &str) -> Document {
    let mut tokens = Tokenizer::new(markup).peekable();
    let mut units = vec![];

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(text) => {
                units.push(ContentUnit::Raw(decode_html_entities(text).into_owned()))
            }
            Token::Open { void: true, .. } | Token::Close { .. } => {}
            Token::Open { name, void: false } => {
                let mut open = vec![name.clone()];
                match BlockKind::from_tag(&name) {
                    Some(kind) => {
                        let content = read_inline(&mut tokens, &mut open, !kind.takes_inline());
                        let content = if kind.takes_inline() {
                            content
                        } else {
                            flatten(content)
                        };
                        units.push(ContentUnit::Block(Block { kind, content }));
                    }
                    None => {
                        if Style::from_tag(&name).is_none() {
                            log::warn!("flattening unsupported element <{name}> to text");
                        }
                        let children = read_inline(&mut tokens, &mut open, false);
                        let children = match Style::from_tag(&name) {
                            Some(style) => vec![InlineNode::span(style, children)],
                            None => children,
                        };
                        units.push(ContentUnit::Raw(inline::source_text(&children)));
                    }
                }
            }
        }
    }

    Document::new(units)
}

/// Reads inline children until the element on top of `open` closes.
///
/// A close tag for an outer element ends this element too without being
/// consumed; a close tag for nothing open is dropped. Elements opened deeper
/// than [`MAX_DEPTH`] are spliced into this level instead of nesting.
fn read_inline<'a, I>(
    tokens: &mut Peekable<I>,
    open: &mut Vec<String>,
    raw: bool,
) -> Vec<InlineNode>
where
    I: Iterator<Item = Token<'a>>,
{
    let base = open.len();
    let mut out = vec![];

    while let Some(token) = tokens.peek() {
        match token {
            Token::Close { name } => {
                if open.last() == Some(name) {
                    tokens.next();
                    if open.len() > base {
                        open.pop();
                        continue;
                    }
                    break;
                }
                if open.contains(name) {
                    break;
                }
                tokens.next();
            }
            Token::Text(text) => {
                push_text(&mut out, &decode_html_entities(text));
                tokens.next();
            }
            Token::Open { name, void: true } => {
                if name == "br" {
                    push_text(&mut out, "\n");
                }
                tokens.next();
            }
            Token::Open { name, void: false } => {
                let name = name.clone();
                tokens.next();
                if open.len() >= MAX_DEPTH {
                    if open.len() == MAX_DEPTH {
                        log::warn!("markup nested deeper than {MAX_DEPTH}; flattening");
                    }
                    open.push(name);
                    continue;
                }
                let style = Style::from_tag(&name);
                if style.is_none() {
                    log::warn!("flattening unsupported inline element <{name}>");
                }
                open.push(name);
                let children = read_inline(tokens, open, raw);
                open.pop();
                match style {
                    Some(style) if !raw => out.push(InlineNode::span(style, children)),
                    _ => {
                        for child in children {
                            push_node(&mut out, child);
                        }
                    }
                }
            }
        }
    }

    open.truncate(base);
    out
}

fn flatten(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out = vec![];
    push_text(&mut out, &inline::plain_text(&nodes));
    out
}
