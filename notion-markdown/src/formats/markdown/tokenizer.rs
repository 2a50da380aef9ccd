//! Comrak adapter: Markdown text → [`Token`] tree.
//!
//! `comrak` does the actual CommonMark/GFM tokenizing. Its arena AST is then
//! lowered into the crate's own token tree so the block converter stays
//! independent of comrak's node types. The lowering also normalizes a few
//! shapes:
//!
//! - adjacent text nodes are merged into one text token;
//! - a paragraph holding only display math, and a ```` ```math ```` fence,
//!   become block math;
//! - paragraphs of tight list items are reported as block text;
//! - tables become `table → [table-head(cells), table-body(rows)]`.

use crate::ir::token::{Token, TokenAttrs, TokenKind};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use tracing::debug;

/// The only tokenizer configuration: GFM tables, strikethrough, task lists and
/// dollar math. Autolinks stay off so bare URLs remain text, and front matter
/// stays off so a leading `---` is a divider.
pub fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.math_dollars = true;
    options
}

/// Tokenize Markdown into top-level block tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let arena = Arena::new();
    let options = comrak_options();
    let root = parse_document(&arena, source, &options);
    document_tokens(root)
}

fn document_tokens<'a>(root: &'a AstNode<'a>) -> Vec<Token> {
    if !matches!(root.data.borrow().value, NodeValue::Document) {
        return Vec::new();
    }
    block_children(root, false)
}

fn block_children<'a>(node: &'a AstNode<'a>, tight: bool) -> Vec<Token> {
    node.children()
        .map(|child| block_token(child, tight))
        .collect()
}

fn block_token<'a>(node: &'a AstNode<'a>, tight: bool) -> Token {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Paragraph => {
            if let Some(expression) = sole_display_math(node) {
                return Token::leaf(TokenKind::BlockMath, expression);
            }
            let kind = if tight {
                TokenKind::BlockText
            } else {
                TokenKind::Paragraph
            };
            Token::container(kind, inline_children(node))
        }
        NodeValue::Heading(heading) => Token::container(TokenKind::Heading, inline_children(node))
            .with_attrs(TokenAttrs {
                level: Some(heading.level),
                ..TokenAttrs::default()
            }),
        NodeValue::List(list) => {
            let items = node
                .children()
                .map(|item| block_token(item, list.tight))
                .collect();
            Token::container(TokenKind::List, items).with_attrs(TokenAttrs {
                ordered: Some(list.list_type == ListType::Ordered),
                ..TokenAttrs::default()
            })
        }
        NodeValue::Item(_) => Token::container(TokenKind::ListItem, block_children(node, tight)),
        NodeValue::TaskItem(symbol) => {
            Token::container(TokenKind::TaskListItem, block_children(node, tight)).with_attrs(
                TokenAttrs {
                    checked: Some(symbol.is_some_and(|c| !c.is_whitespace())),
                    ..TokenAttrs::default()
                },
            )
        }
        NodeValue::CodeBlock(code) => {
            let language = code.info.split_whitespace().next().unwrap_or("");
            if language.eq_ignore_ascii_case("math") {
                return Token::leaf(TokenKind::BlockMath, code.literal.clone());
            }
            Token::leaf(TokenKind::CodeBlock, code.literal.clone()).with_attrs(TokenAttrs {
                info: Some(code.info.clone()),
                ..TokenAttrs::default()
            })
        }
        NodeValue::HtmlBlock(html) => Token::leaf(TokenKind::BlockHtml, html.literal.clone()),
        NodeValue::BlockQuote => {
            Token::container(TokenKind::BlockQuote, block_children(node, false))
        }
        NodeValue::ThematicBreak => Token::new(TokenKind::ThematicBreak),
        NodeValue::Table(_) => table_token(node),
        other => {
            debug!(node = ?other, "unmodelled block node");
            Token::new(TokenKind::Unknown)
        }
    }
}

/// The expression of a paragraph whose only content is `$$...$$`.
fn sole_display_math<'a>(node: &'a AstNode<'a>) -> Option<String> {
    let mut children = node.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match &only.data.borrow().value {
        NodeValue::Math(math) if math.display_math => Some(math.literal.clone()),
        _ => None,
    }
}

fn table_token<'a>(node: &'a AstNode<'a>) -> Token {
    let mut head = Vec::new();
    let mut rows = Vec::new();

    for row in node.children() {
        let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let cells: Vec<Token> = row
            .children()
            .map(|cell| Token::container(TokenKind::TableCell, inline_children(cell)))
            .collect();
        if is_header && head.is_empty() {
            head = cells;
        } else {
            rows.push(Token::container(TokenKind::TableRow, cells));
        }
    }

    let mut children = Vec::new();
    if !head.is_empty() {
        children.push(Token::container(TokenKind::TableHead, head));
    }
    children.push(Token::container(TokenKind::TableBody, rows));
    Token::container(TokenKind::Table, children)
}

fn inline_children<'a>(node: &'a AstNode<'a>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for child in node.children() {
        let token = inline_token(child);
        if token.kind == TokenKind::Text {
            if let Some(last) = tokens.last_mut().filter(|t| t.kind == TokenKind::Text) {
                last.raw
                    .get_or_insert_with(String::new)
                    .push_str(token.raw());
                continue;
            }
        }
        tokens.push(token);
    }
    tokens
}

fn inline_token<'a>(node: &'a AstNode<'a>) -> Token {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Text(text) => Token::text(text.clone()),
        NodeValue::Strong => Token::container(TokenKind::Strong, inline_children(node)),
        NodeValue::Emph => Token::container(TokenKind::Emphasis, inline_children(node)),
        NodeValue::Strikethrough => {
            Token::container(TokenKind::Strikethrough, inline_children(node))
        }
        NodeValue::Code(code) => Token::leaf(TokenKind::CodeSpan, code.literal.clone()),
        NodeValue::Link(link) => {
            Token::container(TokenKind::Link, inline_children(node)).with_attrs(TokenAttrs {
                url: Some(link.url.clone()),
                title: Some(link.title.clone()),
                ..TokenAttrs::default()
            })
        }
        NodeValue::Image(link) => {
            Token::container(TokenKind::Image, inline_children(node)).with_attrs(TokenAttrs {
                url: Some(link.url.clone()),
                title: Some(link.title.clone()),
                ..TokenAttrs::default()
            })
        }
        NodeValue::SoftBreak => Token::new(TokenKind::SoftBreak),
        NodeValue::LineBreak => Token::new(TokenKind::LineBreak),
        NodeValue::HtmlInline(html) => Token::leaf(TokenKind::InlineHtml, html.clone()),
        NodeValue::Math(math) => Token::leaf(TokenKind::InlineMath, math.literal.clone()),
        other => {
            debug!(node = ?other, "unmodelled inline node");
            Token::container(TokenKind::Unknown, inline_children(node))
        }
    }
}
