//! Markdown parsing (Markdown → Notion blocks)
//!
//! Pipeline: Markdown string → extension preprocessing → comrak → Token tree
//! → blocks. Each block token maps to zero or more blocks; inline content goes
//! through the flattener in `common::nested_to_flat`.
//!
//! Conversion never fails. Token shapes that make no sense as Notion blocks
//! are skipped and logged at debug level.

use crate::blocks::{Block, RichText, TableData, TableRowBlock};
use crate::common::extensions::{parse_block_html, preprocess};
use crate::common::languages::normalize_language;
use crate::common::nested_to_flat::{flatten, Style};
use crate::formats::markdown::tokenizer::tokenize;
use crate::ir::token::{Token, TokenKind};
use tracing::debug;

/// Parse a Markdown string into Notion blocks.
pub fn parse_from_markdown(source: &str) -> Vec<Block> {
    let prepared = preprocess(source);
    let tokens = tokenize(&prepared);
    convert_tokens(&tokens)
}

/// Convert top-level block tokens.
pub fn convert_tokens(tokens: &[Token]) -> Vec<Block> {
    tokens.iter().flat_map(convert_token).collect()
}

/// Convert one block token into zero or more blocks.
pub fn convert_token(token: &Token) -> Vec<Block> {
    match token.kind {
        TokenKind::Paragraph | TokenKind::BlockText => convert_paragraph(token),
        TokenKind::Heading => vec![convert_heading(token)],
        TokenKind::List => convert_list(token),
        TokenKind::CodeBlock => vec![convert_code_block(token)],
        TokenKind::ThematicBreak => vec![Block::divider()],
        TokenKind::BlockQuote => vec![convert_block_quote(token)],
        TokenKind::Table => vec![convert_table(token)],
        TokenKind::Image => convert_image(token).into_iter().collect(),
        TokenKind::BlockMath => vec![Block::equation(token.raw().trim())],
        TokenKind::BlockHtml => convert_block_html(token),
        TokenKind::BlankLine => Vec::new(),
        kind => {
            debug!(?kind, "skipping token without a block equivalent");
            Vec::new()
        }
    }
}

fn inline(tokens: &[Token]) -> Vec<RichText> {
    flatten(tokens, &Style::default(), None)
}

fn convert_paragraph(token: &Token) -> Vec<Block> {
    if let [only] = token.children.as_slice() {
        if only.kind == TokenKind::Image {
            return convert_image(only).into_iter().collect();
        }
    }
    let rich_text = inline(&token.children);
    if rich_text.is_empty() {
        return Vec::new();
    }
    vec![Block::paragraph(rich_text)]
}

fn convert_heading(token: &Token) -> Block {
    let level = token.attrs.level.unwrap_or(1).clamp(1, 3);
    Block::heading(level, inline(&token.children))
}

fn convert_list(token: &Token) -> Vec<Block> {
    let ordered = token.attrs.ordered.unwrap_or(false);
    token
        .children
        .iter()
        .filter_map(|item| match item.kind {
            TokenKind::ListItem => {
                let (rich_text, children) = list_item_parts(item);
                Some(if ordered {
                    Block::numbered_list_item(rich_text, children)
                } else {
                    Block::bulleted_list_item(rich_text, children)
                })
            }
            TokenKind::TaskListItem => {
                let (rich_text, children) = list_item_parts(item);
                let checked = item.attrs.checked.unwrap_or(false);
                Some(Block::to_do(rich_text, checked, children))
            }
            kind => {
                debug!(?kind, "skipping non-item child of a list");
                None
            }
        })
        .collect()
}

/// The item's own rich text and its nested blocks.
fn list_item_parts(item: &Token) -> (Vec<RichText>, Vec<Block>) {
    if item.children.iter().all(|child| child.kind.is_inline()) {
        return (inline(&item.children), Vec::new());
    }

    let mut rich_text = Vec::new();
    let mut has_text = false;
    let mut children = Vec::new();

    for child in &item.children {
        match child.kind {
            TokenKind::Paragraph | TokenKind::BlockText if !has_text => {
                rich_text = inline(&child.children);
                has_text = true;
            }
            _ => children.extend(convert_token(child)),
        }
    }

    (rich_text, children)
}

fn convert_code_block(token: &Token) -> Block {
    let raw = token.raw();
    let content = raw.strip_suffix('\n').unwrap_or(raw);
    Block::code(content, normalize_language(token.info()))
}

fn convert_block_quote(token: &Token) -> Block {
    let mut rich_text = Vec::new();
    let mut has_text = false;
    let mut children = Vec::new();

    for child in &token.children {
        match child.kind {
            TokenKind::Paragraph if !has_text => {
                rich_text = inline(&child.children);
                has_text = true;
            }
            _ => children.extend(convert_token(child)),
        }
    }

    Block::quote(rich_text, children)
}

fn row_cells(row: &Token) -> Vec<Vec<RichText>> {
    cells(&row.children)
}

fn cells(tokens: &[Token]) -> Vec<Vec<RichText>> {
    tokens
        .iter()
        .filter(|cell| cell.kind == TokenKind::TableCell)
        .map(|cell| inline(&cell.children))
        .collect()
}

fn convert_table(token: &Token) -> Block {
    let mut rows: Vec<Vec<Vec<RichText>>> = Vec::new();
    let mut width = 0;
    let mut has_column_header = false;

    for section in &token.children {
        match section.kind {
            TokenKind::TableHead => {
                has_column_header = true;
                let head = cells(&section.children);
                if !head.is_empty() {
                    width = width.max(head.len());
                    rows.push(head);
                }
            }
            TokenKind::TableBody => {
                let starts_with_cell = section
                    .children
                    .first()
                    .is_some_and(|first| first.kind == TokenKind::TableCell);
                if starts_with_cell {
                    let flat = cells(&section.children);
                    let chunk = if width > 0 { width } else { flat.len() };
                    for row in flat.chunks(chunk.max(1)) {
                        width = width.max(row.len());
                        rows.push(row.to_vec());
                    }
                } else {
                    for row in &section.children {
                        let row = row_cells(row);
                        if !row.is_empty() {
                            width = width.max(row.len());
                            rows.push(row);
                        }
                    }
                }
            }
            kind => debug!(?kind, "skipping unexpected table section"),
        }
    }

    let table_width = width.max(1);
    let children = rows
        .into_iter()
        .map(|mut row| {
            row.resize_with(table_width, Vec::new);
            TableRowBlock::new(row)
        })
        .collect();

    Block::table(TableData {
        table_width,
        has_column_header,
        has_row_header: false,
        children,
    })
}

fn convert_image(token: &Token) -> Option<Block> {
    let Some(url) = token.url().or_else(|| token.src()) else {
        debug!("skipping image without a url");
        return None;
    };
    let alt = token.alt().or_else(|| {
        token
            .children
            .first()
            .filter(|child| child.kind == TokenKind::Text)
            .map(Token::raw)
    });
    let caption = match alt {
        Some(alt) if !alt.is_empty() => vec![RichText::plain(alt)],
        _ => Vec::new(),
    };
    Some(Block::image(url, caption))
}

fn convert_block_html(token: &Token) -> Vec<Block> {
    let raw = token.raw().trim();
    if raw.is_empty() {
        return Vec::new();
    }
    parse_block_html(raw).unwrap_or_else(|| {
        debug!(html = raw, "keeping unrecognized block HTML as text");
        vec![Block::paragraph(vec![RichText::plain(raw)])]
    })
}
