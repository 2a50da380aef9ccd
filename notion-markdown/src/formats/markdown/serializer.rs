//! Markdown serialization (Notion blocks → Markdown)
//!
//! Blocks are rendered one after another, separated by a blank line, except
//! that consecutive list items of the same kind stay together so they form a
//! single Markdown list. Nested children are indented by four spaces, which
//! every CommonMark parser accepts as list item continuation.
//! Children that open with anything but a list item are set off from their
//! parent's text by a blank line.
//!
//! The output is chosen so that parsing it again yields the same blocks.
//! Notion features without a Markdown spelling use the HTML extensions from
//! `common::extensions`.

use crate::blocks::{Block, FileData, RichText, TableData, TextBlockData};
use crate::common::flat_to_nested::render_rich_text;
use crate::common::languages::PLAIN_TEXT;

const CHILD_INDENT: usize = 4;

/// Serialize blocks to Markdown.
pub fn serialize_to_markdown(blocks: &[Block]) -> String {
    render_blocks(blocks, 0)
}

/// Render blocks at the given indentation, ending in exactly one newline.
/// Empty input renders as `""`.
pub fn render_blocks(blocks: &[Block], indent: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut prev_kind: Option<&str> = None;

    for block in blocks {
        let Some(rendered) = render_block(block, indent) else {
            continue;
        };
        let kind = block.kind();
        if let Some(prev) = prev_kind {
            if !(prev == kind && block.is_list_item()) {
                parts.push(String::new());
            }
        }
        parts.push(rendered);
        prev_kind = Some(kind);
    }

    let text = parts.join("\n");
    let body = text.trim_end_matches('\n');
    if body.is_empty() {
        String::new()
    } else {
        format!("{body}\n")
    }
}

/// Render one block, `None` for blocks that have no Markdown form.
fn render_block(block: &Block, indent: usize) -> Option<String> {
    let prefix = " ".repeat(indent);
    let rendered = match block {
        Block::Paragraph { paragraph } => {
            format!("{prefix}{}", render_rich_text(&paragraph.rich_text))
        }
        Block::Heading1 { heading_1 } => {
            format!("{prefix}# {}", render_rich_text(&heading_1.rich_text))
        }
        Block::Heading2 { heading_2 } => {
            format!("{prefix}## {}", render_rich_text(&heading_2.rich_text))
        }
        Block::Heading3 { heading_3 } => {
            format!("{prefix}### {}", render_rich_text(&heading_3.rich_text))
        }
        Block::BulletedListItem { bulleted_list_item } => {
            list_item("- ", bulleted_list_item, indent)
        }
        Block::NumberedListItem { numbered_list_item } => {
            list_item("1. ", numbered_list_item, indent)
        }
        Block::ToDo { to_do } => {
            let marker = if to_do.checked { "- [x] " } else { "- [ ] " };
            with_children(
                format!("{prefix}{marker}{}", render_rich_text(&to_do.rich_text)),
                &to_do.children,
                indent,
            )
        }
        Block::Code { code } => {
            let language = if code.language == PLAIN_TEXT {
                ""
            } else {
                code.language.as_str()
            };
            let content: String = code.rich_text.iter().map(RichText::plain_text).collect();
            format!(
                "{prefix}```{language}\n{}\n{prefix}```",
                prefixed_lines(&content, &prefix)
            )
        }
        Block::Quote { quote } => render_quote(quote, &prefix),
        Block::Callout { callout } => {
            let emoji = callout
                .icon
                .as_ref()
                .and_then(|icon| icon.emoji.as_deref())
                .unwrap_or("");
            let text = render_rich_text(&callout.rich_text);
            let body = if emoji.is_empty() {
                text
            } else {
                format!("{emoji} {text}").trim().to_string()
            };
            format!("{prefix}<aside>\n{prefix}{body}\n{prefix}</aside>")
        }
        Block::Toggle { toggle } => {
            let title = render_rich_text(&toggle.rich_text);
            let body = toggle
                .children
                .first()
                .and_then(Block::rich_text)
                .map(render_rich_text)
                .unwrap_or_default();
            format!("{prefix}<details><summary>{title}</summary>{body}</details>")
        }
        Block::Divider { .. } => format!("{prefix}---"),
        Block::Table { table } => return render_table(table, &prefix),
        Block::Image { image } => {
            format!(
                "{prefix}![{}]({})",
                render_rich_text(&image.caption),
                image.source.url()
            )
        }
        Block::Equation { equation } => {
            format!(
                "{prefix}$$\n{}\n{prefix}$$",
                prefixed_lines(&equation.expression, &prefix)
            )
        }
        Block::Bookmark { bookmark } => self_link(&bookmark.url, &prefix),
        Block::Embed { embed } => self_link(&embed.url, &prefix),
        Block::Video { video } => render_video(video, &prefix),
        Block::TableRow { .. } | Block::Unsupported => return None,
    };
    Some(rendered)
}

fn list_item(marker: &str, data: &TextBlockData, indent: usize) -> String {
    let prefix = " ".repeat(indent);
    with_children(
        format!("{prefix}{marker}{}", render_rich_text(&data.rich_text)),
        &data.children,
        indent,
    )
}

fn with_children(mut line: String, children: &[Block], indent: usize) -> String {
    let nested = render_blocks(children, indent + CHILD_INDENT);
    let nested = nested.trim_end_matches('\n');
    if !nested.is_empty() {
        line.push('\n');
        if needs_gap(children) {
            line.push('\n');
        }
        line.push_str(nested);
    }
    line
}

/// Children that do not start with a nested list item need a blank line
/// after their parent's text, or they re-import as part of that text.
fn needs_gap(children: &[Block]) -> bool {
    children
        .iter()
        .find(|child| match child {
            Block::TableRow { .. } | Block::Unsupported => false,
            Block::Table { table } => !table.children.is_empty(),
            _ => true,
        })
        .is_some_and(|first| !first.is_list_item())
}

/// Every line of `text` with `prefix` in front, empty lines included.
fn prefixed_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_quote(quote: &TextBlockData, prefix: &str) -> String {
    let text = render_rich_text(&quote.rich_text);
    let mut lines: Vec<String> = if text.is_empty() {
        vec![format!("{prefix}> ")]
    } else {
        text.lines().map(|line| format!("{prefix}> {line}")).collect()
    };
    let nested = render_blocks(&quote.children, 0);
    let nested = nested.trim_end_matches('\n');
    if !nested.is_empty() && needs_gap(&quote.children) {
        lines.push(format!("{prefix}>"));
    }
    lines.extend(nested.lines().map(|line| {
        if line.is_empty() {
            format!("{prefix}>")
        } else {
            format!("{prefix}> {line}")
        }
    }));
    lines.join("\n")
}

fn render_table(table: &TableData, prefix: &str) -> Option<String> {
    let first = table.children.first()?;
    let mut lines = Vec::with_capacity(table.children.len() + 1);

    for (index, row) in table.children.iter().enumerate() {
        let cells: Vec<String> = row.cells().iter().map(|cell| table_cell(cell)).collect();
        lines.push(format!("{prefix}| {} |", cells.join(" | ")));
        if index == 0 && table.has_column_header {
            let separator = " --- |".repeat(first.cells().len());
            lines.push(format!("{prefix}|{separator}"));
        }
    }

    Some(lines.join("\n"))
}

/// A cell on one line: pipes escaped, newlines as `<br>`.
fn table_cell(cell: &[RichText]) -> String {
    render_rich_text(cell)
        .replace('|', "\\|")
        .replace('\n', "<br>")
}

fn self_link(url: &str, prefix: &str) -> String {
    format!("{prefix}[{url}]({url})")
}

fn render_video(video: &FileData, prefix: &str) -> String {
    format!("{prefix}![video]({})", video.source.url())
}
