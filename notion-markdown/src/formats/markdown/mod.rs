//! Markdown format implementation
//!
//! Bidirectional conversion between GitHub-flavored Markdown and Notion
//! blocks.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for tokenizing, with the table, strikethrough,
//! task list and dollar math extensions. Its AST is lowered into our own
//! token tree (see [`tokenizer`]) and serialization is done by hand, since
//! the output has to follow Notion's conventions rather than comrak's.
//!
//! # Element Mapping Table
//!
//! | Notion block          | Markdown                                   |
//! |-----------------------|--------------------------------------------|
//! | paragraph             | paragraph                                  |
//! | heading_1/2/3         | `#`, `##`, `###` (deeper levels → `###`)   |
//! | bulleted_list_item    | `- item`                                   |
//! | numbered_list_item    | `1. item`                                  |
//! | to_do                 | `- [ ] item` / `- [x] item`                |
//! | code                  | fenced code, language as info string       |
//! | quote                 | `> quote`                                  |
//! | callout               | `<aside>` / `<callout>`                    |
//! | toggle                | `<details><summary>`                       |
//! | divider               | `---`                                      |
//! | table                 | GFM table                                  |
//! | image                 | `![caption](url)` alone in a paragraph     |
//! | equation              | `$$ ... $$`                                |
//! | bookmark, embed       | `[url](url)` (export only)                 |
//! | video                 | `![video](url)` (export only)              |
//!
//! Inline: `**bold**`, `*italic*`, `~~strike~~`, `` `code` ``, `[link](url)`,
//! `$math$`, and `<span underline="true">` / `<span color="...">` for the
//! annotations Markdown lacks.
//!
//! # Lossy Conversions
//!
//! - Heading levels 4-6 → heading_3
//! - Numbered lists restart at 1 on export (Markdown renumbers anyway)
//! - Bookmarks, embeds and videos → links and images on re-import
//! - Callout colors and children, and toggle children beyond the first, are
//!   not exported
//! - Unsupported block types are skipped on export

pub mod parser;
pub mod serializer;
pub mod tokenizer;

use crate::blocks::Block;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for Markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "GitHub-flavored Markdown with Notion HTML extensions"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        Ok(parser::parse_from_markdown(source))
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(blocks))
    }
}
