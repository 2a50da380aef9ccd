//! Bidirectional conversion between Markdown and Notion blocks
//!
//!     This crate converts Markdown text into the block objects of the Notion block API, and those
//!     blocks back into Markdown, such that a document survives the round trip unchanged.
//!
//!     This is a pure lib, that is, it powers the notion-markdown cli but is shell agnostic: no code
//!     here supposes a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── blocks                  # Notion block / rich text model (serde)
//!     ├── ir                      # Markdown token tree
//!     ├── common                  # Inline flattening / rendering, HTML extensions
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── tokenizer.rs    # comrak → token tree
//!     │   │   ├── parser.rs       # token tree → blocks
//!     │   │   ├── serializer.rs   # blocks → markdown
//!     │   │   └── mod.rs
//!     │   └── json                # block API JSON
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     Markdown nests inline formatting, Notion does not: each rich text span carries its own full
//!     set of annotations. Going in, the nested inline tree is flattened into styled spans
//!     (./common/nested_to_flat.rs). Going out, each span is wrapped back into nested markers
//!     (./common/flat_to_nested.rs). Both sides agree on the same marker order, which is what makes
//!     the round trip stable.
//!
//!     Block structure maps mostly one to one. The exceptions are Notion features Markdown cannot
//!     spell (callouts, toggles, underline, colors), which use the small set of HTML patterns Notion
//!     itself exports (./common/extensions.rs).
//!
//! Formats
//!
//!     Formats implement the Format trait (./format.rs): a name, file extensions, parse() and
//!     serialize(). Markdown and the block API's JSON are provided.
//!
//! Library Choices
//!
//!     Tokenizing is left to comrak, with GFM tables, strikethrough, task lists and dollar math.
//!     Blocks are serde types shaped exactly like the API JSON, so serde_json reads and writes them.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── json
//!     ├── markdown
//!     │   └── <area>.rs         # import, export, extensions, table, roundtrip, properties
//!     └── fixtures
//!         └── kitchensink.md
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod blocks;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;

pub use blocks::{Block, RichText};
pub use error::FormatError;
pub use format::Format;
pub use formats::{JsonFormat, MarkdownFormat};

/// Converts Markdown into Notion blocks.
///
/// Never fails: anything without a block equivalent is skipped, and HTML that
/// is not one of the Notion extension patterns is kept as literal text.
pub fn to_blocks(markdown: &str) -> Vec<Block> {
    formats::markdown::parser::parse_from_markdown(markdown)
}

/// Converts Notion blocks into Markdown.
///
/// The result ends in exactly one newline, or is empty for no blocks.
pub fn to_markdown(blocks: &[Block]) -> String {
    formats::markdown::serializer::serialize_to_markdown(blocks)
}
