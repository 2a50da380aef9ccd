//! Format trait definition
//!
//! A format converts between its text representation and Notion blocks. The
//! CLI picks one format to read and another to write; everything in between
//! is a `Vec<Block>`.

use crate::blocks::Block;
use crate::error::FormatError;

/// Trait for block document formats
///
/// # Examples
///
/// ```ignore
/// struct PlainFormat;
///
/// impl Format for PlainFormat {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
///         Ok(vec![Block::paragraph(vec![RichText::plain(source)])])
///     }
///
///     fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
///         Ok(blocks.iter().filter_map(Block::rich_text).map(render_rich_text).collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether the file name carries one of [`Format::file_extensions`]
    /// (case-insensitive). Names without an extension never match.
    fn matches_filename(&self, filename: &str) -> bool {
        std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    /// Parse source text into blocks
    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError>;

    /// Serialize blocks into source text
    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError>;
}
