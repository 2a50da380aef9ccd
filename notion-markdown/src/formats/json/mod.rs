//! Notion block JSON format
//!
//! Reads and writes the JSON the block API uses: a top-level array of block
//! objects. Output is either pretty-printed with a configurable indent width
//! or compact, and always ends in a newline. Non-ASCII text is written as is.
//!
//! Reading is lenient per block. A block whose payload does not decode (for
//! example an API response for a block kind with a changed schema) becomes
//! [`Block::Unsupported`] and is skipped on export, rather than failing the
//! whole document.

use crate::blocks::Block;
use crate::error::FormatError;
use crate::format::Format;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::warn;

/// Default pretty-print indent width.
pub const DEFAULT_INDENT: usize = 2;

/// Format implementation for Notion block JSON
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    /// Spaces per indent level; `0` writes compact JSON on one line.
    pub indent: usize,
}

impl Default for JsonFormat {
    fn default() -> Self {
        JsonFormat {
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonFormat {
    pub fn with_indent(indent: usize) -> Self {
        JsonFormat { indent }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Notion block API JSON (array of block objects)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        parse_blocks_json(source)
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        serialize_blocks_json(blocks, self.indent)
    }
}

/// Parse a JSON array of Notion blocks.
pub fn parse_blocks_json(source: &str) -> Result<Vec<Block>, FormatError> {
    let value: Value = serde_json::from_str(source)
        .map_err(|e| FormatError::ParseError(format!("invalid JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(FormatError::NotAnArray);
    };

    Ok(items.into_iter().enumerate().map(decode_block).collect())
}

fn decode_block((index, item): (usize, Value)) -> Block {
    let kind = item
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    serde_json::from_value(item).unwrap_or_else(|err| {
        warn!(index, kind = %kind, error = %err, "block does not decode; treating as unsupported");
        Block::Unsupported
    })
}

/// Serialize blocks as a JSON array followed by a newline.
pub fn serialize_blocks_json(blocks: &[Block], indent: usize) -> Result<String, FormatError> {
    let mut out = Vec::new();
    let written = if indent == 0 {
        let mut serializer = Serializer::with_formatter(&mut out, CompactFormatter);
        blocks.serialize(&mut serializer)
    } else {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        blocks.serialize(&mut serializer)
    };
    written.map_err(|e| FormatError::SerializationError(e.to_string()))?;

    let mut text =
        String::from_utf8(out).map_err(|e| FormatError::SerializationError(e.to_string()))?;
    text.push('\n');
    Ok(text)
}
