//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// The conversion engines themselves never fail: malformed nodes degrade to
/// omitted or literal output. Errors only surface at the edges, where text is
/// decoded into blocks or blocks are encoded into text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// A JSON document whose root is not an array of blocks
    #[error("input must be a JSON array of Notion blocks")]
    NotAnArray,
}
