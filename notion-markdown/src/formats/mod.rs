//! Format implementations
//!
//! Each format converts between its text representation and Notion blocks.

pub mod json;
pub mod markdown;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
