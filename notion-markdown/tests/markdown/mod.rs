//! Markdown format tests
//!
//! Tests for bidirectional Markdown ↔ Notion block conversion.

mod export;
mod extensions;
mod import;
mod properties;
