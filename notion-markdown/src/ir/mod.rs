//! Intermediate representation of tokenized Markdown.
//!
//! The Markdown parser works on this token tree rather than on the
//! tokenizer's own AST, see [`token`].

pub mod token;
