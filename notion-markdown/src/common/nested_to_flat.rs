//! Flattens nested inline Markdown into styled rich-text spans.
//!
//! # The High-Level Concept
//!
//! Markdown nests formatting: `**bold *and italic***` is a strong node holding
//! text and an emphasis node. Notion has no nesting at all; every span of rich
//! text carries its full set of annotations. Walking the inline tree while
//! carrying the accumulated [`Style`] turns the first shape into the second.
//!
//! # The Algorithm
//!
//! 1. **Leaves:** text, code spans, breaks and inline math each emit one span
//!    styled with the current style (and link).
//! 2. **Containers:** strong, emphasis, strikethrough, mark and insert
//!    recurse into their children with one more flag set. Links recurse with
//!    the link target set. The children's spans are spliced in place.
//! 3. **HTML spans:** `<span ...>` and `</span>` arrive as separate sibling
//!    tokens, not as a container. An opening tag starts a sub-parse over the
//!    following siblings with the span's style applied. The sub-parse stops
//!    at its matching `</span>` (nested spans compose) and hands the
//!    remaining siblings back, which continue at the style from before the
//!    span. An unclosed span runs to the end of its siblings.
//!
//! No spans are merged or reordered, so the output preserves document order
//! exactly. Empty text never produces a span.

use crate::blocks::{Annotations, RichText};
use crate::common::extensions::{parse_inline_html, InlineHtml, SpanStyle};
use crate::ir::token::{Token, TokenKind};
use tracing::debug;

/// Accumulated inline formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Option<String>,
}

impl Style {
    pub fn with_bold(&self) -> Style {
        Style {
            bold: true,
            ..self.clone()
        }
    }

    pub fn with_italic(&self) -> Style {
        Style {
            italic: true,
            ..self.clone()
        }
    }

    pub fn with_strikethrough(&self) -> Style {
        Style {
            strikethrough: true,
            ..self.clone()
        }
    }

    pub fn with_underline(&self) -> Style {
        Style {
            underline: true,
            ..self.clone()
        }
    }

    pub fn with_code(&self) -> Style {
        Style {
            code: true,
            ..self.clone()
        }
    }

    pub fn with_color(&self, color: &str) -> Style {
        Style {
            color: Some(color.to_string()),
            ..self.clone()
        }
    }

    fn with_span(&self, span: &SpanStyle) -> Style {
        match span {
            SpanStyle::Underline => self.with_underline(),
            SpanStyle::Color(color) => self.with_color(color),
        }
    }

    /// The annotations for this style, `None` when nothing is set.
    pub fn annotations(&self) -> Option<Annotations> {
        let annotations = Annotations {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            underline: self.underline,
            code: self.code,
            color: self.color.clone().filter(|c| !c.is_empty()),
        };
        (annotations != Annotations::default()).then_some(annotations)
    }
}

/// Flatten sibling inline tokens into rich-text spans.
pub fn flatten(tokens: &[Token], style: &Style, link: Option<&str>) -> Vec<RichText> {
    run(tokens, style, link, false).0
}

/// Flatten siblings until the end of the slice or, with `in_span`, until the
/// `</span>` closing the current span. Returns the spans and what is left
/// after the close.
fn run<'t>(
    mut tokens: &'t [Token],
    style: &Style,
    link: Option<&str>,
    in_span: bool,
) -> (Vec<RichText>, &'t [Token]) {
    let mut spans = Vec::new();

    while let Some((token, rest)) = tokens.split_first() {
        tokens = rest;

        if token.kind == TokenKind::InlineHtml {
            match parse_inline_html(token.raw()) {
                Some(InlineHtml::SpanClose) if in_span => return (spans, tokens),
                Some(InlineHtml::SpanClose) => {
                    debug!("dropping </span> without an opening tag");
                }
                Some(InlineHtml::SpanOpen(span)) => {
                    let (inner, remaining) = run(tokens, &style.with_span(&span), link, true);
                    spans.extend(inner);
                    tokens = remaining;
                }
                Some(InlineHtml::LineBreak) => spans.push(span("\n", style, link)),
                None => push_text(&mut spans, token.raw(), style, link),
            }
            continue;
        }

        flatten_token(token, style, link, &mut spans);
    }

    (spans, tokens)
}

fn flatten_token(token: &Token, style: &Style, link: Option<&str>, spans: &mut Vec<RichText>) {
    match token.kind {
        TokenKind::Text => push_text(spans, token.raw(), style, link),
        TokenKind::Strong => spans.extend(flatten(&token.children, &style.with_bold(), link)),
        TokenKind::Emphasis => spans.extend(flatten(&token.children, &style.with_italic(), link)),
        TokenKind::Strikethrough => {
            spans.extend(flatten(&token.children, &style.with_strikethrough(), link))
        }
        TokenKind::Mark | TokenKind::Insert => {
            spans.extend(flatten(&token.children, &style.with_underline(), link))
        }
        TokenKind::CodeSpan => push_text(spans, token.raw(), &style.with_code(), link),
        TokenKind::Link => {
            let target = token.url().or(link);
            spans.extend(flatten(&token.children, style, target));
        }
        TokenKind::Image => {
            let target = token.url().or_else(|| token.src()).or(link);
            if !token.children.is_empty() {
                spans.extend(flatten(&token.children, style, target));
            } else if let Some(alt) = token.alt() {
                spans.push(span(alt, style, target));
            }
        }
        TokenKind::SoftBreak | TokenKind::LineBreak => spans.push(span("\n", style, link)),
        TokenKind::InlineMath => spans.push(RichText::equation(token.raw())),
        kind => {
            debug!(?kind, "flattening children of non-inline token");
            spans.extend(flatten(&token.children, style, link));
        }
    }
}

fn push_text(spans: &mut Vec<RichText>, content: &str, style: &Style, link: Option<&str>) {
    if !content.is_empty() {
        spans.push(span(content, style, link));
    }
}

fn span(content: &str, style: &Style, link: Option<&str>) -> RichText {
    RichText::text(content, style.annotations(), link)
}
