//! Notion's HTML extensions to Markdown.
//!
//! Notion exports (and its "enhanced" Markdown) use a handful of HTML
//! patterns for things Markdown has no syntax for:
//!
//! | Pattern                                        | Meaning          |
//! |------------------------------------------------|------------------|
//! | `<aside>💡 text</aside>`                       | callout          |
//! | `<callout icon="💡" color="blue_background">`  | callout          |
//! | `<details><summary>T</summary>B</details>`     | toggle           |
//! | `<br>`                                         | line break       |
//! | `<span underline="true">…</span>`              | underline        |
//! | `<span color="red">…</span>`                   | text color       |
//!
//! Only this closed set is recognized. Anything else is left to the caller,
//! which keeps it as literal text.
//!
//! The block patterns usually span several lines, and a Markdown tokenizer
//! ends an HTML block at the first blank line. [`preprocess`] therefore
//! collapses each block pattern onto a single line surrounded by blank lines
//! before tokenizing.

use crate::blocks::{Block, RichText};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ASIDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^<aside>\s*(.*?)\s*</aside>").unwrap());

static CALLOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)^(?:<div data-notion="callout">)?<callout\b([^>]*)>(.*?)</callout>(?:</div>)?"#,
    )
    .unwrap()
});

static CALLOUT_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(icon|color)\s*=\s*["']([^"']*)["']"#).unwrap());

static DETAILS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^<details>\s*<summary>(.*?)</summary>(.*?)</details>").unwrap()
});

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<br\s*/?>$").unwrap());

static SPAN_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<span\s+(?:underline=["']true["']|color=["']([^"']+)["'])\s*>$"#).unwrap()
});

static SPAN_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</span>$").unwrap());

/// A leading run of emoji (with joiners and variation selectors).
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([\x{1F300}-\x{1FAFF}\x{2702}-\x{27B0}\x{FE0F}\x{1F900}-\x{1F9FF}\x{1FA00}-\x{1FA6F}\x{1FA70}-\x{1FAFF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}\x{200D}]+)\s*",
    )
    .unwrap()
});

static ASIDE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^([ \t>]*)<aside>.*?</aside>").unwrap());

static DETAILS_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^([ \t>]*)<details>.*?</details>").unwrap());

static CALLOUT_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^([ \t>]*)<callout\b[^>]*>.*?</callout>").unwrap());

/// A recognized inline HTML tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineHtml {
    LineBreak,
    SpanOpen(SpanStyle),
    SpanClose,
}

/// What a `<span>` applies to its content. The two are exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStyle {
    Underline,
    Color(String),
}

/// Recognize a raw HTML block as callout or toggle blocks.
///
/// Returns `None` when the HTML is none of the known patterns.
pub fn parse_block_html(raw: &str) -> Option<Vec<Block>> {
    let stripped = raw.trim();

    if let Some(caps) = ASIDE.captures(stripped) {
        return Some(vec![callout_from_aside(group(&caps, 1).trim())]);
    }

    if let Some(caps) = CALLOUT.captures(stripped) {
        let mut icon = None;
        let mut color = None;
        for attr in CALLOUT_ATTR.captures_iter(group(&caps, 1)) {
            let value = non_empty(group(&attr, 2).trim());
            match group(&attr, 1) {
                "icon" => icon = icon.or(value),
                _ => color = color.or(value),
            }
        }
        let content = group(&caps, 2).trim();
        return Some(vec![Block::callout(plain_text(content), icon, color)]);
    }

    if let Some(caps) = DETAILS.captures(stripped) {
        let title = group(&caps, 1).trim();
        let body = group(&caps, 2).trim();
        let children = if body.is_empty() {
            Vec::new()
        } else {
            vec![Block::paragraph(vec![RichText::plain(body)])]
        };
        return Some(vec![Block::toggle(plain_text(title), children)]);
    }

    None
}

/// Recognize a raw inline HTML tag.
pub fn parse_inline_html(raw: &str) -> Option<InlineHtml> {
    let stripped = raw.trim();

    if LINE_BREAK.is_match(stripped) {
        return Some(InlineHtml::LineBreak);
    }

    if let Some(caps) = SPAN_OPEN.captures(stripped) {
        let style = match caps.get(1) {
            Some(color) => SpanStyle::Color(color.as_str().to_string()),
            None => SpanStyle::Underline,
        };
        return Some(InlineHtml::SpanOpen(style));
    }

    if SPAN_CLOSE.is_match(stripped) {
        return Some(InlineHtml::SpanClose);
    }

    None
}

fn callout_from_aside(content: &str) -> Block {
    match EMOJI.captures(content) {
        Some(caps) => {
            let icon = group(&caps, 1).to_string();
            let rest = caps.get(0).map_or("", |m| &content[m.end()..]).trim();
            Block::callout(plain_text(rest), Some(icon), None)
        }
        None => Block::callout(plain_text(content), None, None),
    }
}

fn plain_text(content: &str) -> Vec<RichText> {
    if content.is_empty() {
        Vec::new()
    } else {
        vec![RichText::plain(content)]
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Prepare raw Markdown for tokenizing.
///
/// Outside fenced code:
/// - `<aside>` and `<details>` blocks are collapsed onto one line and padded
///   with blank lines;
/// - `<callout>` blocks are collapsed the same way and wrapped in
///   `<div data-notion="callout">` so they tokenize as block HTML;
/// - display math between lines holding only `$$` becomes a ```` ```math ````
///   fence.
///
/// Fenced code passes through untouched.
pub fn preprocess(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split_inclusive('\n').collect();
    let mut out = String::with_capacity(markdown.len() + 32);
    let mut prose = String::new();
    let mut fence: Option<Fence> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(open) = fence {
            out.push_str(line);
            if open.is_closed_by(line) {
                fence = None;
            }
            i += 1;
            continue;
        }

        if let Some(open) = Fence::opened_by(line) {
            out.push_str(&collapse_html(&prose));
            prose.clear();
            out.push_str(line);
            fence = Some(open);
            i += 1;
            continue;
        }

        if let Some(prefix) = math_delimiter(line) {
            let close = (i + 1..lines.len()).find(|&j| math_delimiter(lines[j]).is_some());
            if let Some(close) = close {
                out.push_str(&collapse_html(&prose));
                prose.clear();
                out.push_str(prefix);
                out.push_str("```math\n");
                for inner in &lines[i + 1..close] {
                    out.push_str(inner);
                }
                let closing = lines[close];
                out.push_str(math_delimiter(closing).unwrap_or(""));
                out.push_str("```");
                if closing.ends_with('\n') {
                    out.push('\n');
                }
                i = close + 1;
                continue;
            }
        }

        prose.push_str(line);
        i += 1;
    }

    out.push_str(&collapse_html(&prose));
    out
}

fn collapse_html(text: &str) -> String {
    if !text.contains('<') {
        return text.to_string();
    }
    let text = ASIDE_SPAN.replace_all(text, |caps: &Captures| padded(caps, None));
    let text = DETAILS_SPAN.replace_all(&text, |caps: &Captures| padded(caps, None));
    let text = CALLOUT_SPAN.replace_all(&text, |caps: &Captures| {
        padded(caps, Some(("<div data-notion=\"callout\">", "</div>")))
    });
    text.into_owned()
}

/// One line, blank-line padded. The line prefix (indentation and quote
/// markers) is taken off every inner line and put back on the collapsed line
/// and its padding, so the block stays inside an enclosing list item or quote.
fn padded(caps: &Captures, wrap: Option<(&str, &str)>) -> String {
    let prefix = group(caps, 1);
    let marker = prefix.trim_end();
    let tag = group(caps, 0)[prefix.len()..]
        .split('\n')
        .map(|line| {
            line.strip_prefix(prefix)
                .or_else(|| line.strip_prefix(marker))
                .unwrap_or(line)
        })
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    let (before, after) = wrap.unwrap_or(("", ""));
    format!("{marker}\n{prefix}{before}{tag}{after}\n{marker}")
}

/// The prefix (indentation and quote markers) of a line that holds only `$$`.
fn math_delimiter(line: &str) -> Option<&str> {
    let body_start = line
        .find(|c: char| !matches!(c, ' ' | '\t' | '>'))
        .unwrap_or(line.len());
    let (prefix, body) = line.split_at(body_start);
    (body.trim() == "$$").then_some(prefix)
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    fn opened_by(line: &str) -> Option<Fence> {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = trimmed.chars().take_while(|c| *c == marker).count();
        if len < 3 {
            return None;
        }
        if marker == '`' && trimmed[len..].contains('`') {
            return None;
        }
        Some(Fence { marker, len })
    }

    fn is_closed_by(self, line: &str) -> bool {
        let trimmed = line.trim();
        let len = trimmed.chars().take_while(|c| *c == self.marker).count();
        len >= self.len && trimmed[len * self.marker.len_utf8()..].trim().is_empty()
    }
}
