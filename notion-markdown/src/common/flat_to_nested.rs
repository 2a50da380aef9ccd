//! Renders flat rich-text spans back into nested Markdown inline syntax.
//!
//! Each span is rendered on its own: its annotations become markers wrapped
//! around the content, innermost first, so the Markdown re-parses into the
//! same span. The wrapping order is
//!
//! 1. code (exclusive; only a link may wrap it)
//! 2. underline `<span underline="true">`
//! 3. color `<span color="...">`
//! 4. strikethrough `~~`
//! 5. bold / italic, `***` when both
//! 6. link
//!
//! Neighbouring spans are not merged, so `**a****b**` may appear where two
//! bold spans touch.

use crate::blocks::{Annotations, RichText};

/// Render a rich-text array as inline Markdown.
pub fn render_rich_text(items: &[RichText]) -> String {
    items.iter().map(render_span).collect()
}

/// Render one span.
pub fn render_span(item: &RichText) -> String {
    match item {
        RichText::Equation { equation } => format!("${}$", equation.expression),
        RichText::Text { text, annotations } => {
            if text.content.is_empty() {
                return String::new();
            }
            let link = text
                .link
                .as_ref()
                .map(|l| l.url.as_str())
                .filter(|url| !url.is_empty());
            let none = Annotations::default();
            apply_formatting(&text.content, annotations.as_ref().unwrap_or(&none), link)
        }
    }
}

fn apply_formatting(content: &str, annotations: &Annotations, link: Option<&str>) -> String {
    if annotations.code {
        let code = format!("`{content}`");
        return match link {
            Some(url) => format!("[{code}]({url})"),
            None => code,
        };
    }

    let mut result = content.to_string();

    if annotations.underline {
        result = format!("<span underline=\"true\">{result}</span>");
    }

    if let Some(color) = annotations.effective_color() {
        result = format!("<span color=\"{color}\">{result}</span>");
    }

    if annotations.strikethrough {
        result = format!("~~{result}~~");
    }

    result = match (annotations.bold, annotations.italic) {
        (true, true) => format!("***{result}***"),
        (true, false) => format!("**{result}**"),
        (false, true) => format!("*{result}*"),
        (false, false) => result,
    };

    if let Some(url) = link {
        result = format!("[{result}]({url})");
    }

    result
}
