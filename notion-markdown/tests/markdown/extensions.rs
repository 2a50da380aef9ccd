//! HTML extension tests: callouts, toggles and inline spans
//!
//! Notion features with no Markdown syntax are spelled as a small set of HTML
//! tags. These tests cover both directions through the public entry points.

use notion_markdown::blocks::{Annotations, Block, CalloutData, Icon, RichText};
use notion_markdown::{to_blocks, to_markdown};

fn only_callout(blocks: &[Block]) -> &CalloutData {
    match blocks {
        [Block::Callout { callout }] => callout,
        other => panic!("expected a single callout, got {other:?}"),
    }
}

#[test]
fn test_aside_callout_import() {
    let blocks = to_blocks("<aside>\n💡 Remember this\n</aside>\n");
    let callout = only_callout(&blocks);
    assert_eq!(
        callout.icon,
        Some(Icon {
            emoji: Some("💡".to_string())
        })
    );
    assert_eq!(callout.rich_text, vec![RichText::plain("Remember this")]);
}

#[test]
fn test_callout_tag_with_attributes() {
    let blocks =
        to_blocks("<callout icon=\"🔥\" color=\"red_background\">\nHot take\n</callout>\n");
    let callout = only_callout(&blocks);
    assert_eq!(callout.icon.as_ref().and_then(|i| i.emoji.as_deref()), Some("🔥"));
    assert_eq!(callout.color.as_deref(), Some("red_background"));
    assert_eq!(callout.rich_text, vec![RichText::plain("Hot take")]);
}

#[test]
fn test_callout_between_paragraphs() {
    let blocks = to_blocks("before\n<aside>\nnote\n</aside>\nafter\n");
    let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "callout", "paragraph"]);
}

#[test]
fn test_callout_inside_list_item() {
    let blocks = to_blocks("- item\n    <aside>\n    nested note\n    </aside>\n");
    let [Block::BulletedListItem { bulleted_list_item }] = blocks.as_slice() else {
        panic!("expected one list item, got {blocks:?}");
    };
    assert_eq!(bulleted_list_item.rich_text, vec![RichText::plain("item")]);
    let callout = only_callout(&bulleted_list_item.children);
    assert_eq!(callout.rich_text, vec![RichText::plain("nested note")]);
}

#[test]
fn test_aside_in_code_fence_stays_code() {
    let blocks = to_blocks("```html\n<aside>\nx\n</aside>\n```\n");
    assert_eq!(blocks, vec![Block::code("<aside>\nx\n</aside>", "html")]);
}

#[test]
fn test_details_toggle_import() {
    let blocks = to_blocks("<details>\n<summary>More</summary>\nHidden text\n</details>\n");
    assert_eq!(
        blocks,
        vec![Block::toggle(
            vec![RichText::plain("More")],
            vec![Block::paragraph(vec![RichText::plain("Hidden text")])],
        )]
    );
}

#[test]
fn test_toggle_export() {
    let blocks = vec![Block::toggle(
        vec![RichText::plain("More")],
        vec![Block::paragraph(vec![RichText::plain("Hidden text")])],
    )];
    assert_eq!(
        to_markdown(&blocks),
        "<details><summary>More</summary>Hidden text</details>\n"
    );
}

#[test]
fn test_unknown_block_html_is_kept_as_text() {
    let blocks = to_blocks("<div>custom</div>\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![RichText::plain("<div>custom</div>")])]
    );
}

#[test]
fn test_underline_and_color_spans() {
    let blocks = to_blocks("a <span underline=\"true\">b</span> <span color=\"red\">c</span>\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![
            RichText::plain("a "),
            RichText::text(
                "b",
                Some(Annotations {
                    underline: true,
                    ..Annotations::default()
                }),
                None
            ),
            RichText::plain(" "),
            RichText::text(
                "c",
                Some(Annotations {
                    color: Some("red".to_string()),
                    ..Annotations::default()
                }),
                None
            ),
        ])]
    );
}

#[test]
fn test_nested_spans_combine() {
    let blocks = to_blocks("<span color=\"blue\"><span underline=\"true\">both</span></span>\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![RichText::text(
            "both",
            Some(Annotations {
                underline: true,
                color: Some("blue".to_string()),
                ..Annotations::default()
            }),
            None
        )])]
    );
}

#[test]
fn test_br_is_a_newline() {
    let blocks = to_blocks("one<br>two\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![
            RichText::plain("one"),
            RichText::plain("\n"),
            RichText::plain("two"),
        ])]
    );
}

#[test]
fn test_unknown_inline_html_is_literal() {
    let blocks = to_blocks("press <kbd>q</kbd>\n");
    let text: String = blocks[0]
        .rich_text()
        .unwrap_or_default()
        .iter()
        .map(RichText::plain_text)
        .collect();
    assert_eq!(text, "press <kbd>q</kbd>");
}
