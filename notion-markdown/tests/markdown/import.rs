//! Import tests for Markdown format (Markdown → Notion blocks)

use notion_markdown::blocks::{Annotations, Block, RichText};
use notion_markdown::{to_blocks, Format, MarkdownFormat};

fn bold() -> Annotations {
    Annotations {
        bold: true,
        ..Annotations::default()
    }
}

fn kinds(blocks: &[Block]) -> Vec<&'static str> {
    blocks.iter().map(Block::kind).collect()
}

#[test]
fn test_empty_document() {
    assert!(to_blocks("").is_empty());
    assert!(to_blocks("\n\n   \n").is_empty());
}

#[test]
fn test_format_parse_never_fails() {
    let blocks = MarkdownFormat.parse("# Title\n").expect("markdown parse is infallible");
    assert_eq!(blocks, vec![Block::heading(1, vec![RichText::plain("Title")])]);
}

#[test]
fn test_headings_deeper_than_three_clamp() {
    let blocks = to_blocks("# a\n\n## b\n\n#### d\n\n###### f\n");
    assert_eq!(
        kinds(&blocks),
        vec!["heading_1", "heading_2", "heading_3", "heading_3"]
    );
}

#[test]
fn test_paragraph_with_inline_formatting() {
    let blocks = to_blocks("plain **strong** and [link](https://example.com)\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![
            RichText::plain("plain "),
            RichText::text("strong", Some(bold()), None),
            RichText::plain(" and "),
            RichText::text("link", None, Some("https://example.com")),
        ])]
    );
}

#[test]
fn test_soft_break_becomes_newline() {
    let blocks = to_blocks("line one\nline two\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![
            RichText::plain("line one"),
            RichText::plain("\n"),
            RichText::plain("line two"),
        ])]
    );
}

#[test]
fn test_nested_lists() {
    let blocks = to_blocks("- parent\n    - child\n        1. deep\n");
    assert_eq!(
        blocks,
        vec![Block::bulleted_list_item(
            vec![RichText::plain("parent")],
            vec![Block::bulleted_list_item(
                vec![RichText::plain("child")],
                vec![Block::numbered_list_item(
                    vec![RichText::plain("deep")],
                    vec![]
                )],
            )],
        )]
    );
}

#[test]
fn test_loose_list_item_with_second_paragraph() {
    let blocks = to_blocks("- first\n\n    second\n");
    assert_eq!(
        blocks,
        vec![Block::bulleted_list_item(
            vec![RichText::plain("first")],
            vec![Block::paragraph(vec![RichText::plain("second")])],
        )]
    );
}

#[test]
fn test_task_list() {
    let blocks = to_blocks("- [x] shipped\n- [ ] pending\n");
    assert_eq!(
        blocks,
        vec![
            Block::to_do(vec![RichText::plain("shipped")], true, vec![]),
            Block::to_do(vec![RichText::plain("pending")], false, vec![]),
        ]
    );
}

#[test]
fn test_code_block_language_is_normalized() {
    let blocks = to_blocks("```py\nprint(1)\n```\n\n```\nraw\n```\n\n```brainfuck\n+\n```\n");
    assert_eq!(
        blocks,
        vec![
            Block::code("print(1)", "python"),
            Block::code("raw", "plain text"),
            Block::code("+", "plain text"),
        ]
    );
}

#[test]
fn test_code_block_language_aliases() {
    let blocks = to_blocks("```js\ncode\n```\n\n```TS\nlet x: number;\n```\n");
    assert_eq!(
        blocks,
        vec![
            Block::code("code", "javascript"),
            Block::code("let x: number;", "typescript"),
        ]
    );
}

#[test]
fn test_math_fence_is_an_equation() {
    // `$$` blocks are rewritten to this fence before tokenizing.
    let blocks = to_blocks("```math\na^2 + b^2\n```\n");
    assert_eq!(blocks, vec![Block::equation("a^2 + b^2")]);
}

#[test]
fn test_code_block_keeps_inner_blank_lines() {
    let blocks = to_blocks("```rust\nfn a() {}\n\nfn b() {}\n```\n");
    assert_eq!(blocks, vec![Block::code("fn a() {}\n\nfn b() {}", "rust")]);
}

#[test]
fn test_quote_with_nested_list() {
    let blocks = to_blocks("> intro\n>\n> - item\n");
    assert_eq!(
        blocks,
        vec![Block::quote(
            vec![RichText::plain("intro")],
            vec![Block::bulleted_list_item(
                vec![RichText::plain("item")],
                vec![]
            )],
        )]
    );
}

#[test]
fn test_divider_and_image() {
    let blocks = to_blocks("---\n\n![a cat](https://example.com/cat.png)\n");
    assert_eq!(
        blocks,
        vec![
            Block::divider(),
            Block::image(
                "https://example.com/cat.png",
                vec![RichText::plain("a cat")]
            ),
        ]
    );
}

#[test]
fn test_image_without_alt_has_empty_caption() {
    let blocks = to_blocks("![](https://example.com/x.png)\n");
    assert_eq!(blocks, vec![Block::image("https://example.com/x.png", vec![])]);
}

#[test]
fn test_display_math_becomes_equation() {
    let blocks = to_blocks("$$\n\\int_0^1 x\\,dx\n$$\n");
    assert_eq!(blocks, vec![Block::equation("\\int_0^1 x\\,dx")]);
}

#[test]
fn test_inline_math_becomes_equation_span() {
    let blocks = to_blocks("area is $\\pi r^2$ here\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![
            RichText::plain("area is "),
            RichText::equation("\\pi r^2"),
            RichText::plain(" here"),
        ])]
    );
}

#[test]
fn test_bare_url_is_plain_text() {
    let blocks = to_blocks("see https://example.com\n");
    assert_eq!(
        blocks,
        vec![Block::paragraph(vec![RichText::plain("see https://example.com")])]
    );
}

#[test]
fn test_deep_nesting_does_not_lose_levels() {
    let mut markdown = String::new();
    for depth in 0..8 {
        markdown.push_str(&" ".repeat(depth * 4));
        markdown.push_str(&format!("- level {depth}\n"));
    }

    let mut blocks = to_blocks(&markdown);
    for depth in 0..8 {
        assert_eq!(blocks.len(), 1, "depth {depth}");
        let Block::BulletedListItem { bulleted_list_item } = blocks.remove(0) else {
            panic!("expected a bulleted item at depth {depth}");
        };
        assert_eq!(
            bulleted_list_item.rich_text,
            vec![RichText::plain(format!("level {depth}"))]
        );
        blocks = bulleted_list_item.children;
    }
    assert!(blocks.is_empty());
}
