//! Export tests for Markdown format (Notion blocks → Markdown)

use insta::assert_snapshot;
use notion_markdown::blocks::{Annotations, Block, RichText};
use notion_markdown::{to_markdown, Format, MarkdownFormat};

fn plain(text: &str) -> Vec<RichText> {
    vec![RichText::plain(text)]
}

fn styled(text: &str, annotations: Annotations) -> RichText {
    RichText::text(text, Some(annotations), None)
}

#[test]
fn test_empty_input() {
    assert_eq!(to_markdown(&[]), "");
    assert_eq!(to_markdown(&[Block::Unsupported]), "");
}

#[test]
fn test_format_serialize_matches_free_function() {
    let blocks = vec![Block::heading(2, plain("Title"))];
    assert_eq!(MarkdownFormat.serialize(&blocks).unwrap(), to_markdown(&blocks));
}

#[test]
fn test_output_ends_in_single_newline() {
    let blocks = vec![Block::paragraph(plain("trailing\n\n"))];
    assert_eq!(to_markdown(&blocks), "trailing\n");
}

#[test]
fn test_document_layout() {
    let blocks = vec![
        Block::heading(1, plain("Release notes")),
        Block::paragraph(plain("Highlights:")),
        Block::bulleted_list_item(plain("faster"), vec![]),
        Block::bulleted_list_item(
            plain("smaller"),
            vec![Block::numbered_list_item(plain("by half"), vec![])],
        ),
        Block::to_do(plain("publish"), false, vec![]),
        Block::divider(),
        Block::quote(plain("Ship it"), vec![]),
    ];

    assert_snapshot!(to_markdown(&blocks).trim_end(), @r"
    # Release notes

    Highlights:

    - faster
    - smaller
        1. by half

    - [ ] publish

    ---

    > Ship it
    ");
}

#[test]
fn test_numbered_items_all_use_one() {
    let blocks = vec![
        Block::numbered_list_item(plain("a"), vec![]),
        Block::numbered_list_item(plain("b"), vec![]),
        Block::numbered_list_item(plain("c"), vec![]),
    ];
    assert_eq!(to_markdown(&blocks), "1. a\n1. b\n1. c\n");
}

#[test]
fn test_annotation_markers() {
    let blocks = vec![Block::paragraph(vec![
        styled(
            "b",
            Annotations {
                bold: true,
                ..Annotations::default()
            },
        ),
        RichText::plain(" "),
        styled(
            "s",
            Annotations {
                strikethrough: true,
                ..Annotations::default()
            },
        ),
        RichText::plain(" "),
        styled(
            "u",
            Annotations {
                underline: true,
                ..Annotations::default()
            },
        ),
        RichText::plain(" "),
        styled(
            "c",
            Annotations {
                color: Some("blue".to_string()),
                ..Annotations::default()
            },
        ),
        RichText::plain(" "),
        styled(
            "d",
            Annotations {
                color: Some("default".to_string()),
                ..Annotations::default()
            },
        ),
    ])];

    assert_eq!(
        to_markdown(&blocks),
        "**b** ~~s~~ <span underline=\"true\">u</span> <span color=\"blue\">c</span> d\n"
    );
}

#[test]
fn test_link_wraps_formatting() {
    let blocks = vec![Block::paragraph(vec![RichText::text(
        "docs",
        Some(Annotations {
            italic: true,
            ..Annotations::default()
        }),
        Some("https://docs.rs"),
    )])];
    assert_eq!(to_markdown(&blocks), "[*docs*](https://docs.rs)\n");
}

#[test]
fn test_code_block_uses_plain_text_content() {
    let blocks = vec![Block::Code {
        code: notion_markdown::blocks::CodeData {
            rich_text: vec![
                styled(
                    "let x",
                    Annotations {
                        bold: true,
                        ..Annotations::default()
                    },
                ),
                RichText::plain(" = 1;"),
            ],
            language: "rust".to_string(),
        },
    }];
    assert_eq!(to_markdown(&blocks), "```rust\nlet x = 1;\n```\n");
}

#[test]
fn test_empty_quote_keeps_marker() {
    let blocks = vec![Block::quote(vec![], vec![])];
    assert_eq!(to_markdown(&blocks), "> \n");
}

#[test]
fn test_equation_inside_list_item_is_indented() {
    let blocks = vec![Block::bulleted_list_item(
        plain("formula"),
        vec![Block::equation("a = b")],
    )];
    assert_eq!(
        to_markdown(&blocks),
        "- formula\n\n    $$\n    a = b\n    $$\n"
    );
}

#[test]
fn test_callout_color_and_children_are_not_exported() {
    let mut callout = Block::callout(plain("Heads up"), None, Some("red_background".to_string()));
    if let Block::Callout { callout } = &mut callout {
        callout.children.push(Block::paragraph(plain("dropped")));
    }
    assert_eq!(to_markdown(&[callout]), "<aside>\nHeads up\n</aside>\n");
}
