//! Notion block JSON tests
//!
//! Decoding of API-shaped JSON and the encoding written by the CLI.

use insta::assert_snapshot;
use notion_markdown::blocks::{Block, FileSource, RichText};
use notion_markdown::{to_blocks, to_markdown, Format, FormatError, JsonFormat};

#[test]
fn test_api_response_shape_decodes() {
    // Fields the block API adds to responses are ignored.
    let source = r#"[
        {
            "object": "block",
            "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
            "has_children": false,
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    {
                        "type": "text",
                        "text": {"content": "Hello", "link": null},
                        "annotations": {
                            "bold": true, "italic": false, "strikethrough": false,
                            "underline": false, "code": false, "color": "default"
                        },
                        "plain_text": "Hello",
                        "href": null
                    }
                ],
                "color": "default"
            }
        }
    ]"#;

    let blocks = JsonFormat::default().parse(source).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(to_markdown(&blocks), "**Hello**\n");
}

#[test]
fn test_unknown_block_types_are_unsupported() {
    let source = r#"[
        {"type": "synced_block", "synced_block": {"synced_from": null}},
        {"type": "divider", "divider": {}}
    ]"#;
    let blocks = JsonFormat::default().parse(source).unwrap();
    assert_eq!(blocks, vec![Block::Unsupported, Block::divider()]);
}

#[test]
fn test_uploaded_and_external_files() {
    let source = r#"[
        {"type": "image", "image": {"type": "file", "file": {"url": "https://s3.example.com/a.png", "expiry_time": "2026-01-01T00:00:00.000Z"}}},
        {"type": "video", "video": {"type": "external", "external": {"url": "https://youtu.be/x"}}}
    ]"#;
    let blocks = JsonFormat::default().parse(source).unwrap();

    let Block::Image { image } = &blocks[0] else {
        panic!("expected image, got {:?}", blocks[0]);
    };
    assert!(matches!(image.source, FileSource::File { .. }));
    assert_eq!(image.source.url(), "https://s3.example.com/a.png");

    assert_eq!(
        to_markdown(&blocks),
        "![](https://s3.example.com/a.png)\n\n![video](https://youtu.be/x)\n"
    );
}

#[test]
fn test_non_array_is_rejected() {
    let err = JsonFormat::default().parse(r#"{"results": []}"#).unwrap_err();
    assert_eq!(err, FormatError::NotAnArray);
    assert_eq!(err.to_string(), "input must be a JSON array of Notion blocks");
}

#[test]
fn test_markdown_to_json_encoding() {
    let blocks = to_blocks("# Title\n\n- [x] *done*\n");
    let json = JsonFormat::default().serialize(&blocks).unwrap();

    assert_snapshot!(json.trim_end(), @r#"
    [
      {
        "type": "heading_1",
        "heading_1": {
          "rich_text": [
            {
              "type": "text",
              "text": {
                "content": "Title"
              }
            }
          ],
          "is_toggleable": false
        }
      },
      {
        "type": "to_do",
        "to_do": {
          "rich_text": [
            {
              "type": "text",
              "text": {
                "content": "done"
              },
              "annotations": {
                "italic": true
              }
            }
          ],
          "checked": true
        }
      }
    ]
    "#);
}

#[test]
fn test_json_round_trip_keeps_blocks() {
    let blocks = vec![
        Block::callout(
            vec![RichText::plain("Note")],
            Some("💡".to_string()),
            Some("gray_background".to_string()),
        ),
        Block::equation("x^2"),
        Block::code("SELECT 1;", "sql"),
    ];
    for indent in [0, 2, 4] {
        let format = JsonFormat::with_indent(indent);
        let text = format.serialize(&blocks).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(format.parse(&text).unwrap(), blocks);
    }
}
