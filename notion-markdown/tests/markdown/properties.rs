//! Property tests over generated documents

use notion_markdown::blocks::{Block, RichText};
use notion_markdown::{to_blocks, to_markdown};
use proptest::prelude::*;

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..6).prop_map(|words| words.join(" "))
}

/// One Markdown block built from plain words.
fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        words(),
        (1usize..=3, words()).prop_map(|(level, text)| format!("{} {text}", "#".repeat(level))),
        prop::collection::vec(words(), 1..4).prop_map(|items| {
            items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        (any::<bool>(), words())
            .prop_map(|(done, text)| format!("- [{}] {text}", if done { "x" } else { " " })),
        words().prop_map(|text| format!("> {text}")),
        words().prop_map(|text| format!("**{text}** and *{text}*")),
        Just("---".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(block(), 0..8).prop_map(|blocks| blocks.join("\n\n") + "\n")
}

fn all_rich_text(blocks: &[Block]) -> Vec<&RichText> {
    blocks
        .iter()
        .flat_map(|block| block.rich_text().unwrap_or_default())
        .collect()
}

proptest! {
    #[test]
    fn export_then_import_is_identity(markdown in document()) {
        let blocks = to_blocks(&markdown);
        let exported = to_markdown(&blocks);
        prop_assert_eq!(to_blocks(&exported), blocks);
    }

    #[test]
    fn export_is_idempotent(markdown in document()) {
        let once = to_markdown(&to_blocks(&markdown));
        let twice = to_markdown(&to_blocks(&once));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn plain_words_carry_no_annotations(text in words()) {
        let blocks = to_blocks(&format!("{text}\n"));
        for item in all_rich_text(&blocks) {
            match item {
                RichText::Text { annotations, text } => {
                    prop_assert!(annotations.is_none());
                    prop_assert!(text.link.is_none());
                }
                RichText::Equation { .. } => prop_assert!(false, "unexpected equation"),
            }
        }
    }

    #[test]
    fn output_ends_in_exactly_one_newline(markdown in document()) {
        let exported = to_markdown(&to_blocks(&markdown));
        let single_newline = exported.ends_with('\n') && !exported.ends_with("\n\n");
        prop_assert!(exported.is_empty() || single_newline);
    }
}
