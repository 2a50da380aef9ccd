//! Notion block and rich-text objects.
//!
//! The types serialize to exactly the JSON the block API accepts when
//! creating blocks: `{"type": "<kind>", "<kind>": { ...payload }}`. Optional
//! fields are omitted rather than written as `null`, `false` or `[]`, so a
//! block built here compares equal to the same block read back from JSON.

use serde::{Deserialize, Serialize};

/// One structural unit of a Notion page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        paragraph: TextBlockData,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: HeadingData,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: HeadingData,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: HeadingData,
    },
    BulletedListItem {
        bulleted_list_item: TextBlockData,
    },
    NumberedListItem {
        numbered_list_item: TextBlockData,
    },
    ToDo {
        to_do: ToDoData,
    },
    Code {
        code: CodeData,
    },
    Quote {
        quote: TextBlockData,
    },
    Callout {
        callout: CalloutData,
    },
    Toggle {
        toggle: TextBlockData,
    },
    Divider {
        divider: DividerData,
    },
    Table {
        table: TableData,
    },
    TableRow {
        table_row: TableRowData,
    },
    Image {
        image: FileData,
    },
    Equation {
        equation: EquationData,
    },
    Bookmark {
        bookmark: BookmarkData,
    },
    Embed {
        embed: EmbedData,
    },
    Video {
        video: FileData,
    },
    /// Any block type this crate does not model
    #[serde(other)]
    Unsupported,
}

/// Payload shared by paragraphs, bulleted/numbered items, quotes and toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlockData {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingData {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub is_toggleable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoData {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeData {
    pub rich_text: Vec<RichText>,
    #[serde(default = "plain_text_language")]
    pub language: String,
}

fn plain_text_language() -> String {
    crate::common::languages::PLAIN_TEXT.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutData {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerData {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub table_width: usize,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
    #[serde(default)]
    pub children: Vec<TableRowBlock>,
}

/// A row inside a table's `children`. Rows are only valid there, so they get
/// their own single-variant type instead of being any [`Block`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableRowBlock {
    TableRow { table_row: TableRowData },
}

impl TableRowBlock {
    pub fn new(cells: Vec<Vec<RichText>>) -> Self {
        TableRowBlock::TableRow {
            table_row: TableRowData { cells },
        }
    }

    pub fn cells(&self) -> &[Vec<RichText>] {
        let TableRowBlock::TableRow { table_row } = self;
        &table_row.cells
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowData {
    pub cells: Vec<Vec<RichText>>,
}

/// Image and video payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

/// Where a file lives: an external URL, or a Notion-hosted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    External { external: FileUrl },
    File { file: FileUrl },
}

impl FileSource {
    pub fn url(&self) -> &str {
        match self {
            FileSource::External { external } => &external.url,
            FileSource::File { file } => &file.url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUrl {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkData {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedData {
    pub url: String,
}

/// One atomically styled run of inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text {
        text: TextContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
    Equation {
        equation: EquationContent,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationContent {
    pub expression: String,
}

/// Styling applied to a text span. Only set flags are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The color value the block API uses for "no color".
pub const DEFAULT_COLOR: &str = "default";

impl Annotations {
    /// The color, unless it is absent, empty or the API's `"default"`.
    pub fn effective_color(&self) -> Option<&str> {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty() && *c != DEFAULT_COLOR)
    }

    pub fn is_empty(&self) -> bool {
        !(self.bold
            || self.italic
            || self.strikethrough
            || self.underline
            || self.code
            || self.effective_color().is_some())
    }
}

impl RichText {
    /// A text span without annotations or link.
    pub fn plain(content: impl Into<String>) -> Self {
        RichText::Text {
            text: TextContent {
                content: content.into(),
                link: None,
            },
            annotations: None,
        }
    }

    /// A text span. Empty annotations are dropped so they never serialize.
    pub fn text(
        content: impl Into<String>,
        annotations: Option<Annotations>,
        link: Option<&str>,
    ) -> Self {
        RichText::Text {
            text: TextContent {
                content: content.into(),
                link: link.map(|url| Link {
                    url: url.to_string(),
                }),
            },
            annotations: annotations.filter(|a| !a.is_empty()),
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        RichText::Equation {
            equation: EquationContent {
                expression: expression.into(),
            },
        }
    }

    /// The visible text of the span; equations yield their expression.
    pub fn plain_text(&self) -> &str {
        match self {
            RichText::Text { text, .. } => &text.content,
            RichText::Equation { equation } => &equation.expression,
        }
    }
}

impl Block {
    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Block::Paragraph {
            paragraph: TextBlockData {
                rich_text,
                children: Vec::new(),
            },
        }
    }

    /// A heading block; levels outside 1..=3 are clamped into it.
    pub fn heading(level: u8, rich_text: Vec<RichText>) -> Self {
        let data = HeadingData {
            rich_text,
            is_toggleable: false,
        };
        match level {
            0 | 1 => Block::Heading1 { heading_1: data },
            2 => Block::Heading2 { heading_2: data },
            _ => Block::Heading3 { heading_3: data },
        }
    }

    pub fn bulleted_list_item(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::BulletedListItem {
            bulleted_list_item: TextBlockData {
                rich_text,
                children,
            },
        }
    }

    pub fn numbered_list_item(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::NumberedListItem {
            numbered_list_item: TextBlockData {
                rich_text,
                children,
            },
        }
    }

    pub fn to_do(rich_text: Vec<RichText>, checked: bool, children: Vec<Block>) -> Self {
        Block::ToDo {
            to_do: ToDoData {
                rich_text,
                checked,
                children,
            },
        }
    }

    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        Block::Code {
            code: CodeData {
                rich_text: vec![RichText::plain(content)],
                language: language.into(),
            },
        }
    }

    pub fn quote(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::Quote {
            quote: TextBlockData {
                rich_text,
                children,
            },
        }
    }

    pub fn callout(rich_text: Vec<RichText>, emoji: Option<String>, color: Option<String>) -> Self {
        Block::Callout {
            callout: CalloutData {
                rich_text,
                icon: emoji.map(|emoji| Icon { emoji: Some(emoji) }),
                color,
                children: Vec::new(),
            },
        }
    }

    pub fn toggle(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        Block::Toggle {
            toggle: TextBlockData {
                rich_text,
                children,
            },
        }
    }

    pub fn divider() -> Self {
        Block::Divider {
            divider: DividerData {},
        }
    }

    pub fn table(table: TableData) -> Self {
        Block::Table { table }
    }

    /// An external image; an empty caption is omitted.
    pub fn image(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Block::Image {
            image: FileData {
                source: FileSource::External {
                    external: FileUrl { url: url.into() },
                },
                caption,
            },
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Block::Equation {
            equation: EquationData {
                expression: expression.into(),
            },
        }
    }

    /// The `type` discriminator as written in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Heading3 { .. } => "heading_3",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::ToDo { .. } => "to_do",
            Block::Code { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::Callout { .. } => "callout",
            Block::Toggle { .. } => "toggle",
            Block::Divider { .. } => "divider",
            Block::Table { .. } => "table",
            Block::TableRow { .. } => "table_row",
            Block::Image { .. } => "image",
            Block::Equation { .. } => "equation",
            Block::Bookmark { .. } => "bookmark",
            Block::Embed { .. } => "embed",
            Block::Video { .. } => "video",
            Block::Unsupported => "unsupported",
        }
    }

    /// Whether this block is an item of a Markdown list.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Block::BulletedListItem { .. } | Block::NumberedListItem { .. } | Block::ToDo { .. }
        )
    }

    /// The block's own rich text, if its kind carries one.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            Block::Paragraph { paragraph: data }
            | Block::BulletedListItem {
                bulleted_list_item: data,
            }
            | Block::NumberedListItem {
                numbered_list_item: data,
            }
            | Block::Quote { quote: data }
            | Block::Toggle { toggle: data } => Some(&data.rich_text),
            Block::Heading1 { heading_1: data }
            | Block::Heading2 { heading_2: data }
            | Block::Heading3 { heading_3: data } => Some(&data.rich_text),
            Block::ToDo { to_do } => Some(&to_do.rich_text),
            Block::Code { code } => Some(&code.rich_text),
            Block::Callout { callout } => Some(&callout.rich_text),
            _ => None,
        }
    }
}
