//! The Notion block model
//!
//! Blocks and rich-text spans are plain serde types shaped like the block
//! API's JSON. Both conversion directions meet here: the Markdown parser
//! builds them, the Markdown serializer and the JSON format read them.

pub mod nodes;

pub use nodes::{
    Annotations, Block, BookmarkData, CalloutData, CodeData, DividerData, EmbedData,
    EquationContent, EquationData, FileData, FileSource, FileUrl, HeadingData, Icon, Link,
    RichText, TableData, TableRowBlock, TableRowData, TextBlockData, TextContent, ToDoData,
};
