//! Generic Markdown token tree.
//!
//! The forward converter never looks at the tokenizer's own AST. The
//! tokenizer adapter (see `formats/markdown/tokenizer.rs`) lowers it into this
//! small, documented shape first: every node has a kind, an ordered list of
//! children, an optional raw payload (leaves) and a bag of kind-specific
//! attributes. Tokens are produced fresh per parse call and only read after.

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Block level
    Paragraph,
    /// Paragraph content of a tight list item
    BlockText,
    Heading,
    List,
    ListItem,
    TaskListItem,
    CodeBlock,
    BlockQuote,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell,
    ThematicBreak,
    BlockMath,
    BlockHtml,
    BlankLine,

    // Inline level
    Text,
    Strong,
    Emphasis,
    Strikethrough,
    Mark,
    Insert,
    CodeSpan,
    Link,
    Image,
    SoftBreak,
    LineBreak,
    InlineMath,
    InlineHtml,

    /// Anything the adapter does not model
    Unknown,
}

impl TokenKind {
    /// Whether tokens of this kind appear inside inline content.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            TokenKind::Text
                | TokenKind::Strong
                | TokenKind::Emphasis
                | TokenKind::Strikethrough
                | TokenKind::Mark
                | TokenKind::Insert
                | TokenKind::CodeSpan
                | TokenKind::Link
                | TokenKind::Image
                | TokenKind::SoftBreak
                | TokenKind::LineBreak
                | TokenKind::InlineMath
                | TokenKind::InlineHtml
        )
    }
}

/// Kind-specific attributes. Absent means the tokenizer did not report one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenAttrs {
    /// Heading level
    pub level: Option<u8>,
    /// List is ordered
    pub ordered: Option<bool>,
    /// Task list item is checked
    pub checked: Option<bool>,
    /// Link / image target
    pub url: Option<String>,
    /// Alternative image target used by some tokenizers
    pub src: Option<String>,
    /// Image alt text when reported as an attribute
    pub alt: Option<String>,
    pub title: Option<String>,
    /// Code fence info string
    pub info: Option<String>,
}

/// A node of the token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub children: Vec<Token>,
    pub raw: Option<String>,
    pub attrs: TokenAttrs,
}

impl Token {
    /// An empty token of the given kind.
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            children: Vec::new(),
            raw: None,
            attrs: TokenAttrs::default(),
        }
    }

    /// A leaf token carrying a raw payload.
    pub fn leaf(kind: TokenKind, raw: impl Into<String>) -> Self {
        Token {
            raw: Some(raw.into()),
            ..Token::new(kind)
        }
    }

    /// A container token with children.
    pub fn container(kind: TokenKind, children: Vec<Token>) -> Self {
        Token {
            children,
            ..Token::new(kind)
        }
    }

    /// Shorthand for a text leaf.
    pub fn text(raw: impl Into<String>) -> Self {
        Token::leaf(TokenKind::Text, raw)
    }

    pub fn with_attrs(mut self, attrs: TokenAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// The raw payload, or `""` for containers.
    pub fn raw(&self) -> &str {
        self.raw.as_deref().unwrap_or("")
    }

    /// The link / image target; empty strings read as absent.
    pub fn url(&self) -> Option<&str> {
        non_empty(self.attrs.url.as_deref())
    }

    pub fn src(&self) -> Option<&str> {
        non_empty(self.attrs.src.as_deref())
    }

    pub fn alt(&self) -> Option<&str> {
        non_empty(self.attrs.alt.as_deref())
    }

    pub fn info(&self) -> &str {
        self.attrs.info.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
