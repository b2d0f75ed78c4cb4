//! Markdown token tree
//!
//! This module defines the nodes of a parsed Markdown document as handed to
//! the converter. Block-level and inline kinds share one enum; the converter
//! decides per context which kinds it understands.

/// A Markdown token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Heading with level (1-6) and inline content
    Heading { level: u8, children: Vec<Token> },

    /// Paragraph containing inline content
    Paragraph(Vec<Token>),

    /// Fenced or indented code block
    Code {
        language: Option<String>,
        text: String,
    },

    /// Block quote containing nested blocks
    BlockQuote(Vec<Token>),

    /// List (ordered or unordered)
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<ListItem>,
    },

    /// Table with a header row and body rows; each cell holds inline content
    Table {
        header: Vec<Vec<Token>>,
        rows: Vec<Vec<Vec<Token>>>,
    },

    /// Thematic break (horizontal rule)
    ThematicBreak,

    /// Raw HTML, block or inline
    Html(String),

    /// Plain text
    Text(String),

    /// Emphasis (italic)
    Emphasis(Vec<Token>),

    /// Strong emphasis (bold)
    Strong(Vec<Token>),

    /// Strikethrough
    Strikethrough(Vec<Token>),

    /// Hard line break
    LineBreak,

    /// Image with alt text, URL, and optional title
    Image {
        url: String,
        alt: String,
        title: Option<String>,
    },

    /// Inline code
    CodeSpan(String),

    /// Link with content, URL, and optional title
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Token>,
    },
}

/// A list item containing blocks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    /// Task list state; `None` for plain items
    pub checked: Option<bool>,
    pub children: Vec<Token>,
    /// Source text of the item, used when no paragraph child exists
    pub raw: String,
}

impl ListItem {
    pub fn new(children: Vec<Token>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn from_inlines(inlines: Vec<Token>) -> Self {
        Self::new(vec![Token::Paragraph(inlines)])
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }
}

impl Token {
    /// Shorthand for a text token
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(text.into())
    }

    /// Whether this kind only appears inside paragraphs, headings and cells
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Token::Text(_)
                | Token::Emphasis(_)
                | Token::Strong(_)
                | Token::Strikethrough(_)
                | Token::LineBreak
                | Token::Image { .. }
                | Token::CodeSpan(_)
                | Token::Link { .. }
        )
    }

    /// Child tokens of container kinds; empty for leaves
    pub fn children(&self) -> &[Token] {
        match self {
            Token::Heading { children, .. }
            | Token::Paragraph(children)
            | Token::BlockQuote(children)
            | Token::Emphasis(children)
            | Token::Strong(children)
            | Token::Strikethrough(children)
            | Token::Link { children, .. } => children,
            Token::Code { .. }
            | Token::List { .. }
            | Token::Table { .. }
            | Token::ThematicBreak
            | Token::Html(_)
            | Token::Text(_)
            | Token::LineBreak
            | Token::Image { .. }
            | Token::CodeSpan(_) => &[],
        }
    }

    /// Short kind name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Heading { .. } => "heading",
            Token::Paragraph(_) => "paragraph",
            Token::Code { .. } => "code",
            Token::BlockQuote(_) => "blockquote",
            Token::List { .. } => "list",
            Token::Table { .. } => "table",
            Token::ThematicBreak => "thematic_break",
            Token::Html(_) => "html",
            Token::Text(_) => "text",
            Token::Emphasis(_) => "emphasis",
            Token::Strong(_) => "strong",
            Token::Strikethrough(_) => "strikethrough",
            Token::LineBreak => "line_break",
            Token::Image { .. } => "image",
            Token::CodeSpan(_) => "code_span",
            Token::Link { .. } => "link",
        }
    }
}
