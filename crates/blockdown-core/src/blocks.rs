//! Chat block model
//!
//! Blocks mirror the target surface's JSON schema through serde. Every
//! capped field is cut to its limit by the constructors below, so values
//! built through them are valid without a separate validation pass.

use serde::Serialize;

use crate::limits::{
    truncated, MAX_HEADER_LENGTH, MAX_IMAGE_ALT_LENGTH, MAX_IMAGE_TITLE_LENGTH, MAX_TABLE_COLUMNS,
    MAX_TABLE_ROWS, MAX_TEXT_LENGTH,
};

/// A top-level block.
///
/// Only the constructors ([`Block::section`], [`Block::header`],
/// [`Block::image`], [`Block::table`]) enforce the size limits. A variant
/// built by hand is serialized as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Text rendered with the surface's inline markup
    Section { text: TextObject },

    /// Large plain-text title
    Header { text: TextObject },

    /// Standalone image
    Image {
        image_url: String,
        alt_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<TextObject>,
    },

    /// Horizontal separator
    Divider,

    /// Grid of cells
    Table { rows: Vec<Vec<TableCell>> },
}

/// A text payload tagged with its markup kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
    PlainText { text: String },
}

impl TextObject {
    pub fn text(&self) -> &str {
        match self {
            TextObject::Mrkdwn { text } | TextObject::PlainText { text } => text,
        }
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableCell {
    RawText { text: String },
    RichText { elements: Vec<RichTextElement> },
}

/// Container element of a rich text cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    RichTextSection { elements: Vec<RichTextRun> },
}

/// A styled run inside a rich text cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextRun {
    Text {
        text: String,
        #[serde(skip_serializing_if = "TextStyle::is_plain")]
        style: TextStyle,
    },
    Link { url: String, text: String },
}

/// Style flags of a rich text run; flags do not compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl TextStyle {
    pub const BOLD: Self = Self::plain().with_bold();
    pub const ITALIC: Self = Self::plain().with_italic();
    pub const STRIKE: Self = Self::plain().with_strike();
    pub const CODE: Self = Self::plain().with_code();

    pub const fn plain() -> Self {
        Self {
            bold: false,
            italic: false,
            strike: false,
            code: false,
        }
    }

    const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    const fn with_strike(mut self) -> Self {
        self.strike = true;
        self
    }

    const fn with_code(mut self) -> Self {
        self.code = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }
}

impl Block {
    /// Section with mrkdwn text, capped at [`MAX_TEXT_LENGTH`]
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn {
                text: truncated(text, MAX_TEXT_LENGTH),
            },
        }
    }

    /// Header with plain text, capped at [`MAX_HEADER_LENGTH`]
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: TextObject::PlainText {
                text: truncated(text, MAX_HEADER_LENGTH),
            },
        }
    }

    /// Image block; alt text and title are capped independently
    pub fn image(url: impl Into<String>, alt_text: impl Into<String>, title: Option<String>) -> Self {
        Block::Image {
            image_url: url.into(),
            alt_text: truncated(alt_text, MAX_IMAGE_ALT_LENGTH),
            title: title.map(|t| TextObject::PlainText {
                text: truncated(t, MAX_IMAGE_TITLE_LENGTH),
            }),
        }
    }

    pub fn divider() -> Self {
        Block::Divider
    }

    /// Table keeping at most [`MAX_TABLE_ROWS`] rows of at most
    /// [`MAX_TABLE_COLUMNS`] cells each
    pub fn table(mut rows: Vec<Vec<TableCell>>) -> Self {
        if rows.len() > MAX_TABLE_ROWS {
            tracing::trace!(rows = rows.len(), limit = MAX_TABLE_ROWS, "truncating table rows");
            rows.truncate(MAX_TABLE_ROWS);
        }
        for row in &mut rows {
            row.truncate(MAX_TABLE_COLUMNS);
        }
        Block::Table { rows }
    }

    /// Text of a section or header
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Section { text } | Block::Header { text } => Some(text.text()),
            Block::Image { .. } | Block::Divider | Block::Table { .. } => None,
        }
    }
}

impl TableCell {
    pub fn raw_text(text: impl Into<String>) -> Self {
        TableCell::RawText { text: text.into() }
    }

    /// Rich text cell holding `runs` in a single section
    pub fn rich_text(runs: Vec<RichTextRun>) -> Self {
        TableCell::RichText {
            elements: vec![RichTextElement::RichTextSection { elements: runs }],
        }
    }
}

impl RichTextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::plain())
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        RichTextRun::Text {
            text: text.into(),
            style,
        }
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        RichTextRun::Link {
            url: url.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_constructors_cap() {
        let long = "x".repeat(MAX_TEXT_LENGTH + 1);
        let built = Block::Section {
            text: TextObject::Mrkdwn { text: long.clone() },
        };
        assert_eq!(built.text().map(str::len), Some(MAX_TEXT_LENGTH + 1));
        assert_eq!(Block::section(long).text().map(str::len), Some(MAX_TEXT_LENGTH));
    }

    #[test]
    fn test_section_capped() {
        let block = Block::section("a".repeat(3500));
        assert_eq!(block.text().map(str::len), Some(MAX_TEXT_LENGTH));
    }

    #[test]
    fn test_header_capped() {
        let block = Block::header("h".repeat(200));
        assert_eq!(block.text().map(|t| t.chars().count()), Some(MAX_HEADER_LENGTH));
    }

    #[test]
    fn test_image_alt_and_title_capped_independently() {
        let block = Block::image("https://x.test/a.png", "a".repeat(2500), Some("t".repeat(10)));
        match block {
            Block::Image {
                alt_text, title, ..
            } => {
                assert_eq!(alt_text.len(), MAX_IMAGE_ALT_LENGTH);
                assert_eq!(title.map(|t| t.text().len()), Some(10));
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_table_capped() {
        let row: Vec<TableCell> = (0..25).map(|i| TableCell::raw_text(i.to_string())).collect();
        let block = Block::table(vec![row; 120]);
        match block {
            Block::Table { rows } => {
                assert_eq!(rows.len(), MAX_TABLE_ROWS);
                assert!(rows.iter().all(|r| r.len() == MAX_TABLE_COLUMNS));
                assert_eq!(rows[0][19], TableCell::raw_text("19"));
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_section_json() {
        let value = serde_json::to_value(Block::section("*hi*")).unwrap();
        assert_eq!(
            value,
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "*hi*"}})
        );
    }

    #[test]
    fn test_header_json() {
        let value = serde_json::to_value(Block::header("Title")).unwrap();
        assert_eq!(
            value,
            json!({"type": "header", "text": {"type": "plain_text", "text": "Title"}})
        );
    }

    #[test]
    fn test_image_json_without_title() {
        let value = serde_json::to_value(Block::image("u", "alt", None)).unwrap();
        assert_eq!(
            value,
            json!({"type": "image", "image_url": "u", "alt_text": "alt"})
        );
    }

    #[test]
    fn test_divider_json() {
        let value = serde_json::to_value(Block::divider()).unwrap();
        assert_eq!(value, json!({"type": "divider"}));
    }

    #[test]
    fn test_rich_text_cell_json() {
        let cell = TableCell::rich_text(vec![
            RichTextRun::plain("a "),
            RichTextRun::styled("b", TextStyle::BOLD),
            RichTextRun::link("https://example.com", "c"),
        ]);
        let value = serde_json::to_value(cell).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "rich_text",
                "elements": [{
                    "type": "rich_text_section",
                    "elements": [
                        {"type": "text", "text": "a "},
                        {"type": "text", "text": "b", "style": {"bold": true}},
                        {"type": "link", "url": "https://example.com", "text": "c"}
                    ]
                }]
            })
        );
    }
}
