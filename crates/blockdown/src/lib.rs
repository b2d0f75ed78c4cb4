//! # blockdown
//!
//! Convert Markdown to chat message blocks.
//!
//! Chat surfaces that render structured messages accept neither raw Markdown
//! nor HTML. They take a list of blocks (sections, headers, images,
//! dividers, tables) whose text uses a restricted inline markup ("mrkdwn")
//! with its own delimiters and size limits. This crate walks a Markdown
//! token tree and produces those blocks.
//!
//! ## Design
//!
//! - **Token tree in**: the converter consumes [`Token`]s, so any Markdown
//!   tokenizer can feed it. The default `markdown` feature bundles a
//!   pulldown-cmark front end.
//! - **Best effort**: constructs without a mapping produce no blocks instead
//!   of failing the whole message.
//! - **Valid by construction**: block constructors enforce every size limit.
//!
//! ## Example (tokens)
//!
//! ```rust
//! use blockdown::{Block, BlockConverter, Token};
//!
//! let converter = BlockConverter::new();
//! let blocks = converter.convert(&[Token::Paragraph(vec![
//!     Token::Strong(vec![Token::text("Hello")]),
//!     Token::text(" World"),
//! ])]);
//! assert_eq!(blocks, vec![Block::section("*Hello* World")]);
//! ```
//!
//! ## Example (Markdown string)
//!
//! ```rust
//! use blockdown::{markdown_to_blocks, to_json, Options};
//!
//! let blocks = markdown_to_blocks("# Status\n\nAll **green**", &Options::default());
//! let json = to_json(&blocks).unwrap();
//! assert!(json.contains("\"type\":\"header\""));
//! ```

pub mod html;
#[cfg(feature = "markdown")]
pub mod markdown;
mod rules;
mod service;
mod utilities;

pub use blockdown_core::{
    limits, Block, CheckboxPrefixFn, ListItem, Options, RichTextElement, RichTextRun, TableCell,
    TextObject, TextStyle, Token, BULLET,
};
#[cfg(feature = "markdown")]
pub use markdown::parse_markdown;
pub use rules::{plain_fragments, plain_text, render_cell, render_mrkdwn};
pub use service::BlockConverter;
pub use utilities::repair_delimiter_spacing;

/// Error type for blockdown operations
#[derive(Debug, thiserror::Error)]
pub enum BlockdownError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlockdownError>;

/// Convert top-level tokens to blocks
pub fn tokens_to_blocks(tokens: &[Token], options: &Options) -> Vec<Block> {
    rules::convert_tokens(tokens, options)
}

/// Tokenize Markdown and convert it to blocks
#[cfg(feature = "markdown")]
pub fn markdown_to_blocks(markdown: &str, options: &Options) -> Vec<Block> {
    tokens_to_blocks(&parse_markdown(markdown), options)
}

/// Serialize blocks as the surface's JSON blocks array
pub fn to_json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string(blocks)?)
}

/// Serialize blocks as a JSON value
pub fn to_json_value(blocks: &[Block]) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(blocks)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_array() {
        let json = to_json(&[Block::divider(), Block::header("h")]).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"divider"},{"type":"header","text":{"type":"plain_text","text":"h"}}]"#
        );
    }

    #[test]
    fn test_to_json_value_empty() {
        assert_eq!(to_json_value(&[]).unwrap(), serde_json::json!([]));
    }

    #[test]
    fn test_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BlockdownError::from(err);
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
