//! blockdown-core - Markdown token tree and chat block model
//!
//! This crate provides the data structures shared by the `blockdown`
//! converter: the token tree it consumes, the blocks it produces and the
//! options that tune it.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──tokenizer──▶ ┌────────────┐            ┌────────┐
//!                         │ Token tree │ ──rules──▶ │ Blocks │ ──▶ JSON
//! Other sources ─────────▶└────────────┘            └────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockdown_core::{Block, TableCell};
//!
//! let blocks = vec![
//!     Block::header("Weekly report"),
//!     Block::section("*All* systems nominal"),
//!     Block::divider(),
//!     Block::table(vec![vec![TableCell::raw_text("ok")]]),
//! ];
//! assert_eq!(blocks[0].text(), Some("Weekly report"));
//! ```

mod ast;
mod blocks;
pub mod limits;
mod options;

pub use ast::{ListItem, Token};
pub use blocks::{Block, RichTextElement, RichTextRun, TableCell, TextObject, TextStyle};
pub use options::{CheckboxPrefixFn, Options, BULLET};
