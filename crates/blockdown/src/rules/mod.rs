//! Rule set for token tree to block conversion.
//!
//! Three independent dispatch tables live here: top-level tokens to blocks
//! ([`convert_token`]), inline tokens to mrkdwn ([`render_mrkdwn`]) and cell
//! content to table cells ([`render_cell`]). Kinds a table does not handle
//! produce nothing.

mod blocks;
mod inline;
mod plain;
mod table;

pub use inline::render_mrkdwn;
pub use plain::{plain_fragments, plain_text};
pub use table::render_cell;

use blockdown_core::{Block, Options, Token};

use crate::html;

/// Convert one top-level token to zero or more blocks
pub fn convert_token(token: &Token, options: &Options) -> Vec<Block> {
    match token {
        Token::Heading { children, .. } => blocks::heading(children),

        Token::Paragraph(children) => blocks::paragraph(children),

        Token::Code { text, .. } => blocks::code_block(text),

        Token::BlockQuote(children) => blocks::blockquote(children),

        Token::List { ordered, items, .. } => blocks::list(*ordered, items, options),

        Token::Table { header, rows } => blocks::table(header, rows),

        Token::ThematicBreak => vec![Block::divider()],

        Token::Html(raw) => html::image_blocks(raw),

        Token::Text(_)
        | Token::Emphasis(_)
        | Token::Strong(_)
        | Token::Strikethrough(_)
        | Token::LineBreak
        | Token::Image { .. }
        | Token::CodeSpan(_)
        | Token::Link { .. } => {
            tracing::debug!(kind = token.kind(), "skipping unsupported top-level token");
            Vec::new()
        }
    }
}

/// Convert a token sequence, concatenating blocks in document order
pub fn convert_tokens(tokens: &[Token], options: &Options) -> Vec<Block> {
    tokens
        .iter()
        .flat_map(|token| convert_token(token, options))
        .collect()
}
