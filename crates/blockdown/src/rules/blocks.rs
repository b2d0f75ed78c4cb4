//! Per-kind rules for top-level tokens.

use blockdown_core::{Block, ListItem, Options, TableCell, Token, BULLET};

use super::inline::{push_mrkdwn, render_mrkdwn};
use super::plain::plain_text;
use super::table::render_cell;
use crate::utilities::{quote_multiline, Mrkdwn};

pub fn heading(children: &[Token]) -> Vec<Block> {
    vec![Block::header(plain_text(children))]
}

/// Paragraph content accumulated before blocks are built
enum Fragment {
    Text(Mrkdwn),
    Image(Block),
}

/// Adjacent inline runs share one section; every image gets its own block
pub fn paragraph(children: &[Token]) -> Vec<Block> {
    let fragments = children
        .iter()
        .fold(Vec::new(), |mut fragments: Vec<Fragment>, token| {
            match token {
                Token::Image { url, alt, title } => {
                    fragments.push(Fragment::Image(image(url, alt, title.as_deref())));
                }
                inline => match fragments.last_mut() {
                    Some(Fragment::Text(text)) => push_mrkdwn(inline, text),
                    _ => {
                        let mut text = Mrkdwn::new();
                        push_mrkdwn(inline, &mut text);
                        fragments.push(Fragment::Text(text));
                    }
                },
            }
            fragments
        });

    fragments
        .into_iter()
        .filter_map(|fragment| match fragment {
            Fragment::Text(text) if text.is_blank() => None,
            Fragment::Text(text) => Some(Block::section(text.repaired())),
            Fragment::Image(block) => Some(block),
        })
        .collect()
}

/// Image block; alt text falls back to the title, then the URL
fn image(url: &str, alt: &str, title: Option<&str>) -> Block {
    let alt_text = if alt.is_empty() {
        title.unwrap_or(url)
    } else {
        alt
    };
    Block::image(url, alt_text, title.map(str::to_string))
}

pub fn code_block(code: &str) -> Vec<Block> {
    vec![Block::section(format!("```\n{}\n```", code))]
}

pub fn list(ordered: bool, items: &[ListItem], options: &Options) -> Vec<Block> {
    if items.is_empty() {
        return Vec::new();
    }

    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let prefix = if ordered {
                format!("{}. ", i + 1)
            } else if let Some(checked) = item.checked {
                options.checkbox_prefix(checked)
            } else {
                BULLET.to_string()
            };
            prefix + &list_item_text(item)
        })
        .collect();

    vec![Block::section(lines.join("\n"))]
}

/// Text of the item's first paragraph, images dropped; raw text otherwise
fn list_item_text(item: &ListItem) -> String {
    item.children
        .iter()
        .find_map(|child| match child {
            Token::Paragraph(inlines) => Some(inlines),
            _ => None,
        })
        .map(|inlines| {
            inlines
                .iter()
                .filter(|token| !matches!(token, Token::Image { .. }))
                .map(render_mrkdwn)
                .collect()
        })
        .unwrap_or_else(|| item.raw.clone())
}

/// Only paragraphs survive inside a quote; multi-line sections get quoted
pub fn blockquote(children: &[Token]) -> Vec<Block> {
    children
        .iter()
        .filter_map(|child| match child {
            Token::Paragraph(inlines) => Some(paragraph(inlines)),
            other => {
                tracing::debug!(kind = other.kind(), "dropping non-paragraph inside blockquote");
                None
            }
        })
        .flatten()
        .map(|block| {
            let quoted = match &block {
                Block::Section { text } => quote_multiline(text.text()),
                _ => None,
            };
            quoted.map(Block::section).unwrap_or(block)
        })
        .collect()
}

pub fn table(header: &[Vec<Token>], rows: &[Vec<Vec<Token>>]) -> Vec<Block> {
    let rows: Vec<Vec<TableCell>> = std::iter::once(header)
        .chain(rows.iter().map(Vec::as_slice))
        .map(|row| row.iter().map(|cell| render_cell(cell)).collect())
        .collect();
    vec![Block::table(rows)]
}
