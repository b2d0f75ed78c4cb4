//! Table cells to raw or rich text.

use blockdown_core::{RichTextRun, TableCell, TextStyle, Token};

use super::plain::plain_text;

/// Convert a cell's inline content.
///
/// A cell with no runs or a single unstyled text run stays raw text;
/// anything else becomes a rich text cell.
pub fn render_cell(children: &[Token]) -> TableCell {
    let mut runs: Vec<RichTextRun> = children.iter().filter_map(cell_run).collect();

    if runs.is_empty() {
        return TableCell::raw_text("");
    }
    if let [RichTextRun::Text { text, style }] = runs.as_mut_slice() {
        if style.is_plain() {
            return TableCell::raw_text(std::mem::take(text));
        }
    }
    TableCell::rich_text(runs)
}

/// One run per child; nested styling collapses to the outer style
fn cell_run(token: &Token) -> Option<RichTextRun> {
    match token {
        Token::Text(text) => Some(RichTextRun::plain(text.as_str())),

        Token::Strong(children) => Some(RichTextRun::styled(plain_text(children), TextStyle::BOLD)),

        Token::Emphasis(children) => {
            Some(RichTextRun::styled(plain_text(children), TextStyle::ITALIC))
        }

        Token::Strikethrough(children) => {
            Some(RichTextRun::styled(plain_text(children), TextStyle::STRIKE))
        }

        Token::CodeSpan(code) => Some(RichTextRun::styled(code.as_str(), TextStyle::CODE)),

        Token::Link { url, children, .. } => {
            let text = plain_text(children);
            let text = if text.is_empty() { url.clone() } else { text };
            Some(RichTextRun::link(url.as_str(), text))
        }

        Token::Image { url, title, .. } => {
            Some(RichTextRun::plain(title.as_deref().unwrap_or(url)))
        }

        Token::LineBreak
        | Token::Html(_)
        | Token::Heading { .. }
        | Token::Paragraph(_)
        | Token::Code { .. }
        | Token::BlockQuote(_)
        | Token::List { .. }
        | Token::Table { .. }
        | Token::ThematicBreak => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        assert_eq!(render_cell(&[]), TableCell::raw_text(""));
        assert_eq!(render_cell(&[Token::LineBreak]), TableCell::raw_text(""));
    }

    #[test]
    fn test_single_plain_run_is_raw() {
        assert_eq!(render_cell(&[Token::text("42")]), TableCell::raw_text("42"));
    }

    #[test]
    fn test_single_styled_run_is_rich() {
        let cell = render_cell(&[Token::Strong(vec![Token::text("hot")])]);
        assert_eq!(
            cell,
            TableCell::rich_text(vec![RichTextRun::styled("hot", TextStyle::BOLD)])
        );
    }

    #[test]
    fn test_nested_style_flattens_to_outer() {
        let cell = render_cell(&[Token::Strong(vec![
            Token::text("a "),
            Token::Emphasis(vec![Token::text("b")]),
        ])]);
        assert_eq!(
            cell,
            TableCell::rich_text(vec![RichTextRun::styled("a b", TextStyle::BOLD)])
        );
    }

    #[test]
    fn test_mixed_runs() {
        let cell = render_cell(&[
            Token::text("see "),
            Token::Link {
                url: "https://example.com".to_string(),
                title: None,
                children: vec![],
            },
            Token::CodeSpan("x".to_string()),
            Token::Html("<br>".to_string()),
        ]);
        assert_eq!(
            cell,
            TableCell::rich_text(vec![
                RichTextRun::plain("see "),
                RichTextRun::link("https://example.com", "https://example.com"),
                RichTextRun::styled("x", TextStyle::CODE),
            ])
        );
    }

    #[test]
    fn test_image_uses_title_or_url() {
        let cell = render_cell(&[Token::Image {
            url: "https://x.test/a.png".to_string(),
            alt: "a".to_string(),
            title: None,
        }]);
        assert_eq!(cell, TableCell::raw_text("https://x.test/a.png"));
    }
}
