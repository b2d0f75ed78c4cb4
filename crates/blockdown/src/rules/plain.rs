//! Inline tokens to unstyled text.

use blockdown_core::Token;

/// Plain-text fragments of `tokens`, borrowed from the tree.
///
/// Styling is dropped, line breaks vanish and images contribute their
/// title, or their URL when untitled.
pub fn plain_fragments(tokens: &[Token]) -> Vec<&str> {
    let mut fragments = Vec::new();
    for token in tokens {
        collect(token, &mut fragments);
    }
    fragments
}

/// Concatenated plain text of `tokens`
pub fn plain_text(tokens: &[Token]) -> String {
    plain_fragments(tokens).concat()
}

fn collect<'a>(token: &'a Token, out: &mut Vec<&'a str>) {
    match token {
        Token::Text(text) | Token::CodeSpan(text) | Token::Html(text) => out.push(text),

        Token::Link { children, .. }
        | Token::Emphasis(children)
        | Token::Strong(children)
        | Token::Strikethrough(children) => {
            for child in children {
                collect(child, out);
            }
        }

        Token::Image { url, title, .. } => out.push(title.as_deref().unwrap_or(url)),

        Token::LineBreak
        | Token::Heading { .. }
        | Token::Paragraph(_)
        | Token::Code { .. }
        | Token::BlockQuote(_)
        | Token::List { .. }
        | Token::Table { .. }
        | Token::ThematicBreak => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_stripped() {
        let tokens = vec![
            Token::Strong(vec![Token::text("a "), Token::Emphasis(vec![Token::text("b")])]),
            Token::text(" "),
            Token::Link {
                url: "https://example.com".to_string(),
                title: None,
                children: vec![Token::Strikethrough(vec![Token::text("c")])],
            },
        ];
        assert_eq!(plain_fragments(&tokens), vec!["a ", "b", " ", "c"]);
        assert_eq!(plain_text(&tokens), "a b c");
    }

    #[test]
    fn test_image_title_then_url() {
        let titled = Token::Image {
            url: "u".to_string(),
            alt: "alt".to_string(),
            title: Some("t".to_string()),
        };
        let untitled = Token::Image {
            url: "u".to_string(),
            alt: "alt".to_string(),
            title: None,
        };
        assert_eq!(plain_text(&[titled, untitled]), "tu");
    }

    #[test]
    fn test_literals_and_breaks() {
        let tokens = vec![
            Token::CodeSpan("x".to_string()),
            Token::LineBreak,
            Token::Html("<b>".to_string()),
        ];
        assert_eq!(plain_text(&tokens), "x<b>");
    }
}
