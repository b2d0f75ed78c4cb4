//! Inline tokens to mrkdwn.

use blockdown_core::Token;

use crate::utilities::Mrkdwn;

/// Render an inline token as mrkdwn
pub fn render_mrkdwn(token: &Token) -> String {
    let mut out = Mrkdwn::new();
    push_mrkdwn(token, &mut out);
    out.into_string()
}

/// Append the mrkdwn rendering of `token` to `out`.
///
/// Style delimiters are recorded as markup; text, code and URLs as payload.
pub fn push_mrkdwn(token: &Token, out: &mut Mrkdwn) {
    match token {
        Token::Text(text) => out.push_str(text),

        Token::Emphasis(children) => wrap(children, '_', out),

        Token::Strong(children) => wrap(children, '*', out),

        Token::Strikethrough(children) => wrap(children, '~', out),

        Token::CodeSpan(code) => {
            out.push('`');
            out.push_str(code);
            out.push('`');
        }

        // The trailing space keeps the surface from gluing the next word
        // onto the link
        Token::Link { url, children, .. } => {
            out.push('<');
            out.push_str(url);
            out.push('|');
            push_all(children, out);
            out.push_str("> ");
        }

        Token::LineBreak
        | Token::Image { .. }
        | Token::Html(_)
        | Token::Heading { .. }
        | Token::Paragraph(_)
        | Token::Code { .. }
        | Token::BlockQuote(_)
        | Token::List { .. }
        | Token::Table { .. }
        | Token::ThematicBreak => {}
    }
}

fn push_all(tokens: &[Token], out: &mut Mrkdwn) {
    for token in tokens {
        push_mrkdwn(token, out);
    }
}

fn wrap(children: &[Token], delimiter: char, out: &mut Mrkdwn) {
    out.push_delimiter(delimiter);
    push_all(children, out);
    out.push_delimiter(delimiter);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    #[test]
    fn test_text_verbatim() {
        assert_eq!(render_mrkdwn(&text("a *b* c")), "a *b* c");
    }

    #[test]
    fn test_styles() {
        assert_eq!(render_mrkdwn(&Token::Emphasis(vec![text("i")])), "_i_");
        assert_eq!(render_mrkdwn(&Token::Strong(vec![text("b")])), "*b*");
        assert_eq!(render_mrkdwn(&Token::Strikethrough(vec![text("s")])), "~s~");
    }

    #[test]
    fn test_nested_styles() {
        let token = Token::Strong(vec![
            text("a "),
            Token::Strikethrough(vec![text("b")]),
        ]);
        assert_eq!(render_mrkdwn(&token), "*a ~b~*");
    }

    #[test]
    fn test_only_style_delimiters_are_markup() {
        let mut out = Mrkdwn::new();
        push_mrkdwn(&text("my_var_name"), &mut out);
        push_mrkdwn(&Token::Strong(vec![text("x")]), &mut out);
        push_mrkdwn(&text("y"), &mut out);
        assert_eq!(out.repaired(), "my_var_name *x* y");
        assert_eq!(out.into_string(), "my_var_name*x*y");
    }

    #[test]
    fn test_code_span_not_rendered_recursively() {
        assert_eq!(render_mrkdwn(&Token::CodeSpan("*x*".to_string())), "`*x*`");
    }

    #[test]
    fn test_link_has_trailing_space() {
        let token = Token::Link {
            url: "https://example.com".to_string(),
            title: None,
            children: vec![Token::Emphasis(vec![text("d")])],
        };
        assert_eq!(render_mrkdwn(&token), "<https://example.com|_d_> ");
    }

    #[test]
    fn test_unsupported_kinds_render_empty() {
        assert_eq!(render_mrkdwn(&Token::LineBreak), "");
        assert_eq!(render_mrkdwn(&Token::Html("<br>".to_string())), "");
        assert_eq!(
            render_mrkdwn(&Token::Image {
                url: "u".to_string(),
                alt: "a".to_string(),
                title: None
            }),
            ""
        );
    }
}
