//! Markdown parsing support.
//!
//! This module tokenizes Markdown with pulldown-cmark and lowers its event
//! stream into the [`Token`] tree the converter works on. Text and code
//! payloads are re-escaped (`&`, `<`, `>`) on the way, since the target
//! markup treats those characters as control syntax.

use std::ops::Range;

use blockdown_core::{ListItem, Token};
use pulldown_cmark::{CodeBlockKind, Event, Options as ParserOptions, Parser, Tag};

use crate::rules::plain_text;

/// Parse a Markdown string into a token tree.
///
/// Tables, strikethrough and task lists are enabled.
///
/// # Example
///
/// ```rust
/// use blockdown::{parse_markdown, Token};
///
/// let tokens = parse_markdown("# Hello");
/// assert!(matches!(tokens[0], Token::Heading { level: 1, .. }));
/// ```
pub fn parse_markdown(source: &str) -> Vec<Token> {
    let mut options = ParserOptions::empty();
    options.insert(ParserOptions::ENABLE_TABLES);
    options.insert(ParserOptions::ENABLE_STRIKETHROUGH);
    options.insert(ParserOptions::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new(source);
    for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
        builder.event(event, range);
    }
    builder.finish()
}

/// Escape `&`, `<` and `>`
fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// An open container while walking the event stream
struct Frame {
    kind: FrameKind,
    children: Vec<Token>,
}

enum FrameKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    Code {
        language: Option<String>,
        text: String,
    },
    Html(String),
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Item {
        checked: Option<bool>,
        raw: String,
    },
    Table {
        header: Vec<Vec<Token>>,
        rows: Vec<Vec<Vec<Token>>>,
    },
    Head(Vec<Vec<Token>>),
    Row(Vec<Vec<Token>>),
    Cell,
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        url: String,
        title: Option<String>,
    },
    Image {
        url: String,
        title: Option<String>,
    },
    /// Containers without a token kind; children move to the parent
    Passthrough,
}

struct TreeBuilder<'s> {
    source: &'s str,
    root: Vec<Token>,
    stack: Vec<Frame>,
}

impl<'s> TreeBuilder<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn finish(mut self) -> Vec<Token> {
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }

    fn event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                let kind = self.frame_kind(tag, range);
                self.stack.push(Frame {
                    kind,
                    children: Vec::new(),
                });
            }
            Event::End(_) => self.close(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push(Token::CodeSpan(escape(&code))),
            Event::Html(html) => match self.stack.last_mut() {
                Some(Frame {
                    kind: FrameKind::Html(raw),
                    ..
                }) => raw.push_str(&html),
                _ => self.push(Token::Html(html.to_string())),
            },
            Event::InlineHtml(html) => self.push(Token::Html(html.to_string())),
            Event::SoftBreak => self.text("\n"),
            Event::HardBreak => self.push(Token::LineBreak),
            Event::Rule => self.push(Token::ThematicBreak),
            Event::TaskListMarker(checked) => self.mark_task(checked),
            _ => {}
        }
    }

    fn frame_kind(&self, tag: Tag<'_>, range: Range<usize>) -> FrameKind {
        match tag {
            Tag::Paragraph => FrameKind::Paragraph,
            Tag::Heading { level, .. } => FrameKind::Heading(level as u8),
            Tag::BlockQuote(_) => FrameKind::BlockQuote,
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                FrameKind::Code {
                    language,
                    text: String::new(),
                }
            }
            Tag::HtmlBlock => FrameKind::Html(String::new()),
            Tag::List(start) => FrameKind::List {
                ordered: start.is_some(),
                start,
                items: Vec::new(),
            },
            Tag::Item => FrameKind::Item {
                checked: None,
                raw: self
                    .source
                    .get(range)
                    .map(strip_list_marker)
                    .unwrap_or_default()
                    .to_string(),
            },
            Tag::Table(_) => FrameKind::Table {
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead => FrameKind::Head(Vec::new()),
            Tag::TableRow => FrameKind::Row(Vec::new()),
            Tag::TableCell => FrameKind::Cell,
            Tag::Emphasis => FrameKind::Emphasis,
            Tag::Strong => FrameKind::Strong,
            Tag::Strikethrough => FrameKind::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => FrameKind::Link {
                url: dest_url.to_string(),
                title: non_empty(&title),
            },
            Tag::Image {
                dest_url, title, ..
            } => FrameKind::Image {
                url: dest_url.to_string(),
                title: non_empty(&title),
            },
            _ => FrameKind::Passthrough,
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame {
                kind: FrameKind::Code { text: code, .. },
                ..
            }) => code.push_str(&escape(text)),
            Some(Frame {
                kind: FrameKind::Html(raw),
                ..
            }) => raw.push_str(text),
            _ => self.push(Token::Text(escape(text))),
        }
    }

    /// Append to the innermost container; adjacent text merges
    fn push(&mut self, token: Token) {
        let children = match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        };
        if let (Token::Text(text), Some(Token::Text(last))) = (&token, children.last_mut()) {
            last.push_str(text);
            return;
        }
        children.push(token);
    }

    fn mark_task(&mut self, state: bool) {
        let item = self.stack.iter_mut().rev().find_map(|frame| match &mut frame.kind {
            FrameKind::Item { checked, .. } => Some(checked),
            _ => None,
        });
        if let Some(checked) = item {
            *checked = Some(state);
        }
    }

    fn close(&mut self) {
        let Some(Frame { kind, children }) = self.stack.pop() else {
            return;
        };

        match kind {
            FrameKind::Paragraph => self.push(Token::Paragraph(children)),
            FrameKind::Heading(level) => self.push(Token::Heading { level, children }),
            FrameKind::BlockQuote => self.push(Token::BlockQuote(children)),
            FrameKind::Code { language, mut text } => {
                if text.ends_with('\n') {
                    text.pop();
                }
                self.push(Token::Code { language, text });
            }
            FrameKind::Html(raw) => self.push(Token::Html(raw)),
            FrameKind::List {
                ordered,
                start,
                items,
            } => self.push(Token::List {
                ordered,
                start,
                items,
            }),
            FrameKind::Item { checked, raw } => {
                let item = ListItem {
                    checked,
                    children: wrap_inlines(children),
                    raw,
                };
                if let Some(Frame {
                    kind: FrameKind::List { items, .. },
                    ..
                }) = self.stack.last_mut()
                {
                    items.push(item);
                }
            }
            FrameKind::Table { header, rows } => self.push(Token::Table { header, rows }),
            FrameKind::Head(cells) => {
                if let Some(Frame {
                    kind: FrameKind::Table { header, .. },
                    ..
                }) = self.stack.last_mut()
                {
                    *header = cells;
                }
            }
            FrameKind::Row(cells) => {
                if let Some(Frame {
                    kind: FrameKind::Table { rows, .. },
                    ..
                }) = self.stack.last_mut()
                {
                    rows.push(cells);
                }
            }
            FrameKind::Cell => {
                if let Some(Frame {
                    kind: FrameKind::Head(cells) | FrameKind::Row(cells),
                    ..
                }) = self.stack.last_mut()
                {
                    cells.push(children);
                }
            }
            FrameKind::Emphasis => self.push(Token::Emphasis(children)),
            FrameKind::Strong => self.push(Token::Strong(children)),
            FrameKind::Strikethrough => self.push(Token::Strikethrough(children)),
            FrameKind::Link { url, title } => self.push(Token::Link {
                url,
                title,
                children,
            }),
            FrameKind::Image { url, title } => {
                let alt = plain_text(&children);
                self.push(Token::Image { url, alt, title });
            }
            FrameKind::Passthrough => {
                for child in children {
                    self.push(child);
                }
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Item source without its bullet or number marker
fn strip_list_marker(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let rest = match trimmed.strip_prefix(&['-', '*', '+'][..]) {
        Some(rest) => rest,
        None => {
            let digits = trimmed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(trimmed.len());
            if digits == 0 {
                trimmed
            } else {
                trimmed[digits..]
                    .strip_prefix(&['.', ')'][..])
                    .unwrap_or(trimmed)
            }
        }
    };
    rest.trim()
}

/// Tight list items hold inline tokens directly; give them a paragraph
fn wrap_inlines(children: Vec<Token>) -> Vec<Token> {
    let mut wrapped = Vec::with_capacity(children.len());
    let mut inlines = Vec::new();

    for child in children {
        let inline = child.is_inline() || (matches!(child, Token::Html(_)) && !inlines.is_empty());
        if inline {
            inlines.push(child);
        } else {
            if !inlines.is_empty() {
                wrapped.push(Token::Paragraph(std::mem::take(&mut inlines)));
            }
            wrapped.push(child);
        }
    }
    if !inlines.is_empty() {
        wrapped.push(Token::Paragraph(inlines));
    }

    wrapped
}
