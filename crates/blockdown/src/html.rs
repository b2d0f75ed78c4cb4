//! Raw HTML support.
//!
//! Embedded HTML is parsed with scraper and only top-level `<img>`
//! elements are kept, each as an image block. Everything else is dropped.

use blockdown_core::Block;
use scraper::{ElementRef, Html};

use crate::utilities::clean_attribute;

/// Image blocks for the top-level `<img>` tags of an HTML fragment.
///
/// Alt text defaults to `src`. Images without a `src` are skipped.
///
/// # Example
///
/// ```rust
/// use blockdown::html::image_blocks;
///
/// let blocks = image_blocks(r#"<img src="https://x.test/a.png" alt="A">"#);
/// assert_eq!(blocks.len(), 1);
/// ```
pub fn image_blocks(raw: &str) -> Vec<Block> {
    let fragment = Html::parse_fragment(raw);

    let blocks: Vec<Block> = fragment
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name().eq_ignore_ascii_case("img"))
        .filter_map(image_block)
        .collect();

    if blocks.is_empty() {
        tracing::debug!(len = raw.len(), "no images in raw html, skipping");
    }

    blocks
}

fn image_block(element: ElementRef) -> Option<Block> {
    let src = clean_attribute(element.value().attr("src"));
    if src.is_empty() {
        return None;
    }
    let alt = clean_attribute(element.value().attr("alt"));
    let alt = if alt.is_empty() { src.clone() } else { alt };
    Some(Block::image(src, alt, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_image() {
        let blocks = image_blocks(r#"<img src="https://x.test/a.png" alt="Alt">"#);
        assert_eq!(blocks, vec![Block::image("https://x.test/a.png", "Alt", None)]);
    }

    #[test]
    fn test_alt_defaults_to_src() {
        let blocks = image_blocks(r#"<img src="https://x.test/a.png" />"#);
        assert_eq!(
            blocks,
            vec![Block::image("https://x.test/a.png", "https://x.test/a.png", None)]
        );
    }

    #[test]
    fn test_multiple_images() {
        let blocks = image_blocks(r#"<img src="a.png" alt="a"><img src="b.png" alt="b">"#);
        assert_eq!(
            blocks,
            vec![
                Block::image("a.png", "a", None),
                Block::image("b.png", "b", None),
            ]
        );
    }

    #[test]
    fn test_uppercase_tag() {
        let blocks = image_blocks(r#"<IMG SRC="a.png">"#);
        assert_eq!(blocks, vec![Block::image("a.png", "a.png", None)]);
    }

    #[test]
    fn test_other_html_ignored() {
        assert!(image_blocks("<div><b>bold</b></div>").is_empty());
        assert!(image_blocks("<p><img src=\"nested.png\"></p>").is_empty());
        assert!(image_blocks("<!-- comment -->").is_empty());
    }

    #[test]
    fn test_image_without_src_skipped() {
        assert!(image_blocks(r#"<img alt="nothing">"#).is_empty());
    }
}
