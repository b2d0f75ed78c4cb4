//! Size limits of the target block schema
//!
//! All lengths are counted in `char`s. Truncation keeps the leading part.

/// Maximum length of a section's mrkdwn text
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Maximum length of a header's plain text
pub const MAX_HEADER_LENGTH: usize = 150;

/// Maximum length of an image's alt text
pub const MAX_IMAGE_ALT_LENGTH: usize = 2000;

/// Maximum length of an image's title
pub const MAX_IMAGE_TITLE_LENGTH: usize = 2000;

/// Maximum number of rows in a table, header included
pub const MAX_TABLE_ROWS: usize = 100;

/// Maximum number of cells in any table row
pub const MAX_TABLE_COLUMNS: usize = 20;

/// Truncate `text` to at most `max` characters, in place
pub fn truncate_chars(text: &mut String, max: usize) {
    if let Some((byte_idx, _)) = text.char_indices().nth(max) {
        tracing::trace!(limit = max, len = text.chars().count(), "truncating text");
        text.truncate(byte_idx);
    }
}

/// Owned copy of `text` cut to at most `max` characters
pub fn truncated(text: impl Into<String>, max: usize) -> String {
    let mut text = text.into();
    truncate_chars(&mut text, max);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncated("hello", 10), "hello");
        assert_eq!(truncated("hello", 5), "hello");
    }

    #[test]
    fn test_truncates_to_limit() {
        assert_eq!(truncated("hello world", 5), "hello");
        assert_eq!(truncated("abc", 0), "");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let text = "°C°C°C";
        assert_eq!(truncated(text, 3), "°C°");
        assert_eq!(truncated("日本語テキスト", 2), "日本");
    }
}
