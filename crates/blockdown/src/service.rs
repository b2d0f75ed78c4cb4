//! BlockConverter - the main entry point for Markdown to block conversion.

use blockdown_core::{Block, Options, Token};

use crate::rules::convert_tokens;

/// The main service for converting token trees to blocks
#[derive(Debug, Default)]
pub struct BlockConverter {
    options: Options,
}

impl BlockConverter {
    /// Create a new BlockConverter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a BlockConverter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert top-level tokens to blocks.
    ///
    /// Conversion is best effort: kinds without a rule produce no blocks.
    pub fn convert(&self, tokens: &[Token]) -> Vec<Block> {
        convert_tokens(tokens, &self.options)
    }

    /// Tokenize Markdown and convert it to blocks
    #[cfg(feature = "markdown")]
    pub fn convert_markdown(&self, markdown: &str) -> Vec<Block> {
        let tokens = crate::markdown::parse_markdown(markdown);
        self.convert(&tokens)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
