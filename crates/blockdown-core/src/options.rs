//! Configuration options for block conversion

use std::fmt;

/// Builds the line prefix of a task list item from its checked state
pub type CheckboxPrefixFn = Box<dyn Fn(bool) -> String + Send + Sync>;

/// Default list bullet, also used for task items unless overridden
pub const BULLET: &str = "• ";

/// Options for block conversion
pub struct Options {
    /// Prefix for task list items (`- [ ]` / `- [x]`)
    pub checkbox_prefix: CheckboxPrefixFn,
}

impl Options {
    /// Replace the task list prefix builder
    pub fn with_checkbox_prefix<F>(mut self, prefix: F) -> Self
    where
        F: Fn(bool) -> String + Send + Sync + 'static,
    {
        self.checkbox_prefix = Box::new(prefix);
        self
    }

    /// Prefix for a task item in the given state
    pub fn checkbox_prefix(&self, checked: bool) -> String {
        (self.checkbox_prefix)(checked)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            checkbox_prefix: Box::new(|_| BULLET.to_string()),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("checkbox_prefix", &"<fn>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix_ignores_state() {
        let options = Options::default();
        assert_eq!(options.checkbox_prefix(true), "• ");
        assert_eq!(options.checkbox_prefix(false), "• ");
    }

    #[test]
    fn test_custom_prefix() {
        let options = Options::default()
            .with_checkbox_prefix(|checked| if checked { "☑ ".into() } else { "☐ ".into() });
        assert_eq!(options.checkbox_prefix(true), "☑ ");
        assert_eq!(options.checkbox_prefix(false), "☐ ");
    }
}
