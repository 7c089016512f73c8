/// Options for comparing values.
///
/// ```
/// use whydiff::DiffOptions;
///
/// let options = DiffOptions::plain().with_width(40);
/// assert_eq!(options.width(), 40);
/// assert!(!options.colors());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    width: usize,
    colors: bool,
    max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            width: 80,
            colors: colors_from_env(),
            max_depth: 64,
        }
    }
}

impl DiffOptions {
    /// Create options with default settings: 80 columns, colors unless
    /// `NO_COLOR` is set, nesting limited to 64 levels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings without colors, whatever the environment says.
    pub fn plain() -> Self {
        Self::default().with_colors(false)
    }

    /// Set the width budget containers must fit in to stay on one line.
    ///
    /// The budget includes the two-column marker gutter of diff lines.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Set how deeply nested values are diffed before giving up, and
    /// inspected before eliding with `...`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The width budget.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether output is colored.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// The nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

// https://no-color.org: present and non-empty disables color.
fn colors_from_env() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[whydiff_testhelpers::test]
    fn builder_methods_chain() {
        let options = DiffOptions::new()
            .with_width(100)
            .with_colors(true)
            .with_max_depth(3);
        assert_eq!(options.width(), 100);
        assert!(options.colors());
        assert_eq!(options.max_depth(), 3);
    }

    #[whydiff_testhelpers::test]
    fn plain_never_colors() {
        assert!(!DiffOptions::plain().colors());
        assert_eq!(DiffOptions::plain().width(), 80);
    }
}
