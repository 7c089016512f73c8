//! The outcome of comparing two values.

use core::fmt;

/// Why two values differ, or that they do not.
///
/// `summary` names the kind of difference and shows both values inline;
/// `diff_block` is present for containers and multi-line strings. Both may
/// carry ANSI colors when the comparison was made with colors enabled.
///
/// Equality follows `==` on the values, so a value holding a float NaN is
/// never equal, not even to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Whether the values are equal. Equal comparisons carry an empty
    /// summary and no diff block.
    pub equal: bool,
    /// Kind label followed by the inline Expected and Actual lines.
    pub summary: String,
    /// The rendered structural diff, if the kind of value has one.
    pub diff_block: Option<String>,
}

impl Comparison {
    pub(crate) fn equal() -> Self {
        Self {
            equal: true,
            summary: String::new(),
            diff_block: None,
        }
    }

    pub(crate) fn different(summary: String, diff_block: Option<String>) -> Self {
        Self {
            equal: false,
            summary,
            diff_block,
        }
    }

    /// The full failure message: the summary, then the diff block under a
    /// `Diff:` heading when there is one.
    pub fn message(&self) -> String {
        match &self.diff_block {
            Some(block) => format!("{}\n\nDiff:\n\n{block}", self.summary),
            None => self.summary.clone(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
