//! Color themes for diff rendering.

use owo_colors::Rgb;

/// Color theme for diff rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTheme {
    /// Color for expected-side lines (default: red)
    pub deleted: Rgb,

    /// Color for actual-side lines (default: green)
    pub inserted: Rgb,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::TOKYO_NIGHT
    }
}

impl DiffTheme {
    /// Tokyo Night colors (default).
    pub const TOKYO_NIGHT: Self = Self {
        deleted: Rgb(247, 118, 142),  // red
        inserted: Rgb(158, 206, 106), // green
    };
}
