//! Color backends for diff rendering.
//!
//! The render code only knows about semantic meanings (deleted, inserted,
//! context), and the backend decides how to actually style the text.

use std::fmt::Write;

use owo_colors::OwoColorize;

use super::DiffTheme;

/// Semantic color meaning for rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    /// Expected-side content (typically red)
    Deleted,
    /// Actual-side content (typically green)
    Inserted,
    /// Content present on both sides (left unstyled)
    Context,
}

/// A backend that decides how to render semantic colors.
pub trait ColorBackend {
    /// Write styled text to the output.
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        color: SemanticColor,
    ) -> std::fmt::Result;
}

/// Plain backend - no styling, just plain text.
///
/// Use this for tests and non-terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl ColorBackend for PlainBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        _color: SemanticColor,
    ) -> std::fmt::Result {
        w.write_str(text)
    }
}

/// ANSI backend - emits ANSI escape codes for terminal colors.
#[derive(Debug, Clone, Default)]
pub struct AnsiBackend {
    theme: DiffTheme,
}

impl AnsiBackend {
    /// Create a new ANSI backend with the given theme.
    pub fn new(theme: DiffTheme) -> Self {
        Self { theme }
    }
}

impl ColorBackend for AnsiBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        color: SemanticColor,
    ) -> std::fmt::Result {
        match color {
            SemanticColor::Deleted => write!(w, "{}", text.color(self.theme.deleted)),
            SemanticColor::Inserted => write!(w, "{}", text.color(self.theme.inserted)),
            SemanticColor::Context => w.write_str(text),
        }
    }
}
