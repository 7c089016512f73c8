//! Symbols used for diff rendering.

use unicode_width::UnicodeWidthStr;

use whydiff_pretty::Marker;

/// The prefixes shown before lines to indicate which side they belong to.
///
/// A space separates the symbol from the line's indentation, so the marker
/// column is one wider than the widest symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSymbols {
    /// Symbol for expected-side lines (default: "-")
    pub deleted: &'static str,

    /// Symbol for actual-side lines (default: "+")
    pub inserted: &'static str,

    /// Symbol for lines on both sides (default: " ")
    pub context: &'static str,
}

impl Default for DiffSymbols {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DiffSymbols {
    /// Standard diff symbols using `-` and `+`
    pub const STANDARD: Self = Self {
        deleted: "-",
        inserted: "+",
        context: " ",
    };

    /// The symbol for a line marker.
    pub const fn symbol(&self, marker: Marker) -> &'static str {
        match marker {
            Marker::Context => self.context,
            Marker::Delete => self.deleted,
            Marker::Insert => self.inserted,
        }
    }

    /// Width of the marker column, separating space included.
    pub fn column_width(&self) -> usize {
        [self.deleted, self.inserted, self.context]
            .iter()
            .map(|symbol| symbol.width())
            .max()
            .unwrap_or(0)
            + 1
    }

    /// The symbol for a line marker, padded to fill the marker column.
    pub fn padded(&self, marker: Marker) -> String {
        let symbol = self.symbol(marker);
        let padding = self.column_width().saturating_sub(symbol.width());
        format!("{symbol}{}", " ".repeat(padding))
    }
}
