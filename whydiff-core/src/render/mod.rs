//! Rendering operation trees to text.
//!
//! Rendering happens in two steps. First the tree is laid out into
//! [`Line`]s, each tagged with a [`Marker`] and a nesting depth; leaf values
//! go through the inspection layout, so they stay on one line when they fit
//! the width budget and break out otherwise. Then the lines are written with
//! their marker column and indentation, each styled as a whole by a
//! [`ColorBackend`].
//!
//! ```text
//!   {                       <- context
//!     tall: 12,
//! -   grande: 19,           <- expected side
//! +   grande: 16            <- actual side
//!   }
//! ```
//!
//! A `Change` whose nested tree has anything in common between the two
//! sides is embedded as its own bracketed block; otherwise it is shown as
//! the whole expected value followed by the whole actual value.

mod backend;
mod symbols;
mod theme;

use std::fmt::Write;

pub use backend::{AnsiBackend, ColorBackend, PlainBackend, SemanticColor};
pub use symbols::DiffSymbols;
pub use theme::DiffTheme;

use whydiff_pretty::builders::attribute_label;
use whydiff_pretty::{Inspector, Layout, Line, Marker, PrettyPrinter, raw_line};

use crate::{Key, KeyStyle, Operation, OperationTree, TreeStyle};

/// Options for rendering an operation tree.
#[derive(Debug, Clone)]
pub struct RenderOptions<B: ColorBackend> {
    /// The color backend to use.
    pub backend: B,
    /// Line marker symbols.
    pub symbols: DiffSymbols,
    /// Inspects leaf values; its width is the width budget.
    pub printer: PrettyPrinter,
}

impl RenderOptions<PlainBackend> {
    /// Plain output, no colors, 80 columns.
    pub fn plain() -> Self {
        Self {
            backend: PlainBackend,
            symbols: DiffSymbols::default(),
            printer: PrettyPrinter::default(),
        }
    }
}

impl RenderOptions<AnsiBackend> {
    /// Colored output with the default theme, 80 columns.
    pub fn ansi() -> Self {
        RenderOptions::plain().with_backend(AnsiBackend::default())
    }
}

impl Default for RenderOptions<AnsiBackend> {
    fn default() -> Self {
        Self::ansi()
    }
}

impl<B: ColorBackend> RenderOptions<B> {
    /// Swap the color backend.
    pub fn with_backend<B2: ColorBackend>(self, backend: B2) -> RenderOptions<B2> {
        RenderOptions {
            backend,
            symbols: self.symbols,
            printer: self.printer,
        }
    }

    /// Set the width budget.
    pub fn with_width(mut self, width: usize) -> Self {
        self.printer = self.printer.with_width(width);
        self
    }

    /// Use a custom printer for leaf values.
    pub fn with_printer(mut self, printer: PrettyPrinter) -> Self {
        self.printer = printer;
        self
    }

    /// The layout lines are produced with: the printer's, plus room for the
    /// marker column.
    pub fn layout(&self) -> Layout {
        self.printer.layout().with_gutter(self.symbols.column_width())
    }
}

/// Lays a tree out into lines.
pub fn render_lines<B: ColorBackend>(tree: &OperationTree, opts: &RenderOptions<B>) -> Vec<Line> {
    let mut renderer = TreeRenderer {
        printer: &opts.printer,
        layout: opts.layout(),
        lines: Vec::new(),
    };
    renderer.tree(tree, "", 0, "");
    renderer.lines
}

/// Render a tree to a writer.
pub fn render<B: ColorBackend, W: Write>(
    tree: &OperationTree,
    opts: &RenderOptions<B>,
    w: &mut W,
) -> std::fmt::Result {
    write_lines(&render_lines(tree, opts), opts, w)
}

/// Render a tree to a string.
pub fn render_to_string<B: ColorBackend>(tree: &OperationTree, opts: &RenderOptions<B>) -> String {
    let mut out = String::new();
    render(tree, opts, &mut out).expect("writing to String cannot fail");
    out
}

/// Writes laid-out lines with their marker column and indentation, one
/// styled span per line.
pub fn write_lines<B: ColorBackend, W: Write>(
    lines: &[Line],
    opts: &RenderOptions<B>,
    w: &mut W,
) -> std::fmt::Result {
    let layout = opts.layout();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            w.write_char('\n')?;
        }
        let color = match line.marker {
            Marker::Context => SemanticColor::Context,
            Marker::Delete => SemanticColor::Deleted,
            Marker::Insert => SemanticColor::Inserted,
        };
        let text = format!(
            "{}{}{}",
            opts.symbols.padded(line.marker),
            layout.indent(line.depth),
            line.text
        );
        opts.backend.write_styled(w, &text, color)?;
    }
    Ok(())
}

struct TreeRenderer<'a> {
    printer: &'a PrettyPrinter,
    layout: Layout,
    lines: Vec<Line>,
}

impl TreeRenderer<'_> {
    fn tree(&mut self, tree: &OperationTree, label: &str, depth: usize, trailing: &str) {
        let style = &tree.style;
        let child_depth = if style.raw_lines {
            depth
        } else {
            self.push(Marker::Context, depth, format!("{label}{}", style.open));
            depth + 1
        };

        let last = tree.operations.len().saturating_sub(1);
        for (i, operation) in tree.operations.iter().enumerate() {
            let comma = if style.commas && i < last { "," } else { "" };
            self.operation(style, operation, child_depth, comma);
        }

        if !style.raw_lines {
            self.push(Marker::Context, depth, format!("{}{trailing}", style.close));
        }
    }

    fn operation(&mut self, style: &TreeStyle, operation: &Operation, depth: usize, comma: &str) {
        match operation {
            Operation::Equal { key, value, .. } | Operation::Noop { key, value, .. } => {
                self.value(style, key, value, depth, Marker::Context, comma);
            }
            Operation::Delete { key, value, .. } => {
                self.value(style, key, value, depth, Marker::Delete, comma);
            }
            Operation::Insert { key, value, .. } => {
                self.value(style, key, value, depth, Marker::Insert, comma);
            }
            Operation::Change {
                key,
                left_value,
                right_value,
                children,
                ..
            } => {
                if children.is_trivial() {
                    // The insert block always follows, so the delete block
                    // is never last.
                    let separator = if style.commas { "," } else { "" };
                    self.value(style, key, left_value, depth, Marker::Delete, separator);
                    self.value(style, key, right_value, depth, Marker::Insert, comma);
                } else {
                    let label = self.label(style, key);
                    self.tree(children, &label, depth, comma);
                }
            }
        }
    }

    fn value(
        &mut self,
        style: &TreeStyle,
        key: &Key,
        value: &whydiff_value::Value,
        depth: usize,
        marker: Marker,
        trailing: &str,
    ) {
        let label = self.label(style, key);
        if style.raw_lines {
            let text = match value.as_str() {
                Some(line) => raw_line(line),
                None => self.printer.format_inline(value),
            };
            self.push(marker, depth, format!("{label}{text}{trailing}"));
            return;
        }
        let node = self.printer.tree(value);
        self.layout
            .push_node(&mut self.lines, &node, &label, depth, marker, trailing);
    }

    fn label(&self, style: &TreeStyle, key: &Key) -> String {
        match (style.keys, key) {
            (KeyStyle::Hash, Key::Entry(key)) => {
                Inspector::new(self.printer.registry(), None).key_label(key)
            }
            (KeyStyle::Attribute, Key::Attribute(name)) => attribute_label(name),
            _ => String::new(),
        }
    }

    fn push(&mut self, marker: Marker, depth: usize, text: String) {
        self.lines.push(Line::new(marker, depth, text));
    }
}
