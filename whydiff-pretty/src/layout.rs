//! Width-aware layout of inspection trees into lines.
//!
//! A group is laid out on one line when the whole line fits the width
//! budget, and broken out one child per line otherwise. The width of a line
//! counts everything that ends up on it:
//!
//! ```text
//! - ··· label  content ,
//! ^^ gutter (marker column, if any)
//!   ^^^ indent (indent_size per level)
//!                      ^ trailing comma, when one follows
//! ```
//!
//! So a line exactly at the budget stays inline and one column more breaks.

use unicode_width::UnicodeWidthStr;

use crate::Node;

/// Which side of a comparison a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Present on both sides, or not part of a comparison at all.
    Context,
    /// Present on the expected side only.
    Delete,
    /// Present on the actual side only.
    Insert,
}

/// One laid-out line, before indentation and markers are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Which side the line belongs to.
    pub marker: Marker,
    /// Nesting level.
    pub depth: usize,
    /// Content after the indentation.
    pub text: String,
}

impl Line {
    /// A new line.
    pub fn new(marker: Marker, depth: usize, text: impl Into<String>) -> Self {
        Self {
            marker,
            depth,
            text: text.into(),
        }
    }
}

/// Layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    indent_size: usize,
    gutter: usize,
}

impl Layout {
    /// A layout for the given width budget, indenting by two spaces and
    /// without a marker column.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            indent_size: 2,
            gutter: 0,
        }
    }

    /// Reserve `gutter` columns in front of every line for a marker.
    pub fn with_gutter(mut self, gutter: usize) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the number of spaces per nesting level.
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// The width budget.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The indentation for `depth`.
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_size)
    }

    /// Whether content of `content_width` columns fits on a line at `depth`.
    pub fn fits(&self, depth: usize, content_width: usize) -> bool {
        self.gutter + depth * self.indent_size + content_width <= self.width
    }

    /// Lays out `node`, preceded by `label` and followed by `trailing`, as
    /// lines at `depth` tagged with `marker`.
    pub fn push_node(
        &self,
        lines: &mut Vec<Line>,
        node: &Node,
        label: &str,
        depth: usize,
        marker: Marker,
        trailing: &str,
    ) {
        let group = match node {
            Node::Group(group) if !group.children.is_empty() => group,
            _ => {
                lines.push(Line::new(
                    marker,
                    depth,
                    format!("{label}{}{trailing}", node.inline()),
                ));
                return;
            }
        };

        let inline = node.inline();
        if self.fits(depth, label.width() + inline.width() + trailing.width()) {
            lines.push(Line::new(marker, depth, format!("{label}{inline}{trailing}")));
            return;
        }

        lines.push(Line::new(
            marker,
            depth,
            format!("{label}{}", group.block_open),
        ));
        let last = group.children.len() - 1;
        for (i, entry) in group.children.iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            self.push_node(lines, &entry.node, &entry.label, depth + 1, marker, comma);
        }
        lines.push(Line::new(
            marker,
            depth,
            format!("{}{trailing}", group.block_close),
        ));
    }

    /// Writes lines as indented text, ignoring markers.
    pub fn write_plain(&self, lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| format!("{}{}", self.indent(line.depth), line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    fn digits(n: usize) -> Node {
        let mut group = Group::bracketed("[", "]");
        for i in 1..=n {
            group.push("", Node::text(i.to_string()));
        }
        group.into()
    }

    fn lay_out(layout: Layout, node: &Node) -> String {
        let mut lines = Vec::new();
        layout.push_node(&mut lines, node, "", 0, Marker::Context, "");
        layout.write_plain(&lines)
    }

    #[whydiff_testhelpers::test]
    fn exactly_at_budget_stays_inline() {
        // "[1, 2, 3]" is nine columns wide.
        let node = digits(3);
        assert_eq!(lay_out(Layout::new(9), &node), "[1, 2, 3]");
        assert_eq!(lay_out(Layout::new(8), &node), "[\n  1,\n  2,\n  3\n]");
    }

    #[whydiff_testhelpers::test]
    fn gutter_and_trailing_comma_count_toward_width() {
        let node = digits(3);
        let mut lines = Vec::new();
        Layout::new(12)
            .with_gutter(2)
            .push_node(&mut lines, &node, "", 0, Marker::Insert, ",");
        assert_eq!(lines, vec![Line::new(Marker::Insert, 0, "[1, 2, 3],")]);

        lines.clear();
        Layout::new(11)
            .with_gutter(2)
            .push_node(&mut lines, &node, "", 0, Marker::Insert, ",");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], Line::new(Marker::Insert, 0, "],"));
        assert!(lines.iter().all(|line| line.marker == Marker::Insert));
    }

    #[whydiff_testhelpers::test]
    fn nested_groups_break_independently() {
        let mut outer = Group::padded("{", "}");
        outer.push("short: ", digits(2));
        outer.push("long: ", digits(9));
        let node = Node::from(outer);

        insta::assert_snapshot!(lay_out(Layout::new(24), &node), @r"
        {
          short: [1, 2],
          long: [
            1,
            2,
            3,
            4,
            5,
            6,
            7,
            8,
            9
          ]
        }
        ");
    }

    #[whydiff_testhelpers::test]
    fn empty_groups_never_break() {
        let node = Node::from(Group::object("Nothing"));
        assert_eq!(lay_out(Layout::new(1), &node), "#<Nothing>");
    }
}
