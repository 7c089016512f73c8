//! The inspection tree: how one value looks, before any width decision.

/// A node of an inspection tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A literal that is never broken across lines.
    Text(String),
    /// A container whose children go either on one line or one per line.
    Group(Group),
}

/// A container node.
///
/// A group carries both of its forms: the inline glyphs used when everything
/// fits on one line, and the block glyphs used when its children are broken
/// out one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Opening glyph of the one-line form, e.g. `{ `.
    pub inline_open: String,
    /// Closing glyph of the one-line form, e.g. ` }`.
    pub inline_close: String,
    /// Opening line of the expanded form, e.g. `{`.
    pub block_open: String,
    /// Closing line of the expanded form, e.g. `}`.
    pub block_close: String,
    /// Text used when there are no children, e.g. `{}`.
    pub empty: String,
    /// Separator between children in the one-line form.
    pub separator: &'static str,
    /// One-line form to use instead of joining the children, for values
    /// whose compact form is not a list of their parts (times, dates).
    pub summary: Option<String>,
    /// The children, each with the label that precedes it.
    pub children: Vec<Entry>,
}

/// A labelled child of a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Printed before the child, e.g. `name: ` or `"key" => `.
    pub label: String,
    /// The child itself.
    pub node: Node,
}

impl Node {
    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// The one-line form of this node.
    pub fn inline(&self) -> String {
        let mut out = String::new();
        self.write_inline(&mut out);
        out
    }

    fn write_inline(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Group(group) => {
                if let Some(summary) = &group.summary {
                    out.push_str(summary);
                    return;
                }
                if group.children.is_empty() {
                    out.push_str(&group.empty);
                    return;
                }
                out.push_str(&group.inline_open);
                for (i, entry) in group.children.iter().enumerate() {
                    if i > 0 {
                        out.push_str(group.separator);
                    }
                    out.push_str(&entry.label);
                    entry.node.write_inline(out);
                }
                out.push_str(&group.inline_close);
            }
        }
    }
}

impl Group {
    fn new(
        inline: (String, String),
        block: (String, String),
        empty: String,
    ) -> Self {
        Self {
            inline_open: inline.0,
            inline_close: inline.1,
            block_open: block.0,
            block_close: block.1,
            empty,
            separator: ", ",
            summary: None,
            children: Vec::new(),
        }
    }

    /// Brackets hugging their contents: `[1, 2]`.
    pub fn bracketed(open: &str, close: &str) -> Self {
        Self::new(
            (open.into(), close.into()),
            (open.into(), close.into()),
            format!("{open}{close}"),
        )
    }

    /// Braces padded with a space: `{ a: 1 }`.
    pub fn padded(open: &str, close: &str) -> Self {
        Self::new(
            (format!("{open} "), format!(" {close}")),
            (open.into(), close.into()),
            format!("{open}{close}"),
        )
    }

    /// An object: `#<Name a: 1>`, expanded as `#<Name {` … `}>`.
    pub fn object(type_name: &str) -> Self {
        Self::new(
            (format!("#<{type_name} "), ">".into()),
            (format!("#<{type_name} {{"), "}>".into()),
            format!("#<{type_name}>"),
        )
    }

    /// A described placeholder: `#<a hash including (a: 1)>`.
    pub fn described(description: &str) -> Self {
        let open = format!("#<{description} (");
        Self::new(
            (open.clone(), ")>".into()),
            (open, ")>".into()),
            format!("#<{description} ()>"),
        )
    }

    /// Replaces the one-line form.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Appends a child.
    pub fn push(&mut self, label: impl Into<String>, node: Node) {
        self.children.push(Entry {
            label: label.into(),
            node,
        });
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}
