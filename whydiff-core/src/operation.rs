//! Operations and the trees they form.

use core::fmt;

use whydiff_pretty::PrettyPrinter;
use whydiff_value::Value;

/// Where an operation sits in its container.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A position in a sequence (or a line in a multi-line string).
    Index(usize),
    /// A map key.
    Entry(Value),
    /// An object attribute name.
    Attribute(String),
}

impl Key {
    /// Whether the key equals itself; a `NaN` inside a map key does not.
    pub fn is_self_equal(&self) -> bool {
        match self {
            Key::Entry(value) => value.is_self_equal(),
            Key::Index(_) | Key::Attribute(_) => true,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "[{index}]"),
            Key::Entry(key) => f.write_str(&PrettyPrinter::new().format_inline(key)),
            Key::Attribute(name) => f.write_str(name),
        }
    }
}

/// One step of a diff.
///
/// `index` fields are positions in the side the value was taken from: the
/// expected side for deletes, the actual side for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Present on both sides with matching values.
    Equal {
        /// Where.
        key: Key,
        /// The actual value.
        value: Value,
        /// Actual-side position.
        index: usize,
    },
    /// Present on the actual side and unconstrained by the expected side;
    /// shown for context only. Produced when the expected side is a partial
    /// placeholder.
    Noop {
        /// Where.
        key: Key,
        /// The actual value.
        value: Value,
        /// Actual-side position.
        index: usize,
    },
    /// Only on the actual side, or a differing value that did not merge.
    Insert {
        /// Where.
        key: Key,
        /// The actual value.
        value: Value,
        /// Actual-side position.
        index: usize,
    },
    /// Only on the expected side, or a differing value that did not merge.
    Delete {
        /// Where.
        key: Key,
        /// The expected value.
        value: Value,
        /// Expected-side position.
        index: usize,
    },
    /// A differing value whose two sides were diffed recursively.
    Change {
        /// Where.
        key: Key,
        /// The expected value.
        left_value: Value,
        /// The actual value.
        right_value: Value,
        /// Expected-side position.
        left_index: usize,
        /// Actual-side position.
        right_index: usize,
        /// The nested diff.
        children: OperationTree,
    },
}

impl Operation {
    /// The key this operation sits at.
    pub fn key(&self) -> &Key {
        match self {
            Operation::Equal { key, .. }
            | Operation::Noop { key, .. }
            | Operation::Insert { key, .. }
            | Operation::Delete { key, .. }
            | Operation::Change { key, .. } => key,
        }
    }

    /// Whether this is an insert or a delete.
    pub fn is_edit(&self) -> bool {
        matches!(self, Operation::Insert { .. } | Operation::Delete { .. })
    }
}

/// How the entries of a tree are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// No label: positions are implied by order.
    Index,
    /// `name: ` for symbol keys, `<key> => ` otherwise.
    Hash,
    /// `name: `.
    Attribute,
}

/// Formatting metadata of an operation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStyle {
    /// Opening line, e.g. `[` or `#<Person {`.
    pub open: String,
    /// Closing line, e.g. `]` or `}>`.
    pub close: String,
    /// How entries are labelled.
    pub keys: KeyStyle,
    /// Whether entries are separated by commas.
    pub commas: bool,
    /// Whether values are lines of text shown raw, without brackets.
    pub raw_lines: bool,
}

impl TreeStyle {
    fn bracketed(open: impl Into<String>, close: impl Into<String>, keys: KeyStyle) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            keys,
            commas: true,
            raw_lines: false,
        }
    }

    /// `[` … `]`.
    pub fn array() -> Self {
        Self::bracketed("[", "]", KeyStyle::Index)
    }

    /// `{` … `}`.
    pub fn hash() -> Self {
        Self::bracketed("{", "}", KeyStyle::Hash)
    }

    /// `#<TypeName {` … `}>`.
    pub fn object(type_name: &str) -> Self {
        Self::bracketed(format!("#<{type_name} {{"), "}>", KeyStyle::Attribute)
    }

    /// Lines of a multi-line string: no brackets, no commas, raw text.
    pub fn lines() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            keys: KeyStyle::Index,
            commas: false,
            raw_lines: true,
        }
    }
}

/// An ordered sequence of operations plus how to format them.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationTree {
    /// Brackets, labels and separators.
    pub style: TreeStyle,
    /// The operations, in display order.
    pub operations: Vec<Operation>,
}

impl OperationTree {
    /// A new tree.
    pub fn new(style: TreeStyle, operations: Vec<Operation>) -> Self {
        Self { style, operations }
    }

    /// Whether every operation is an insert or a delete, so that nothing in
    /// the tree lines up between the two sides.
    pub fn is_trivial(&self) -> bool {
        self.operations.iter().all(Operation::is_edit)
    }
}
