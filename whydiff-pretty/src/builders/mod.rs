//! Inspection tree builders, one per kind of value.
//!
//! A builder turns exactly one value into a [`Node`]. Containers recurse
//! through the [`Inspector`] they are handed, which picks the builder for
//! each child from the same registry and tracks nesting depth.

mod containers;
mod object;
mod partial;
mod scalars;
mod string;

pub use containers::{ArrayInspector, HashInspector};
pub use object::{DateInspector, DefaultInspector, ObjectInspector, TimeInspector};
pub use partial::PartialInspector;
pub use scalars::{PrimitiveInspector, RangeInspector};
pub use string::{StringInspector, quote, raw_line, split_lines};

use whydiff_value::Value;

use crate::{InspectorRegistry, Node};

/// Builds the inspection tree of one kind of value.
pub trait InspectionTreeBuilder: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this builder is responsible for `value`.
    fn applies_to(&self, value: &Value) -> bool;

    /// Builds the tree for `value`, inspecting children through `inspector`.
    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node;
}

/// Recursion handle passed to builders.
#[derive(Clone, Copy)]
pub struct Inspector<'r> {
    registry: &'r InspectorRegistry,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'r> Inspector<'r> {
    /// An inspector at the root of a value, eliding anything nested deeper
    /// than `max_depth`.
    pub fn new(registry: &'r InspectorRegistry, max_depth: Option<usize>) -> Self {
        Self {
            registry,
            depth: 0,
            max_depth,
        }
    }

    /// Inspects `value` at the current depth.
    pub fn inspect(&self, value: &Value) -> Node {
        if self.max_depth.is_some_and(|max| self.depth > max) {
            return Node::text("...");
        }
        self.registry.classify_single(value).build(value, self)
    }

    /// Inspects a value nested one level below the current one.
    pub fn child(&self, value: &Value) -> Node {
        Inspector {
            depth: self.depth + 1,
            ..*self
        }
        .inspect(value)
    }

    /// The label that precedes a map entry: `name: ` for symbol keys and
    /// `<key> => ` for anything else.
    pub fn key_label(&self, key: &Value) -> String {
        match key {
            Value::Symbol(name) => attribute_label(name),
            other => format!("{} => ", self.child(other).inline()),
        }
    }
}

/// The label that precedes a named attribute.
pub fn attribute_label(name: &str) -> String {
    format!("{name}: ")
}
