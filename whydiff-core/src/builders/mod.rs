//! Operation tree builders, one per diffable pair of value kinds.
//!
//! A builder contributes two things: the raw alignment of the pair and the
//! style its tree is drawn with. The merge pass and recursion into nested
//! pairs are shared, and live in [`BuilderRegistry`](crate::BuilderRegistry).

mod containers;
mod objects;
mod partial;

pub use containers::{ArrayTreeBuilder, HashTreeBuilder};
pub use objects::{DateTreeBuilder, ObjectTreeBuilder, TimeTreeBuilder};
pub use partial::{CollectionIncludingTreeBuilder, HashIncludingTreeBuilder, ObjectHavingTreeBuilder};

use whydiff_value::Value;

use crate::{DiffError, Key, Operation, TreeStyle};

/// Builds the operation tree of one kind of value pair.
pub trait OperationTreeBuilder: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this builder can diff `expected` against `actual`.
    fn applies_to(&self, expected: &Value, actual: &Value) -> bool;

    /// Brackets and labels of the tree.
    fn style(&self, expected: &Value, actual: &Value) -> TreeStyle;

    /// The raw per-key alignment of the pair, before merging.
    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError>;
}

/// Named attributes as alignable entries.
pub(crate) fn attribute_entries(attributes: &[(String, Value)]) -> Vec<(Key, &Value)> {
    attributes
        .iter()
        .map(|(name, value)| (Key::Attribute(name.clone()), value))
        .collect()
}
