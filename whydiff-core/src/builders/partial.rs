//! Placeholders diffed against the values they failed to match.
//!
//! These trees are drawn in the actual value's brackets and follow the
//! actual value's order, with the entries the placeholder does not mention
//! shown as context.

use whydiff_value::{Partial, Value};

use super::containers::map_entries;
use super::{OperationTreeBuilder, attribute_entries};
use crate::{DiffError, Operation, TreeStyle, align_collection_subset, align_subset};

/// "a hash including" against a map.
pub struct HashIncludingTreeBuilder;

impl OperationTreeBuilder for HashIncludingTreeBuilder {
    fn name(&self) -> &'static str {
        "hash including"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!(
            (expected, actual),
            (Value::Partial(Partial::HashIncluding(_)), Value::Map(_))
        )
    }

    fn style(&self, _expected: &Value, _actual: &Value) -> TreeStyle {
        TreeStyle::hash()
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Partial(Partial::HashIncluding(subset)), Value::Map(map)) => {
                align_subset(&map_entries(subset), &map_entries(map))
            }
            _ => Ok(Vec::new()),
        }
    }
}

/// "a collection including" against an array.
pub struct CollectionIncludingTreeBuilder;

impl OperationTreeBuilder for CollectionIncludingTreeBuilder {
    fn name(&self) -> &'static str {
        "collection including"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!(
            (expected, actual),
            (Value::Partial(Partial::CollectionIncluding(_)), Value::Array(_))
        )
    }

    fn style(&self, _expected: &Value, _actual: &Value) -> TreeStyle {
        TreeStyle::array()
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Partial(Partial::CollectionIncluding(items)), Value::Array(elements)) => {
                Ok(align_collection_subset(items, elements))
            }
            _ => Ok(Vec::new()),
        }
    }
}

/// "an object having attributes" against any object.
pub struct ObjectHavingTreeBuilder;

impl OperationTreeBuilder for ObjectHavingTreeBuilder {
    fn name(&self) -> &'static str {
        "object having attributes"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!(
            (expected, actual),
            (Value::Partial(Partial::ObjectHaving(_)), Value::Object(_))
        )
    }

    fn style(&self, _expected: &Value, actual: &Value) -> TreeStyle {
        match actual {
            Value::Object(object) => TreeStyle::object(object.type_name()),
            _ => TreeStyle::hash(),
        }
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Partial(Partial::ObjectHaving(attributes)), Value::Object(object)) => {
                align_subset(
                    &attribute_entries(attributes),
                    &attribute_entries(object.attributes()),
                )
            }
            _ => Ok(Vec::new()),
        }
    }
}
