use whydiff_value::{MapValue, Value};

use super::OperationTreeBuilder;
use crate::{DiffError, Key, Operation, TreeStyle, align_entries, align_sequences};

/// Two arrays, aligned by position.
pub struct ArrayTreeBuilder;

impl OperationTreeBuilder for ArrayTreeBuilder {
    fn name(&self) -> &'static str {
        "array"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Array(_), Value::Array(_)))
    }

    fn style(&self, _expected: &Value, _actual: &Value) -> TreeStyle {
        TreeStyle::array()
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Array(expected), Value::Array(actual)) => Ok(align_sequences(expected, actual)),
            _ => Ok(Vec::new()),
        }
    }
}

/// Two maps, aligned by key.
pub struct HashTreeBuilder;

impl OperationTreeBuilder for HashTreeBuilder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Map(_), Value::Map(_)))
    }

    fn style(&self, _expected: &Value, _actual: &Value) -> TreeStyle {
        TreeStyle::hash()
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Map(expected), Value::Map(actual)) => {
                align_entries(&map_entries(expected), &map_entries(actual))
            }
            _ => Ok(Vec::new()),
        }
    }
}

pub(super) fn map_entries(map: &MapValue) -> Vec<(Key, &Value)> {
    map.iter()
        .map(|(key, value)| (Key::Entry(key.clone()), value))
        .collect()
}
