use whydiff_core::{BuilderRegistry, DiffError, OperationTree};
use whydiff_value::{Partial, Value};

use super::EqualityMatcher;

/// Arrays, and "a collection including" placeholders against arrays.
pub(crate) struct ArrayMatcher;

impl EqualityMatcher for ArrayMatcher {
    fn name(&self) -> &'static str {
        "array"
    }

    fn label(&self) -> &'static str {
        "Differing arrays."
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!(
            (expected, actual),
            (
                Value::Array(_) | Value::Partial(Partial::CollectionIncluding(_)),
                Value::Array(_)
            )
        )
    }

    fn diff_tree(
        &self,
        builders: &BuilderRegistry,
        expected: &Value,
        actual: &Value,
    ) -> Result<Option<OperationTree>, DiffError> {
        builders.build_operation_tree(expected, actual)
    }
}

/// Maps, and "a hash including" placeholders against maps.
pub(crate) struct HashMatcher;

impl EqualityMatcher for HashMatcher {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn label(&self) -> &'static str {
        "Differing hashes."
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!(
            (expected, actual),
            (
                Value::Map(_) | Value::Partial(Partial::HashIncluding(_)),
                Value::Map(_)
            )
        )
    }

    fn diff_tree(
        &self,
        builders: &BuilderRegistry,
        expected: &Value,
        actual: &Value,
    ) -> Result<Option<OperationTree>, DiffError> {
        builders.build_operation_tree(expected, actual)
    }
}
