//! Per-kind selection of how a failed comparison is explained.
//!
//! Each matcher names a kind of difference and optionally produces an
//! operation tree for the diff block. Matchers are tried in order; objects
//! are the fallback and accept any pair.

mod containers;
mod scalars;

use whydiff_core::{BuilderRegistry, DiffError, OperationTree};
use whydiff_value::Value;

use containers::{ArrayMatcher, HashMatcher};
use scalars::{MultilineStringMatcher, NumberMatcher, ObjectMatcher, StringMatcher, SymbolMatcher};

/// Explains a difference between two values of one kind.
pub(crate) trait EqualityMatcher: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// The first line of the summary.
    fn label(&self) -> &'static str;

    /// Whether this matcher explains the pair.
    fn applies_to(&self, expected: &Value, actual: &Value) -> bool;

    /// The operation tree to render as the diff block, if this kind has one.
    fn diff_tree(
        &self,
        _builders: &BuilderRegistry,
        _expected: &Value,
        _actual: &Value,
    ) -> Result<Option<OperationTree>, DiffError> {
        Ok(None)
    }
}

static MATCHERS: &[&dyn EqualityMatcher] = &[
    &NumberMatcher,
    &StringMatcher,
    &MultilineStringMatcher,
    &SymbolMatcher,
    &ArrayMatcher,
    &HashMatcher,
];

/// Picks the first matcher that explains the pair, or the object matcher.
pub(crate) fn select(expected: &Value, actual: &Value) -> &'static dyn EqualityMatcher {
    let matcher = MATCHERS
        .iter()
        .copied()
        .find(|matcher| matcher.applies_to(expected, actual))
        .unwrap_or(&ObjectMatcher);
    trace!(
        expected = expected.kind_name(),
        actual = actual.kind_name(),
        matcher = matcher.name(),
        "selected matcher"
    );
    matcher
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(expected: Value, actual: Value) -> &'static str {
        select(&expected, &actual).label()
    }

    #[whydiff_testhelpers::test]
    fn labels_follow_priority() {
        assert_eq!(label(Value::from(1), Value::from(2.5)), "Differing numbers.");
        assert_eq!(label(Value::from("a"), Value::from("b")), "Differing strings.");
        assert_eq!(label(Value::from("a\nb"), Value::from("a")), "Differing strings.");
        assert_eq!(label(Value::symbol("a"), Value::symbol("b")), "Differing symbols.");
        assert_eq!(label(Value::array([1]), Value::array([2])), "Differing arrays.");
        assert_eq!(
            label(Value::collection_including([1]), Value::array([2])),
            "Differing arrays."
        );
        assert_eq!(
            label(Value::map([("a", 1)]), Value::map([("a", 2)])),
            "Differing hashes."
        );
        assert_eq!(
            label(Value::hash_including([("a", 1)]), Value::map([("a", 2)])),
            "Differing hashes."
        );
    }

    #[whydiff_testhelpers::test]
    fn mixed_kinds_fall_back_to_objects() {
        assert_eq!(label(Value::from(1), Value::from("1")), "Differing objects.");
        assert_eq!(label(Value::array([1]), Value::map([("a", 1)])), "Differing objects.");
        assert_eq!(label(Value::Nil, Value::Bool(false)), "Differing objects.");
        assert_eq!(
            label(Value::collection_including([1]), Value::map([("a", 1)])),
            "Differing objects."
        );
    }

    #[whydiff_testhelpers::test]
    fn only_multiline_strings_get_a_line_diff() {
        let builders = BuilderRegistry::default();
        let single = select(&Value::from("a"), &Value::from("b"));
        assert_eq!(single.name(), "string");
        assert!(
            single
                .diff_tree(&builders, &Value::from("a"), &Value::from("b"))
                .unwrap()
                .is_none()
        );

        let (expected, actual) = (Value::from("a\nb"), Value::from("a\nc"));
        let multiline = select(&expected, &actual);
        assert_eq!(multiline.name(), "multi-line string");
        let tree = multiline.diff_tree(&builders, &expected, &actual).unwrap().unwrap();
        assert!(tree.style.raw_lines);
        assert_eq!(tree.operations.len(), 3);
    }
}
