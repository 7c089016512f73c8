use whydiff_core::{BuilderRegistry, DiffError, OperationTree, TreeStyle, align_sequences};
use whydiff_pretty::split_lines;
use whydiff_value::Value;

use super::EqualityMatcher;

pub(crate) struct NumberMatcher;

impl EqualityMatcher for NumberMatcher {
    fn name(&self) -> &'static str {
        "number"
    }

    fn label(&self) -> &'static str {
        "Differing numbers."
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Number(_), Value::Number(_)))
    }
}

fn both_strings(expected: &Value, actual: &Value) -> bool {
    matches!((expected, actual), (Value::String(_), Value::String(_)))
}

/// Strings that fit on one line: the summary says it all.
pub(crate) struct StringMatcher;

impl EqualityMatcher for StringMatcher {
    fn name(&self) -> &'static str {
        "string"
    }

    fn label(&self) -> &'static str {
        "Differing strings."
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        both_strings(expected, actual)
            && !expected.is_multiline_string()
            && !actual.is_multiline_string()
    }
}

/// Strings where either side spans several lines, diffed line by line.
pub(crate) struct MultilineStringMatcher;

impl EqualityMatcher for MultilineStringMatcher {
    fn name(&self) -> &'static str {
        "multi-line string"
    }

    fn label(&self) -> &'static str {
        "Differing strings."
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        both_strings(expected, actual)
    }

    fn diff_tree(
        &self,
        _builders: &BuilderRegistry,
        expected: &Value,
        actual: &Value,
    ) -> Result<Option<OperationTree>, DiffError> {
        let (Some(expected), Some(actual)) = (expected.as_str(), actual.as_str()) else {
            return Ok(None);
        };
        let lines = |s: &str| -> Vec<Value> { split_lines(s).into_iter().map(Value::from).collect() };
        // Lines never merge into changes: a changed line is shown whole on
        // both sides.
        let operations = align_sequences(&lines(expected), &lines(actual));
        Ok(Some(OperationTree::new(TreeStyle::lines(), operations)))
    }
}

pub(crate) struct SymbolMatcher;

impl EqualityMatcher for SymbolMatcher {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn label(&self) -> &'static str {
        "Differing symbols."
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Symbol(_), Value::Symbol(_)))
    }
}

/// Everything else, including objects, times, ranges and mismatched kinds.
pub(crate) struct ObjectMatcher;

impl EqualityMatcher for ObjectMatcher {
    fn name(&self) -> &'static str {
        "object"
    }

    fn label(&self) -> &'static str {
        "Differing objects."
    }

    fn applies_to(&self, _expected: &Value, _actual: &Value) -> bool {
        true
    }
}
