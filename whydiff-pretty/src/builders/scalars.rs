use whydiff_value::Value;

use super::{InspectionTreeBuilder, Inspector};
use crate::Node;

/// Numbers, booleans, symbols and nil.
pub struct PrimitiveInspector;

impl InspectionTreeBuilder for PrimitiveInspector {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(
            value,
            Value::Nil | Value::Bool(_) | Value::Number(_) | Value::Symbol(_)
        )
    }

    fn build(&self, value: &Value, _inspector: &Inspector<'_>) -> Node {
        match value {
            Value::Nil => Node::text("nil"),
            Value::Bool(b) => Node::text(b.to_string()),
            Value::Number(n) => Node::text(n.to_string()),
            Value::Symbol(name) => Node::text(format!(":{name}")),
            other => Node::text(format!("{other:?}")),
        }
    }
}

/// Ranges, in Rust syntax: `1..10`, `1..=10`, `..5`, `3..`.
pub struct RangeInspector;

impl InspectionTreeBuilder for RangeInspector {
    fn name(&self) -> &'static str {
        "range"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Range(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let Value::Range(range) = value else {
            return Node::text(format!("{value:?}"));
        };
        let bound = |bound: &Option<Box<Value>>| {
            bound
                .as_deref()
                .map(|v| inspector.child(v).inline())
                .unwrap_or_default()
        };
        let dots = if range.inclusive { "..=" } else { ".." };
        Node::text(format!("{}{dots}{}", bound(&range.start), bound(&range.end)))
    }
}
