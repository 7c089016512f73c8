use whydiff_value::Value;

use super::{InspectionTreeBuilder, Inspector};
use crate::{Group, Node};

/// Arrays: `[1, 2]`.
pub struct ArrayInspector;

impl InspectionTreeBuilder for ArrayInspector {
    fn name(&self) -> &'static str {
        "array"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let mut group = Group::bracketed("[", "]");
        for item in value.as_array().unwrap_or_default() {
            group.push("", inspector.child(item));
        }
        group.into()
    }
}

/// Maps: `{ tall: 12, "venti" => 20 }`.
pub struct HashInspector;

impl InspectionTreeBuilder for HashInspector {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Map(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let mut group = Group::padded("{", "}");
        if let Some(map) = value.as_map() {
            for (key, item) in map {
                group.push(inspector.key_label(key), inspector.child(item));
            }
        }
        group.into()
    }
}
