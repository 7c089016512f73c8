use whydiff_value::{Partial, Value};

use super::object::{DefaultInspector, attribute_group};
use super::{InspectionTreeBuilder, Inspector};
use crate::{Group, Node};

/// Placeholders: `#<a hash including (city: "Hill Valley")>`.
pub struct PartialInspector;

impl InspectionTreeBuilder for PartialInspector {
    fn name(&self) -> &'static str {
        "partial"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Partial(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let Value::Partial(partial) = value else {
            return DefaultInspector.build(value, inspector);
        };
        let mut group = Group::described(partial.description());
        match partial {
            Partial::HashIncluding(entries) => {
                for (key, item) in entries {
                    group.push(inspector.key_label(key), inspector.child(item));
                }
                group.into()
            }
            Partial::CollectionIncluding(items) => {
                for item in items {
                    group.push("", inspector.child(item));
                }
                group.into()
            }
            Partial::ObjectHaving(attributes) => attribute_group(group, attributes, inspector),
        }
    }
}
