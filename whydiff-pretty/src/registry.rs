//! Ordered selection of inspection tree builders.

use std::sync::{Arc, LazyLock};

use whydiff_value::Value;

use crate::builders::{
    ArrayInspector, DateInspector, DefaultInspector, HashInspector, InspectionTreeBuilder,
    ObjectInspector, PartialInspector, PrimitiveInspector, RangeInspector, StringInspector,
    TimeInspector,
};

static STANDARD: LazyLock<InspectorRegistry> = LazyLock::new(|| InspectorRegistry {
    builders: vec![
        Arc::new(PartialInspector),
        Arc::new(PrimitiveInspector),
        Arc::new(StringInspector),
        Arc::new(RangeInspector),
        Arc::new(TimeInspector),
        Arc::new(DateInspector),
        Arc::new(ArrayInspector),
        Arc::new(HashInspector),
        Arc::new(ObjectInspector),
    ],
    fallback: Arc::new(DefaultInspector),
});

/// An ordered list of inspection tree builders.
///
/// The first builder whose predicate accepts a value is used for it. The
/// fallback is held apart from the list and consulted last, so every value
/// has exactly one builder.
#[derive(Clone)]
pub struct InspectorRegistry {
    builders: Vec<Arc<dyn InspectionTreeBuilder>>,
    fallback: Arc<dyn InspectionTreeBuilder>,
}

impl InspectorRegistry {
    /// Adds `builder` ahead of every builder already registered.
    pub fn with_builder(mut self, builder: impl InspectionTreeBuilder + 'static) -> Self {
        self.builders.insert(0, Arc::new(builder));
        self
    }

    /// Picks the builder for `value`.
    pub fn classify_single(&self, value: &Value) -> &dyn InspectionTreeBuilder {
        self.builders
            .iter()
            .find(|builder| builder.applies_to(value))
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Names of the builders in priority order, fallback last.
    pub fn names(&self) -> Vec<&'static str> {
        self.builders
            .iter()
            .chain(core::iter::once(&self.fallback))
            .map(|builder| builder.name())
            .collect()
    }
}

impl Default for InspectorRegistry {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl core::fmt::Debug for InspectorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("InspectorRegistry")
            .field(&self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Inspector, Node, PrettyPrinter};

    struct Redacted;

    impl InspectionTreeBuilder for Redacted {
        fn name(&self) -> &'static str {
            "redacted"
        }

        fn applies_to(&self, value: &Value) -> bool {
            value.as_str().is_some_and(|s| s.starts_with("secret"))
        }

        fn build(&self, _value: &Value, _inspector: &Inspector<'_>) -> Node {
            Node::text("[REDACTED]")
        }
    }

    #[whydiff_testhelpers::test]
    fn fallback_is_always_last() {
        let registry = InspectorRegistry::default();
        assert_eq!(registry.names().last(), Some(&"default"));
        assert_eq!(registry.classify_single(&Value::opaque("x")).name(), "default");
        assert_eq!(registry.classify_single(&Value::Nil).name(), "primitive");
    }

    #[whydiff_testhelpers::test]
    fn added_builders_take_priority() {
        let registry = InspectorRegistry::default().with_builder(Redacted);
        assert_eq!(registry.names()[0], "redacted");

        let printer = PrettyPrinter::new().with_registry(registry);
        let value = Value::array(["secret-token", "public"]);
        assert_eq!(printer.format(&value), "[[REDACTED], \"public\"]");
    }
}
