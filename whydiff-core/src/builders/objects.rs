use whydiff_value::{ObjectKind, Value, date_attributes, time_attributes};

use super::{OperationTreeBuilder, attribute_entries};
use crate::{DiffError, Operation, TreeStyle, align_entries};

/// Two objects of the same type name and kind, aligned by attribute name.
///
/// Registered once per [`ObjectKind`], so custom and reflected objects each
/// get their own slot in the registry.
pub struct ObjectTreeBuilder {
    kind: ObjectKind,
}

impl ObjectTreeBuilder {
    /// A builder for objects of `kind`.
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }
}

impl OperationTreeBuilder for ObjectTreeBuilder {
    fn name(&self) -> &'static str {
        match self.kind {
            ObjectKind::Custom => "custom object",
            ObjectKind::Reflected => "reflected object",
        }
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        match (expected, actual) {
            (Value::Object(e), Value::Object(a)) => {
                e.kind() == self.kind && a.kind() == self.kind && e.type_name() == a.type_name()
            }
            _ => false,
        }
    }

    fn style(&self, _expected: &Value, actual: &Value) -> TreeStyle {
        match actual {
            Value::Object(object) => TreeStyle::object(object.type_name()),
            _ => TreeStyle::hash(),
        }
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Object(e), Value::Object(a)) => align_entries(
                &attribute_entries(e.attributes()),
                &attribute_entries(a.attributes()),
            ),
            _ => Ok(Vec::new()),
        }
    }
}

/// Two times, compared attribute by attribute.
pub struct TimeTreeBuilder;

impl OperationTreeBuilder for TimeTreeBuilder {
    fn name(&self) -> &'static str {
        "time"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Time(_), Value::Time(_)))
    }

    fn style(&self, _expected: &Value, _actual: &Value) -> TreeStyle {
        TreeStyle::object("Time")
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Time(e), Value::Time(a)) => align_entries(
                &attribute_entries(&time_attributes(e)),
                &attribute_entries(&time_attributes(a)),
            ),
            _ => Ok(Vec::new()),
        }
    }
}

/// Two dates, compared by year, month and day.
pub struct DateTreeBuilder;

impl OperationTreeBuilder for DateTreeBuilder {
    fn name(&self) -> &'static str {
        "date"
    }

    fn applies_to(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Date(_), Value::Date(_)))
    }

    fn style(&self, _expected: &Value, _actual: &Value) -> TreeStyle {
        TreeStyle::object("Date")
    }

    fn operations(&self, expected: &Value, actual: &Value) -> Result<Vec<Operation>, DiffError> {
        match (expected, actual) {
            (Value::Date(e), Value::Date(a)) => align_entries(
                &attribute_entries(&date_attributes(e)),
                &attribute_entries(&date_attributes(a)),
            ),
            _ => Ok(Vec::new()),
        }
    }
}
