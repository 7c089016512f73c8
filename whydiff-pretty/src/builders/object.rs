use whydiff_value::{Value, date_attributes, format_date, format_time, time_attributes};

use super::{InspectionTreeBuilder, Inspector, attribute_label};
use crate::{Group, Node};

/// Objects, custom or reflected: `#<Person name: "Marty">`.
pub struct ObjectInspector;

impl InspectionTreeBuilder for ObjectInspector {
    fn name(&self) -> &'static str {
        "object"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Object(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let Some(object) = value.as_object() else {
            return DefaultInspector.build(value, inspector);
        };
        attribute_group(Group::object(object.type_name()), object.attributes(), inspector)
    }
}

/// Times: `#<Time 2011-12-13 14:15:16.000 +00:00>`, expanded to their
/// attributes when broken out.
pub struct TimeInspector;

impl InspectionTreeBuilder for TimeInspector {
    fn name(&self) -> &'static str {
        "time"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Time(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let Value::Time(time) = value else {
            return DefaultInspector.build(value, inspector);
        };
        let group = Group::object("Time").with_summary(format!("#<Time {}>", format_time(time)));
        attribute_group(group, &time_attributes(time), inspector)
    }
}

/// Dates: `#<Date 2023-10-14>`.
pub struct DateInspector;

impl InspectionTreeBuilder for DateInspector {
    fn name(&self) -> &'static str {
        "date"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::Date(_))
    }

    fn build(&self, value: &Value, inspector: &Inspector<'_>) -> Node {
        let Value::Date(date) = value else {
            return DefaultInspector.build(value, inspector);
        };
        let group = Group::object("Date").with_summary(format!("#<Date {}>", format_date(date)));
        attribute_group(group, &date_attributes(date), inspector)
    }
}

/// The fallback: opaque values show their description, anything no other
/// builder claimed shows its debug form.
pub struct DefaultInspector;

impl InspectionTreeBuilder for DefaultInspector {
    fn name(&self) -> &'static str {
        "default"
    }

    fn applies_to(&self, _value: &Value) -> bool {
        true
    }

    fn build(&self, value: &Value, _inspector: &Inspector<'_>) -> Node {
        match value {
            Value::Opaque(description) => Node::text(description.clone()),
            other => Node::text(format!("{other:?}")),
        }
    }
}

pub(super) fn attribute_group(
    mut group: Group,
    attributes: &[(String, Value)],
    inspector: &Inspector<'_>,
) -> Node {
    for (name, value) in attributes {
        group.push(attribute_label(name), inspector.child(value));
    }
    group.into()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate};

    use super::*;
    use crate::PrettyPrinter;

    #[whydiff_testhelpers::test]
    fn objects() {
        let marty = Value::object("Person", [("name", Value::from("Marty")), ("age", 17.into())]);
        assert_eq!(
            PrettyPrinter::new().format(&marty),
            "#<Person name: \"Marty\", age: 17>"
        );
        insta::assert_snapshot!(PrettyPrinter::new().with_width(20).format(&marty), @r#"
        #<Person {
          name: "Marty",
          age: 17
        }>
        "#);
    }

    #[whydiff_testhelpers::test]
    fn times_expand_to_attributes() {
        let time = NaiveDate::from_ymd_opt(2011, 12, 13)
            .unwrap()
            .and_hms_opt(14, 15, 16)
            .unwrap()
            .and_local_timezone(FixedOffset::east_opt(0).unwrap())
            .unwrap();
        let value = Value::Time(time);
        assert_eq!(
            PrettyPrinter::new().format(&value),
            "#<Time 2011-12-13 14:15:16.000 +00:00>"
        );
        insta::assert_snapshot!(PrettyPrinter::new().with_width(30).format(&value), @r#"
        #<Time {
          year: 2011,
          month: 12,
          day: 13,
          hour: 14,
          min: 15,
          sec: 16,
          nsec: 0,
          offset: "+00:00"
        }>
        "#);
    }

    #[whydiff_testhelpers::test]
    fn opaque_values_use_their_description() {
        let value = Value::opaque("#<Proc:0x0001>");
        assert_eq!(PrettyPrinter::new().format(&value), "#<Proc:0x0001>");
    }
}
