use whydiff_pretty::{InspectionTreeBuilder, Inspector, InspectorRegistry, Node, PrettyPrinter};
use whydiff_value::Value;

struct SecretInspector;

impl InspectionTreeBuilder for SecretInspector {
    fn name(&self) -> &'static str {
        "secret"
    }

    fn applies_to(&self, value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|object| object.type_name() == "Secret")
    }

    fn build(&self, _value: &Value, _inspector: &Inspector<'_>) -> Node {
        Node::text("#<Secret [redacted]>")
    }
}

fn secret() -> Value {
    Value::object("Secret", [("token", "hunter2")])
}

#[whydiff_testhelpers::test]
fn prepended_builders_win() {
    let registry = InspectorRegistry::default().with_builder(SecretInspector);
    assert_eq!(registry.names().first(), Some(&"secret"));
    assert_eq!(registry.names().last(), Some(&"default"));

    let printer = PrettyPrinter::new().with_registry(registry);
    let value = Value::array([Value::from(1), secret()]);
    assert_eq!(printer.format(&value), "[1, #<Secret [redacted]>]");
}

#[whydiff_testhelpers::test]
fn standard_registry_shows_attributes() {
    assert_eq!(
        PrettyPrinter::new().format(&secret()),
        "#<Secret token: \"hunter2\">"
    );
}

#[whydiff_testhelpers::test]
fn deep_values_are_elided() {
    let value = Value::array([Value::array([Value::array([1])])]);
    assert_eq!(PrettyPrinter::new().with_max_depth(1).format(&value), "[[...]]");
    assert_eq!(PrettyPrinter::new().format(&value), "[[[1]]]");
}

#[whydiff_testhelpers::test]
fn narrow_widths_break_only_what_does_not_fit() {
    let value = Value::map([
        (Value::symbol("sizes"), Value::array(["tall", "grande", "venti"])),
        (Value::symbol("n"), Value::from(3)),
    ]);
    insta::assert_snapshot!(PrettyPrinter::new().with_width(40).format(&value), @r#"
    {
      sizes: ["tall", "grande", "venti"],
      n: 3
    }
    "#);
}
