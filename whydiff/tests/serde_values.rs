use serde::Serialize;
use whydiff::{Attributes, DiffOptions, Value, diff_with, inspect, to_value};
use whydiff_testhelpers::IPanic;

#[derive(Serialize)]
struct Order {
    size: Size,
    shots: u8,
    extras: Vec<&'static str>,
}

#[derive(Serialize)]
enum Size {
    Tall,
    Grande,
}

#[whydiff_testhelpers::test]
fn reflected_structs_inspect_like_objects() -> Result<(), IPanic> {
    let order = to_value(&Order {
        size: Size::Tall,
        shots: 2,
        extras: vec!["oat milk"],
    })?;
    assert_eq!(
        inspect(&order),
        "#<Order size: :Tall, shots: 2, extras: [\"oat milk\"]>"
    );
    Ok(())
}

#[whydiff_testhelpers::test]
fn reflected_structs_diff_by_field() -> Result<(), IPanic> {
    let expected = to_value(&vec![Order {
        size: Size::Tall,
        shots: 2,
        extras: vec!["oat milk"],
    }])?;
    let actual = to_value(&vec![Order {
        size: Size::Grande,
        shots: 2,
        extras: vec!["oat milk", "vanilla"],
    }])?;

    let comparison = diff_with(&expected, &actual, &DiffOptions::plain().with_width(40))?;
    insta::assert_snapshot!(comparison.diff_block.unwrap_or_default(), @r#"
      [
        #<Order {
    -     size: :Tall,
    +     size: :Grande,
          shots: 2,
          extras: [
            "oat milk",
    +       "vanilla"
          ]
        }>
      ]
    "#);
    Ok(())
}

struct Barista {
    name: String,
    station: u32,
}

impl Attributes for Barista {
    fn type_name(&self) -> String {
        "Barista".into()
    }

    fn attributes(&self) -> Vec<(String, Value)> {
        vec![
            ("name".into(), self.name.clone().into()),
            ("station".into(), self.station.into()),
        ]
    }
}

#[whydiff_testhelpers::test]
fn custom_attributes_are_compared_by_name() -> Result<(), IPanic> {
    let expected = Barista {
        name: "Ana".into(),
        station: 1,
    }
    .to_value();
    let actual = Barista {
        name: "Ana".into(),
        station: 2,
    }
    .to_value();

    let comparison = diff_with(&expected, &actual, &DiffOptions::plain())?;
    insta::assert_snapshot!(comparison.summary, @r#"
    Differing objects.

    Expected: #<Barista name: "Ana", station: 1>
      Actual: #<Barista name: "Ana", station: 2>
    "#);

    // Reflected and custom objects never diff against each other.
    let reflected = Value::Object(whydiff::ObjectValue::reflected(
        "Barista",
        [("name", "Ana"), ("station", "1")],
    ));
    assert!(!diff_with(&expected, &reflected, &DiffOptions::plain())?.equal);
    Ok(())
}
