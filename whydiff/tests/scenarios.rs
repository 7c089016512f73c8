use chrono::{FixedOffset, NaiveDate};
use whydiff::{DiffError, DiffOptions, Value, diff, diff_with};

fn explain(expected: Value, actual: Value) -> String {
    let comparison = diff_with(&expected, &actual, &DiffOptions::plain()).unwrap();
    assert!(!comparison.equal);
    comparison.message()
}

fn block(expected: Value, actual: Value) -> String {
    diff_with(&expected, &actual, &DiffOptions::plain())
        .unwrap()
        .diff_block
        .unwrap()
}

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

#[whydiff_testhelpers::test]
fn equal_values_short_circuit() {
    let value = Value::map([(sym("a"), Value::array([1, 2]))]);
    let comparison = diff(&value, &value.clone()).unwrap();
    assert!(comparison.equal);
    assert!(comparison.summary.is_empty());
    assert_eq!(comparison.diff_block, None);
}

#[whydiff_testhelpers::test]
fn nan_is_never_equal() {
    let nan = Value::from(f64::NAN);
    assert!(!diff(&nan, &nan.clone()).unwrap().equal);
}

#[whydiff_testhelpers::test]
fn integers_equal_floats() {
    assert!(diff(&Value::from(1), &Value::from(1.0)).unwrap().equal);
}

#[whydiff_testhelpers::test]
fn differing_numbers() {
    insta::assert_snapshot!(explain(Value::from(1), Value::from(2.5)), @r"
    Differing numbers.

    Expected: 1
      Actual: 2.5
    ");
}

#[whydiff_testhelpers::test]
fn changed_array_element() {
    insta::assert_snapshot!(explain(Value::array([1, 2, 3, 4]), Value::array([1, 2, 99, 4])), @r"
    Differing arrays.

    Expected: [1, 2, 3, 4]
      Actual: [1, 2, 99, 4]

    Diff:

      [
        1,
        2,
    -   3,
    +   99,
        4
      ]
    ");
}

#[whydiff_testhelpers::test]
fn changed_hash_value() {
    let expected = Value::map([(sym("tall"), 12), (sym("grande"), 19)]);
    let actual = Value::map([(sym("tall"), 12), (sym("grande"), 16)]);
    insta::assert_snapshot!(explain(expected, actual), @r"
    Differing hashes.

    Expected: { tall: 12, grande: 19 }
      Actual: { tall: 12, grande: 16 }

    Diff:

      {
        tall: 12,
    -   grande: 19,
    +   grande: 16
      }
    ");
}

#[whydiff_testhelpers::test]
fn appended_elements() {
    insta::assert_snapshot!(
        explain(Value::array(["bread"]), Value::array(["bread", "eggs", "milk"])),
        @r#"
    Differing arrays.

    Expected: ["bread"]
      Actual: ["bread", "eggs", "milk"]

    Diff:

      [
        "bread",
    +   "eggs",
    +   "milk"
      ]
    "#
    );
}

#[whydiff_testhelpers::test]
fn multiline_strings_diff_by_line() {
    insta::assert_snapshot!(explain(Value::from("a\nb\nc"), Value::from("a\nX\nc")), @r#"
    Differing strings.

    Expected: "a⏎b⏎c"
      Actual: "a⏎X⏎c"

    Diff:

      a⏎
    - b⏎
    + X⏎
      c
    "#);
}

#[whydiff_testhelpers::test]
fn single_line_strings_have_no_diff() {
    let comparison =
        diff_with(&Value::from("latte"), &Value::from("mocha"), &DiffOptions::plain()).unwrap();
    assert_eq!(comparison.diff_block, None);
    assert_eq!(comparison.message(), comparison.summary);
}

#[whydiff_testhelpers::test]
fn nested_change_is_embedded() {
    let expected = Value::map([
        (sym("a"), Value::map([(sym("x"), 1), (sym("y"), 2)])),
        (sym("b"), Value::from(1)),
    ]);
    let actual = Value::map([
        (sym("a"), Value::map([(sym("x"), 1), (sym("y"), 3)])),
        (sym("b"), Value::from(1)),
    ]);
    insta::assert_snapshot!(block(expected, actual), @r"
      {
        a: {
          x: 1,
    -     y: 2,
    +     y: 3
        },
        b: 1
      }
    ");
}

#[whydiff_testhelpers::test]
fn change_with_nothing_in_common_is_split() {
    let expected = Value::array([Value::array([1]), Value::array([5])]);
    let actual = Value::array([Value::array([2]), Value::array([5])]);
    insta::assert_snapshot!(block(expected, actual), @r"
      [
    -   [1],
    +   [2],
        [5]
      ]
    ");
}

#[whydiff_testhelpers::test]
fn split_change_as_last_line() {
    let expected = Value::array([Value::array([1])]);
    let actual = Value::array([Value::array([2])]);
    insta::assert_snapshot!(block(expected, actual), @r"
      [
    -   [1],
    +   [2]
      ]
    ");
}

#[whydiff_testhelpers::test]
fn removed_element_as_last_line() {
    insta::assert_snapshot!(block(Value::array([1, 2, 3]), Value::array([1, 2])), @r"
      [
        1,
        2,
    -   3
      ]
    ");
}

#[whydiff_testhelpers::test]
fn embedded_change_as_last_line() {
    let expected = Value::array([Value::from(0), Value::array([1, 2])]);
    let actual = Value::array([Value::from(0), Value::array([1, 3])]);
    insta::assert_snapshot!(block(expected, actual), @r"
      [
        0,
        [
          1,
    -     2,
    +     3
        ]
      ]
    ");
}

#[whydiff_testhelpers::test]
fn width_budget_decides_breaking() {
    let expected = Value::array([0]);
    let actual = Value::array([Value::from(0), Value::array([1, 2, 3])]);

    // "+   [1, 2, 3]" is exactly 13 columns.
    let fits = diff_with(&expected, &actual, &DiffOptions::plain().with_width(13)).unwrap();
    insta::assert_snapshot!(fits.diff_block.unwrap(), @r"
      [
        0,
    +   [1, 2, 3]
      ]
    ");

    let breaks = diff_with(&expected, &actual, &DiffOptions::plain().with_width(12)).unwrap();
    insta::assert_snapshot!(breaks.diff_block.unwrap(), @r"
      [
        0,
    +   [
    +     1,
    +     2,
    +     3
    +   ]
      ]
    ");
}

#[whydiff_testhelpers::test]
fn objects_get_a_summary_only() {
    let expected = Value::object("Person", [("name", "Marty")]);
    let actual = Value::object("Person", [("name", "Doc")]);
    insta::assert_snapshot!(explain(expected, actual), @r#"
    Differing objects.

    Expected: #<Person name: "Marty">
      Actual: #<Person name: "Doc">
    "#);
}

#[whydiff_testhelpers::test]
fn objects_inside_containers_diff_by_attribute() {
    let person = |age: i64| {
        Value::object(
            "Person",
            [("name", Value::from("Marty")), ("age", Value::from(age))],
        )
    };
    insta::assert_snapshot!(block(Value::array([person(17)]), Value::array([person(18)])), @r#"
      [
        #<Person {
          name: "Marty",
    -     age: 17,
    +     age: 18
        }>
      ]
    "#);
}

#[whydiff_testhelpers::test]
fn dates_diff_by_component() {
    let date = |day| Value::from(NaiveDate::from_ymd_opt(2023, 10, day).unwrap());
    let expected = Value::map([(sym("due"), date(14))]);
    let actual = Value::map([(sym("due"), date(15))]);
    insta::assert_snapshot!(block(expected, actual), @r"
      {
        due: #<Date {
          year: 2023,
          month: 10,
    -     day: 14,
    +     day: 15
        }>
      }
    ");
}

#[whydiff_testhelpers::test]
fn times_diff_by_component() {
    let time = |sec| {
        let time = NaiveDate::from_ymd_opt(2011, 12, 13)
            .unwrap()
            .and_hms_opt(14, 15, sec)
            .unwrap()
            .and_local_timezone(FixedOffset::east_opt(0).unwrap())
            .unwrap();
        Value::from(time)
    };
    insta::assert_snapshot!(block(Value::array([time(16)]), Value::array([time(17)])), @r#"
      [
        #<Time {
          year: 2011,
          month: 12,
          day: 13,
          hour: 14,
          min: 15,
    -     sec: 16,
    +     sec: 17,
          nsec: 0,
          offset: "+00:00"
        }>
      ]
    "#);
}

#[whydiff_testhelpers::test]
fn placeholders_equal_themselves() {
    let including = Value::hash_including([("a", 1)]);
    let comparison = diff_with(&including, &including.clone(), &DiffOptions::plain()).unwrap();
    assert!(comparison.equal);

    let nested = Value::array([Value::collection_including([1])]);
    assert!(diff(&nested, &nested.clone()).unwrap().equal);
}

#[whydiff_testhelpers::test]
fn hash_including_shows_unconstrained_entries_as_context() {
    let expected = Value::hash_including([("city", "Hill Valley")]);
    let actual = Value::map([("name", "Marty"), ("city", "Twin Pines")]);
    insta::assert_snapshot!(explain(expected, actual), @r#"
    Differing hashes.

    Expected: #<a hash including ("city" => "Hill Valley")>
      Actual: { "name" => "Marty", "city" => "Twin Pines" }

    Diff:

      {
        "name" => "Marty",
    -   "city" => "Hill Valley",
    +   "city" => "Twin Pines"
      }
    "#);
}

#[whydiff_testhelpers::test]
fn hash_including_matches_a_superset() {
    let expected = Value::hash_including([("city", "Hill Valley")]);
    let actual = Value::map([("name", "Marty"), ("city", "Hill Valley")]);
    assert!(diff(&expected, &actual).unwrap().equal);
}

#[whydiff_testhelpers::test]
fn collection_including_reports_missing_elements() {
    let expected = Value::collection_including(["milk", "flour"]);
    let actual = Value::array(["eggs", "milk"]);
    insta::assert_snapshot!(block(expected, actual), @r#"
      [
        "eggs",
        "milk",
    -   "flour"
      ]
    "#);
}

#[whydiff_testhelpers::test]
fn collection_including_pairs_each_element_once() {
    let wide = Value::map([("a", 1), ("b", 2)]);
    let narrow = Value::map([("a", 1)]);
    let actual = Value::array([wide.clone(), narrow]);

    let expected = Value::collection_including([Value::hash_including([("a", 1)]), wide.clone()]);
    assert!(diff(&expected, &actual).unwrap().equal);

    let expected =
        Value::collection_including([Value::hash_including([("a", 1)]), wide, Value::from("x")]);
    insta::assert_snapshot!(block(expected, actual), @r#"
      [
        { "a" => 1, "b" => 2 },
        { "a" => 1 },
    -   "x"
      ]
    "#);
}

#[whydiff_testhelpers::test]
fn object_having_nested_in_a_hash() {
    let expected = Value::map([(
        sym("owner"),
        Value::object_having([("name", "Doc")]),
    )]);
    let actual = Value::map([(
        sym("owner"),
        Value::object("Person", [("name", "Marty"), ("town", "Hill Valley")]),
    )]);
    insta::assert_snapshot!(block(expected, actual), @r#"
      {
        owner: #<Person {
    -     name: "Doc",
    +     name: "Marty",
          town: "Hill Valley"
        }>
      }
    "#);
}

#[whydiff_testhelpers::test]
fn incomparable_keys_are_an_error() {
    let expected = Value::map([(f64::NAN, 1)]);
    let actual = Value::map([(f64::NAN, 2)]);
    assert!(matches!(
        diff(&expected, &actual),
        Err(DiffError::IncomparableKey { .. })
    ));
}

#[whydiff_testhelpers::test]
fn nesting_past_the_limit_is_an_error() {
    fn nest(depth: usize, leaf: i64) -> Value {
        (0..depth).fold(Value::from(leaf), |inner, _| Value::array([inner]))
    }
    let options = DiffOptions::plain().with_max_depth(2);
    assert_eq!(
        diff_with(&nest(5, 1), &nest(5, 2), &options),
        Err(DiffError::DepthLimitExceeded { limit: 2 })
    );
    assert!(diff_with(&nest(2, 1), &nest(2, 2), &options).is_ok());
}

#[whydiff_testhelpers::test]
fn colors_wrap_summary_and_diff_lines() {
    let options = DiffOptions::plain().with_colors(true);
    let comparison = diff_with(&Value::array([1]), &Value::array([2]), &options).unwrap();

    let summary: Vec<&str> = comparison.summary.lines().collect();
    assert_eq!(summary[0], "Differing arrays.");
    assert!(summary[2].starts_with("\x1b[") && summary[2].contains("Expected: [1]"));
    assert!(summary[3].starts_with("\x1b[") && summary[3].contains("  Actual: [2]"));

    let block = comparison.diff_block.unwrap();
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], "  [");
    assert!(lines[1].starts_with("\x1b[") && lines[1].contains("-   1,"));
    assert!(lines[2].starts_with("\x1b[") && lines[2].contains("+   2"));
    assert_eq!(lines[3], "  ]");
}

#[whydiff_testhelpers::test]
fn rendering_is_idempotent() {
    let expected = Value::map([(sym("items"), Value::array(0..30))]);
    let actual = Value::map([(sym("items"), Value::array(1..31))]);
    let first = explain(expected.clone(), actual.clone());
    let second = explain(expected, actual);
    assert_eq!(first, second);
}
