//! The [`Value`] enum and its conversions.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::{MapValue, Number, ObjectValue, Partial, RangeValue};

/// A value as seen by the diff engine.
///
/// Values are plain owned trees, so a value can never contain itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A number; see [`Number`] for its cross-representation equality.
    Number(Number),
    /// A symbolic name, rendered as `:name`.
    Symbol(String),
    /// Text.
    String(String),
    /// An interval with optional bounds.
    Range(RangeValue),
    /// A point in time with a fixed UTC offset.
    Time(DateTime<FixedOffset>),
    /// A calendar date.
    Date(NaiveDate),
    /// An ordered sequence, keyed by position.
    Array(Vec<Value>),
    /// An insertion-ordered map.
    Map(MapValue),
    /// A typed record of named attributes.
    Object(ObjectValue),
    /// A placeholder that matches a family of actual values.
    Partial(Partial),
    /// A host value with no visible structure, described by its text.
    Opaque(String),
}

impl Value {
    /// A symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// An array built from anything convertible to values.
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// A map built from `(key, value)` pairs, in order.
    pub fn map<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    /// An object with custom, caller-supplied attributes.
    pub fn object<N: Into<String>, V: Into<Value>>(
        type_name: impl Into<String>,
        attributes: impl IntoIterator<Item = (N, V)>,
    ) -> Self {
        Value::Object(ObjectValue::custom(type_name, attributes))
    }

    /// A placeholder matching any map containing these entries.
    pub fn hash_including<K: Into<Value>, V: Into<Value>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Value::Partial(Partial::HashIncluding(entries.into_iter().collect()))
    }

    /// A placeholder matching any array containing these elements.
    pub fn collection_including<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Partial(Partial::CollectionIncluding(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// A placeholder matching any object carrying these attributes.
    pub fn object_having<N: Into<String>, V: Into<Value>>(
        attributes: impl IntoIterator<Item = (N, V)>,
    ) -> Self {
        Value::Partial(Partial::ObjectHaving(
            attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        ))
    }

    /// An opaque value shown through its description.
    pub fn opaque(description: impl Into<String>) -> Self {
        Value::Opaque(description.into())
    }

    /// Placeholder-aware equality, reading `self` as the expected side.
    ///
    /// Partial placeholders on the expected side match any actual value they
    /// describe, and an identical placeholder; everywhere else this is `==`,
    /// applied recursively so that placeholders nested in containers are
    /// honored too.
    pub fn matches(&self, actual: &Value) -> bool {
        match (self, actual) {
            (Value::Partial(expected), Value::Partial(actual)) => expected == actual,
            (Value::Partial(partial), _) => partial.matches(actual),
            (Value::Array(expected), Value::Array(actual)) => {
                expected.len() == actual.len()
                    && expected.iter().zip(actual).all(|(e, a)| e.matches(a))
            }
            (Value::Map(expected), Value::Map(actual)) => {
                expected.len() == actual.len()
                    && expected
                        .iter()
                        .all(|(key, e)| actual.get(key).is_some_and(|a| e.matches(a)))
            }
            (Value::Object(expected), Value::Object(actual)) => {
                expected.type_name() == actual.type_name()
                    && expected.kind() == actual.kind()
                    && expected.attributes().len() == actual.attributes().len()
                    && expected
                        .attributes()
                        .iter()
                        .all(|(name, e)| actual.get(name).is_some_and(|a| e.matches(a)))
            }
            _ => self == actual,
        }
    }

    /// Whether the value equals itself, i.e. contains no `NaN`.
    pub fn is_self_equal(&self) -> bool {
        match self {
            Value::Number(Number::Float(f)) => !f.is_nan(),
            Value::Range(range) => [&range.start, &range.end]
                .into_iter()
                .flatten()
                .all(|bound| bound.is_self_equal()),
            Value::Array(items) => items.iter().all(Value::is_self_equal),
            Value::Map(map) => map
                .iter()
                .all(|(key, value)| key.is_self_equal() && value.is_self_equal()),
            Value::Object(object) => object
                .attributes()
                .iter()
                .all(|(_, value)| value.is_self_equal()),
            _ => true,
        }
    }

    /// Short name of the value's kind, for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::String(_) => "string",
            Value::Range(_) => "range",
            Value::Time(_) => "time",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
            Value::Partial(_) => "partial",
            Value::Opaque(_) => "opaque",
        }
    }

    /// The text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of an array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries of a map value.
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The object behind an object value.
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Whether this is a string spanning more than one line.
    pub fn is_multiline_string(&self) -> bool {
        self.as_str().is_some_and(|s| s.contains('\n'))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(Number::from(n))
            }
        })*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl From<MapValue> for Value {
    fn from(map: MapValue) -> Self {
        Value::Map(map)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

impl From<Partial> for Value {
    fn from(partial: Partial) -> Self {
        Value::Partial(partial)
    }
}

impl From<RangeValue> for Value {
    fn from(range: RangeValue) -> Self {
        Value::Range(range)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(time: DateTime<FixedOffset>) -> Self {
        Value::Time(time)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[whydiff_testhelpers::test]
    fn numbers_match_across_representations() {
        assert!(Value::from(1).matches(&Value::from(1.0)));
        assert_eq!(Value::array([1, 2]), Value::array([1.0, 2.0]));
    }

    #[whydiff_testhelpers::test]
    fn placeholders_match_recursively() {
        let expected = Value::map([(
            Value::symbol("address"),
            Value::hash_including([(Value::symbol("city"), "Hill Valley")]),
        )]);
        let actual = Value::map([(
            Value::symbol("address"),
            Value::map([
                (Value::symbol("line_1"), "123 Main St."),
                (Value::symbol("city"), "Hill Valley"),
            ]),
        )]);
        assert!(expected.matches(&actual));
        assert_ne!(expected, actual);
    }

    #[whydiff_testhelpers::test]
    fn placeholders_only_match_on_the_expected_side() {
        let placeholder = Value::collection_including(["a"]);
        let actual = Value::array(["a", "b"]);
        assert!(placeholder.matches(&actual));
        assert!(!actual.matches(&placeholder));
    }

    #[whydiff_testhelpers::test]
    fn multiline_detection() {
        assert!(Value::from("a\nb").is_multiline_string());
        assert!(!Value::from("ab").is_multiline_string());
        assert!(!Value::symbol("a\nb").is_multiline_string());
    }
}
