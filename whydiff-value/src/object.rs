//! Objects: a type name plus ordered, named attributes.

use crate::Value;

/// Where an object's attribute list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Supplied by an [`Attributes`] implementation or [`Value::object`].
    Custom,
    /// Reflected generically, e.g. through [`to_value`](crate::to_value).
    Reflected,
}

/// A typed record of named attributes, in declaration order.
#[derive(Debug, Clone)]
pub struct ObjectValue {
    type_name: String,
    attributes: Vec<(String, Value)>,
    kind: ObjectKind,
}

impl ObjectValue {
    /// An object whose attributes were chosen by the host type.
    pub fn custom<N: Into<String>, V: Into<Value>>(
        type_name: impl Into<String>,
        attributes: impl IntoIterator<Item = (N, V)>,
    ) -> Self {
        Self::with_kind(type_name, attributes, ObjectKind::Custom)
    }

    /// An object whose attributes were reflected generically.
    pub fn reflected<N: Into<String>, V: Into<Value>>(
        type_name: impl Into<String>,
        attributes: impl IntoIterator<Item = (N, V)>,
    ) -> Self {
        Self::with_kind(type_name, attributes, ObjectKind::Reflected)
    }

    fn with_kind<N: Into<String>, V: Into<Value>>(
        type_name: impl Into<String>,
        attributes: impl IntoIterator<Item = (N, V)>,
        kind: ObjectKind,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            kind,
        }
    }

    /// The object's type name, e.g. `Person`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[(String, Value)] {
        &self.attributes
    }

    /// How the attribute list was obtained.
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Looks up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.kind == other.kind
            && self.attributes.len() == other.attributes.len()
            && self
                .attributes
                .iter()
                .all(|(name, value)| other.get(name).is_some_and(|v| v == value))
    }
}

/// The attribute-extraction capability a host type provides to be shown and
/// compared as an object.
///
/// ```
/// use whydiff_value::{Attributes, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Attributes for Person {
///     fn type_name(&self) -> String {
///         "Person".into()
///     }
///
///     fn attributes(&self) -> Vec<(String, Value)> {
///         vec![
///             ("name".into(), self.name.as_str().into()),
///             ("age".into(), self.age.into()),
///         ]
///     }
/// }
///
/// let marty = Person { name: "Marty".into(), age: 17 };
/// let value = marty.to_value();
/// assert_eq!(value.as_object().unwrap().get("age"), Some(&Value::from(17)));
/// ```
pub trait Attributes {
    /// Name shown in `#<TypeName ...>`.
    fn type_name(&self) -> String;

    /// Attributes to show and compare, in order.
    fn attributes(&self) -> Vec<(String, Value)>;

    /// Captures `self` as a custom object value.
    fn to_value(&self) -> Value {
        Value::Object(ObjectValue::custom(self.type_name(), self.attributes()))
    }
}
