//! Reflect any type implementing `serde::Serialize` into a [`Value`].
//!
//! This is the generic attribute adapter: types that do not implement
//! [`Attributes`](crate::Attributes) can still be inspected and diffed by
//! going through their `Serialize` impl. Structs become reflected objects,
//! maps become [`MapValue`]s, sequences and tuples become arrays, and unit
//! enum variants become symbols.
//!
//! ```
//! use whydiff_value::{ObjectKind, Value, to_value};
//!
//! #[derive(serde::Serialize)]
//! enum Size {
//!     Tall,
//!     Grande,
//! }
//!
//! #[derive(serde::Serialize)]
//! struct Order {
//!     size: Size,
//!     shots: Vec<u8>,
//! }
//!
//! let value = to_value(&Order { size: Size::Grande, shots: vec![1, 2] }).unwrap();
//! let order = value.as_object().unwrap();
//! assert_eq!(order.kind(), ObjectKind::Reflected);
//! assert_eq!(order.get("size"), Some(&Value::symbol("Grande")));
//! ```

use core::fmt;

use serde::ser::{self, Serialize};

use crate::{MapValue, ObjectValue, Value};

/// Error type for Value serialization.
#[derive(Debug)]
pub struct ToValueError {
    msg: String,
}

impl ToValueError {
    /// Create a new error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl fmt::Display for ToValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl core::error::Error for ToValueError {}

impl ser::Error for ToValueError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::new(msg.to_string())
    }
}

/// Serialize `value` into a [`Value`].
pub fn to_value<T: ?Sized + Serialize>(value: &T) -> Result<Value, ToValueError> {
    value.serialize(ValueSerializer)
}

struct ValueSerializer;

/// Collects the elements of sequences and tuples.
struct ArrayBuilder {
    items: Vec<Value>,
}

/// Collects map entries, holding a key until its value arrives.
struct MapBuilder {
    map: MapValue,
    pending_key: Option<Value>,
}

/// Collects the fields of structs and of struct or tuple variants.
struct ObjectBuilder {
    type_name: String,
    attributes: Vec<(String, Value)>,
}

impl ObjectBuilder {
    fn new(type_name: impl Into<String>, len: usize) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<(), ToValueError> {
        self.attributes.push((name.into(), to_value(value)?));
        Ok(())
    }

    fn finish(self) -> Value {
        Value::Object(ObjectValue::reflected(self.type_name, self.attributes))
    }
}

fn variant_name(name: &str, variant: &str) -> String {
    format!("{name}::{variant}")
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ToValueError;

    type SerializeSeq = ArrayBuilder;
    type SerializeTuple = ArrayBuilder;
    type SerializeTupleStruct = ArrayBuilder;
    type SerializeTupleVariant = ObjectBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = ObjectBuilder;
    type SerializeStructVariant = ObjectBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, ToValueError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_i16(self, v: i16) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_i32(self, v: i32) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_i64(self, v: i64) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_u8(self, v: u8) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_i128(self, v: i128) -> Result<Value, ToValueError> {
        if let Ok(v) = i64::try_from(v) {
            Ok(v.into())
        } else if let Ok(v) = u64::try_from(v) {
            Ok(v.into())
        } else {
            Err(ToValueError::new(format!("integer {v} does not fit in 64 bits")))
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value, ToValueError> {
        u64::try_from(v)
            .map(Value::from)
            .map_err(|_| ToValueError::new(format!("integer {v} does not fit in 64 bits")))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_char(self, v: char) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_str(self, v: &str) -> Result<Value, ToValueError> {
        Ok(v.into())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, ToValueError> {
        Ok(Value::array(v.iter().copied()))
    }

    fn serialize_none(self) -> Result<Value, ToValueError> {
        Ok(Value::Nil)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, ToValueError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, ToValueError> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, ToValueError> {
        Ok(ObjectBuilder::new(name, 0).finish())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, ToValueError> {
        Ok(Value::symbol(variant))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, ToValueError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, ToValueError> {
        let mut object = ObjectBuilder::new(variant_name(name, variant), 1);
        object.push("0", value)?;
        Ok(object.finish())
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ArrayBuilder, ToValueError> {
        Ok(ArrayBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<ArrayBuilder, ToValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<ArrayBuilder, ToValueError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<ObjectBuilder, ToValueError> {
        Ok(ObjectBuilder::new(variant_name(name, variant), len))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder, ToValueError> {
        Ok(MapBuilder {
            map: MapValue::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<ObjectBuilder, ToValueError> {
        Ok(ObjectBuilder::new(name, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<ObjectBuilder, ToValueError> {
        Ok(ObjectBuilder::new(variant_name(name, variant), len))
    }
}

impl ser::SerializeSeq for ArrayBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ToValueError> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for ArrayBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ToValueError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for ArrayBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ToValueError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for ObjectBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ToValueError> {
        let position = self.attributes.len();
        self.push(position.to_string(), value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), ToValueError> {
        self.pending_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ToValueError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| ToValueError::new("map value serialized without a key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ToValueError> {
        if self.pending_key.is_some() {
            return Err(ToValueError::new("map key serialized without a value"));
        }
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for ObjectBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ToValueError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for ObjectBuilder {
    type Ok = Value;
    type Error = ToValueError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ToValueError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, ToValueError> {
        Ok(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    use super::*;
    use crate::ObjectKind;

    #[derive(Serialize)]
    struct Address {
        city: &'static str,
        zip: Option<u32>,
    }

    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle(f64),
        Rect { w: u8, h: u8 },
        Pair(i8, i8),
    }

    #[whydiff_testhelpers::test]
    fn structs_become_reflected_objects() {
        let value = to_value(&Address {
            city: "Hill Valley",
            zip: None,
        })
        .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.type_name(), "Address");
        assert_eq!(object.kind(), ObjectKind::Reflected);
        assert_eq!(object.get("city"), Some(&Value::from("Hill Valley")));
        assert_eq!(object.get("zip"), Some(&Value::Nil));
    }

    #[whydiff_testhelpers::test]
    fn enum_variants() {
        assert_eq!(to_value(&Shape::Point).unwrap(), Value::symbol("Point"));

        let circle = to_value(&Shape::Circle(1.5)).unwrap();
        assert_eq!(circle.as_object().unwrap().type_name(), "Shape::Circle");
        assert_eq!(circle.as_object().unwrap().get("0"), Some(&Value::from(1.5)));

        let rect = to_value(&Shape::Rect { w: 2, h: 3 }).unwrap();
        assert_eq!(rect.as_object().unwrap().get("h"), Some(&Value::from(3)));

        let pair = to_value(&Shape::Pair(-1, 1)).unwrap();
        assert_eq!(pair.as_object().unwrap().get("1"), Some(&Value::from(1)));
    }

    #[whydiff_testhelpers::test]
    fn maps_keep_serialization_order() {
        let mut map = BTreeMap::new();
        map.insert("b", vec![1, 2]);
        map.insert("a", vec![]);
        let value = to_value(&map).unwrap();
        let keys: Vec<_> = value.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);
    }

    #[whydiff_testhelpers::test]
    fn oversized_integers_are_rejected() {
        let err = to_value(&u128::MAX).unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }
}
