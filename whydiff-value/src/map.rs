//! An insertion-ordered map keyed by [`Value`].

use crate::Value;

/// An ordered map from [`Value`] keys to [`Value`]s.
///
/// Iteration follows insertion order. Inserting a key equal to an existing
/// one replaces that entry's value in place. Keys that are not equal to
/// themselves (a `NaN` float) can never be found again, so inserting one
/// twice leaves two entries behind; the diff engine rejects such maps.
#[derive(Debug, Clone, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the previous value for an equal key.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.index_of(&key) {
            Some(index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.index_of(key).map(|index| &self.entries[index].1)
    }

    /// Position of `key` in iteration order.
    pub fn index_of(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Whether an entry exists for `key`.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.index_of(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }
}

/// Maps are equal when they hold equal entries, whatever their order.
impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a MapValue {
    type Item = (&'a Value, &'a Value);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (Value, Value)>,
        fn(&'a (Value, Value)) -> (&'a Value, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[whydiff_testhelpers::test]
    fn insert_replaces_in_place() {
        let mut map = MapValue::new();
        map.insert(Value::symbol("a"), 1);
        map.insert(Value::symbol("b"), 2);
        assert_eq!(map.insert(Value::symbol("a"), 3), Some(Value::from(1)));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Value::symbol("a"), Value::symbol("b")]);
        assert_eq!(map.get(&Value::symbol("a")), Some(&Value::from(3)));
    }

    #[whydiff_testhelpers::test]
    fn equality_ignores_order() {
        let left: MapValue = [("x", 1), ("y", 2)].into_iter().collect();
        let right: MapValue = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(left, right);
    }

    #[whydiff_testhelpers::test]
    fn nan_keys_cannot_be_found() {
        let mut map = MapValue::new();
        map.insert(f64::NAN, 1);
        map.insert(f64::NAN, 2);
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(&Value::from(f64::NAN)));
    }
}
