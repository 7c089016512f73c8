//! Per-key alignment of two containers into raw operations.
//!
//! Alignment is one-to-one on keys: positions for sequences, keys for maps,
//! names for attributes. No common subsequence is searched for, so an
//! element that moved shows up as a delete and an insert.
//!
//! The raw output covers every key of both sides exactly once. A key on both
//! sides becomes an `Equal` when the values match, or a `Delete` directly
//! followed by an `Insert` when they do not; the merge pass decides later
//! whether that pair becomes a `Change`.

use std::collections::HashMap;

use whydiff_value::{Value, assign_distinct};

use crate::{DiffError, Key, Operation};

/// Aligns two sequences by position.
pub fn align_sequences(expected: &[Value], actual: &[Value]) -> Vec<Operation> {
    let len = expected.len().max(actual.len());
    let mut operations = Vec::with_capacity(len);
    for index in 0..len {
        let key = Key::Index(index);
        match (expected.get(index), actual.get(index)) {
            (Some(e), Some(a)) if e.matches(a) => operations.push(Operation::Equal {
                key,
                value: a.clone(),
                index,
            }),
            (Some(e), Some(a)) => {
                operations.push(Operation::Delete {
                    key: key.clone(),
                    value: e.clone(),
                    index,
                });
                operations.push(Operation::Insert {
                    key,
                    value: a.clone(),
                    index,
                });
            }
            (Some(e), None) => operations.push(Operation::Delete {
                key,
                value: e.clone(),
                index,
            }),
            (None, Some(a)) => operations.push(Operation::Insert {
                key,
                value: a.clone(),
                index,
            }),
            (None, None) => {}
        }
    }
    operations
}

/// Aligns two keyed containers: expected order first, then the keys only the
/// actual side has, in actual order.
pub fn align_entries(
    expected: &[(Key, &Value)],
    actual: &[(Key, &Value)],
) -> Result<Vec<Operation>, DiffError> {
    let expected_keys = KeyIndex::new(expected)?;
    let actual_keys = KeyIndex::new(actual)?;

    let mut operations = Vec::with_capacity(expected.len() + actual.len());
    for (index, (key, e)) in expected.iter().enumerate() {
        match actual_keys.position(key) {
            Some(actual_index) if e.matches(actual[actual_index].1) => {
                operations.push(Operation::Equal {
                    key: key.clone(),
                    value: actual[actual_index].1.clone(),
                    index: actual_index,
                });
            }
            Some(actual_index) => {
                operations.push(Operation::Delete {
                    key: key.clone(),
                    value: (*e).clone(),
                    index,
                });
                operations.push(Operation::Insert {
                    key: key.clone(),
                    value: actual[actual_index].1.clone(),
                    index: actual_index,
                });
            }
            None => operations.push(Operation::Delete {
                key: key.clone(),
                value: (*e).clone(),
                index,
            }),
        }
    }
    for (index, (key, a)) in actual.iter().enumerate() {
        if expected_keys.position(key).is_none() {
            operations.push(Operation::Insert {
                key: key.clone(),
                value: (*a).clone(),
                index,
            });
        }
    }
    Ok(operations)
}

/// Aligns the entries a placeholder requires against a full keyed
/// container.
///
/// Follows actual order: entries the placeholder says nothing about become
/// `Noop` context. Required entries the actual side lacks are appended as
/// deletes.
pub fn align_subset(
    expected: &[(Key, &Value)],
    actual: &[(Key, &Value)],
) -> Result<Vec<Operation>, DiffError> {
    let expected_keys = KeyIndex::new(expected)?;
    let actual_keys = KeyIndex::new(actual)?;

    let mut operations = Vec::with_capacity(expected.len() + actual.len());
    for (index, (key, a)) in actual.iter().enumerate() {
        let Some(expected_index) = expected_keys.position(key) else {
            operations.push(Operation::Noop {
                key: key.clone(),
                value: (*a).clone(),
                index,
            });
            continue;
        };
        let e = expected[expected_index].1;
        if e.matches(a) {
            operations.push(Operation::Equal {
                key: key.clone(),
                value: (*a).clone(),
                index,
            });
        } else {
            operations.push(Operation::Delete {
                key: key.clone(),
                value: e.clone(),
                index: expected_index,
            });
            operations.push(Operation::Insert {
                key: key.clone(),
                value: (*a).clone(),
                index,
            });
        }
    }
    for (index, (key, e)) in expected.iter().enumerate() {
        if actual_keys.position(key).is_none() {
            operations.push(Operation::Delete {
                key: key.clone(),
                value: (*e).clone(),
                index,
            });
        }
    }
    Ok(operations)
}

/// Aligns the elements a placeholder requires against a full sequence.
///
/// Required elements are paired with distinct actual elements, as many as
/// can be. Each actual element is `Equal` when it is paired and `Noop`
/// otherwise; required elements left unpaired are appended as deletes.
pub fn align_collection_subset(expected: &[Value], actual: &[Value]) -> Vec<Operation> {
    let assigned = assign_distinct(expected, actual);
    let mut paired = vec![false; actual.len()];
    for index in assigned.iter().flatten() {
        paired[*index] = true;
    }

    let mut operations = Vec::with_capacity(expected.len() + actual.len());
    for (index, a) in actual.iter().enumerate() {
        let key = Key::Index(index);
        let value = a.clone();
        if paired[index] {
            operations.push(Operation::Equal { key, value, index });
        } else {
            operations.push(Operation::Noop { key, value, index });
        }
    }
    for (index, e) in expected.iter().enumerate() {
        if assigned[index].is_none() {
            operations.push(Operation::Delete {
                key: Key::Index(index),
                value: e.clone(),
                index,
            });
        }
    }
    operations
}

/// Keys that can be looked up by hash; everything else is compared by `==`.
#[derive(PartialEq, Eq, Hash)]
enum HashedKey<'a> {
    Index(usize),
    Symbol(&'a str),
    String(&'a str),
    Attribute(&'a str),
}

impl<'a> HashedKey<'a> {
    fn of(key: &'a Key) -> Option<Self> {
        match key {
            Key::Index(index) => Some(HashedKey::Index(*index)),
            Key::Attribute(name) => Some(HashedKey::Attribute(name)),
            Key::Entry(Value::Symbol(name)) => Some(HashedKey::Symbol(name)),
            Key::Entry(Value::String(s)) => Some(HashedKey::String(s)),
            Key::Entry(_) => None,
        }
    }
}

/// Positions of the keys of one side, validated on construction.
struct KeyIndex<'a> {
    entries: &'a [(Key, &'a Value)],
    hashed: HashMap<HashedKey<'a>, usize>,
    other: Vec<usize>,
}

impl<'a> KeyIndex<'a> {
    /// Fails on a key that is not equal to itself, or on a key seen twice.
    fn new(entries: &'a [(Key, &'a Value)]) -> Result<Self, DiffError> {
        let mut hashed = HashMap::with_capacity(entries.len());
        let mut other: Vec<usize> = Vec::new();
        for (i, (key, _)) in entries.iter().enumerate() {
            if !key.is_self_equal() {
                return Err(DiffError::IncomparableKey {
                    key: key.to_string(),
                });
            }
            let duplicate = match HashedKey::of(key) {
                Some(hashed_key) => hashed.insert(hashed_key, i).is_some(),
                None => {
                    let seen = other.iter().any(|&j| entries[j].0 == *key);
                    other.push(i);
                    seen
                }
            };
            if duplicate {
                return Err(DiffError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(Self {
            entries,
            hashed,
            other,
        })
    }

    fn position(&self, key: &Key) -> Option<usize> {
        match HashedKey::of(key) {
            Some(hashed_key) => {
                let hashed: &HashMap<HashedKey<'_>, usize> = &self.hashed;
                hashed.get(&hashed_key).copied()
            }
            None => self
                .other
                .iter()
                .copied()
                .find(|&j| self.entries[j].0 == *key),
        }
    }
}
