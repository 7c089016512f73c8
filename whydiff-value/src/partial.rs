//! Partial-match placeholders.

use crate::{MapValue, Value};

/// A placeholder standing in for a whole family of actual values.
#[derive(Debug, Clone, PartialEq)]
pub enum Partial {
    /// Any map that contains these entries (and possibly more).
    HashIncluding(MapValue),
    /// Any array containing these elements, each matched by a distinct
    /// element of the actual array, in any order.
    CollectionIncluding(Vec<Value>),
    /// Any object carrying these attributes (and possibly more).
    ObjectHaving(Vec<(String, Value)>),
}

impl Partial {
    /// The phrase used when inspecting the placeholder.
    pub fn description(&self) -> &'static str {
        match self {
            Partial::HashIncluding(_) => "a hash including",
            Partial::CollectionIncluding(_) => "a collection including",
            Partial::ObjectHaving(_) => "an object having attributes",
        }
    }

    /// Whether `actual` belongs to the family this placeholder describes.
    pub fn matches(&self, actual: &Value) -> bool {
        match (self, actual) {
            (Partial::HashIncluding(subset), Value::Map(map)) => subset
                .iter()
                .all(|(key, expected)| map.get(key).is_some_and(|a| expected.matches(a))),
            (Partial::CollectionIncluding(items), Value::Array(elements)) => {
                assign_distinct(items, elements).iter().all(Option::is_some)
            }
            (Partial::ObjectHaving(attributes), Value::Object(object)) => attributes
                .iter()
                .all(|(name, expected)| object.get(name).is_some_and(|a| expected.matches(a))),
            _ => false,
        }
    }
}

/// Pairs each `expected` element with a distinct `actual` element it
/// matches, assigning as many as possible.
///
/// Returns, per expected element, the index of its actual element. Uses
/// augmenting paths, so an early element never blocks a later one that had
/// no other candidate.
pub fn assign_distinct(expected: &[Value], actual: &[Value]) -> Vec<Option<usize>> {
    let candidates: Vec<Vec<usize>> = expected
        .iter()
        .map(|e| (0..actual.len()).filter(|&j| e.matches(&actual[j])).collect())
        .collect();

    let mut owner: Vec<Option<usize>> = vec![None; actual.len()];
    for i in 0..expected.len() {
        let mut visited = vec![false; actual.len()];
        augment(i, &candidates, &mut owner, &mut visited);
    }

    let mut assigned = vec![None; expected.len()];
    for (j, owner) in owner.iter().enumerate() {
        if let Some(i) = *owner {
            assigned[i] = Some(j);
        }
    }
    assigned
}

fn augment(
    i: usize,
    candidates: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &j in &candidates[i] {
        if visited[j] {
            continue;
        }
        visited[j] = true;
        let free = match owner[j] {
            None => true,
            Some(k) => augment(k, candidates, owner, visited),
        };
        if free {
            owner[j] = Some(i);
            return true;
        }
    }
    false
}
