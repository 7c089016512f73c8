//! Folding same-key delete/insert pairs into changes.

use whydiff_value::Value;

use crate::{DiffError, Key, Operation, OperationTree};

/// Runs the merge pass over raw aligned operations.
///
/// Deletes are remembered until an insert with the same key shows up. The
/// first such insert claims the delete: `diff_pair` is asked to diff their
/// two values, and if it produces a tree the delete is dropped and the
/// insert becomes a `Change` carrying that tree. If it does not, both stay
/// as they are. Either way the delete is not offered to any later insert.
///
/// The result is a new sequence; the input is consumed, never edited in
/// place.
pub fn merge<F>(operations: Vec<Operation>, mut diff_pair: F) -> Result<Vec<Operation>, DiffError>
where
    F: FnMut(&Value, &Value) -> Result<Option<OperationTree>, DiffError>,
{
    let mut merged: Vec<Option<Operation>> = Vec::with_capacity(operations.len());
    let mut unmatched: Vec<(usize, Key)> = Vec::new();

    for operation in operations {
        match operation {
            Operation::Delete { ref key, .. } => {
                unmatched.push((merged.len(), key.clone()));
                merged.push(Some(operation));
            }
            Operation::Insert { key, value, index } => {
                let Some(pending) = unmatched.iter().position(|(_, k)| *k == key) else {
                    merged.push(Some(Operation::Insert { key, value, index }));
                    continue;
                };
                let (slot, _) = unmatched.remove(pending);

                let children = match &merged[slot] {
                    Some(Operation::Delete { value: left, .. }) => diff_pair(left, &value)?,
                    _ => None,
                };
                match (children, merged[slot].take()) {
                    (
                        Some(children),
                        Some(Operation::Delete {
                            value: left_value,
                            index: left_index,
                            ..
                        }),
                    ) => {
                        trace!(%key, "merged delete and insert into a change");
                        merged.push(Some(Operation::Change {
                            key,
                            left_value,
                            right_value: value,
                            left_index,
                            right_index: index,
                            children,
                        }));
                    }
                    (_, delete) => {
                        trace!(%key, "delete and insert are not diffable");
                        merged[slot] = delete;
                        merged.push(Some(Operation::Insert { key, value, index }));
                    }
                }
            }
            other => merged.push(Some(other)),
        }
    }

    Ok(merged.into_iter().flatten().collect())
}
