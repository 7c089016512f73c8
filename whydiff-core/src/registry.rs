//! Ordered selection of operation tree builders, and the recursion that
//! ties builders and the merge pass together.

use std::sync::{Arc, LazyLock};

use whydiff_value::{ObjectKind, Value};

use crate::builders::{
    ArrayTreeBuilder, CollectionIncludingTreeBuilder, DateTreeBuilder, HashIncludingTreeBuilder,
    HashTreeBuilder, ObjectHavingTreeBuilder, ObjectTreeBuilder, OperationTreeBuilder,
    TimeTreeBuilder,
};
use crate::{DiffError, OperationTree, merge};

/// Nesting depth at which diffing gives up.
const DEFAULT_MAX_DEPTH: usize = 64;

static STANDARD: LazyLock<BuilderRegistry> = LazyLock::new(|| BuilderRegistry {
    builders: vec![
        Arc::new(HashIncludingTreeBuilder),
        Arc::new(CollectionIncludingTreeBuilder),
        Arc::new(ObjectHavingTreeBuilder),
        Arc::new(ArrayTreeBuilder),
        Arc::new(HashTreeBuilder),
        Arc::new(TimeTreeBuilder),
        Arc::new(DateTreeBuilder),
        Arc::new(ObjectTreeBuilder::new(ObjectKind::Custom)),
        Arc::new(ObjectTreeBuilder::new(ObjectKind::Reflected)),
    ],
    max_depth: DEFAULT_MAX_DEPTH,
});

/// An ordered list of operation tree builders.
///
/// The first builder whose predicate accepts a pair diffs it. When none
/// does, the fallback applies: the pair is not diffable, which
/// [`classify_pair`](Self::classify_pair) reports as `None`.
#[derive(Clone)]
pub struct BuilderRegistry {
    builders: Vec<Arc<dyn OperationTreeBuilder>>,
    max_depth: usize,
}

impl BuilderRegistry {
    /// Adds `builder` ahead of every builder already registered.
    pub fn with_builder(mut self, builder: impl OperationTreeBuilder + 'static) -> Self {
        self.builders.insert(0, Arc::new(builder));
        self
    }

    /// Sets how deeply nested pairs may be diffed before giving up with
    /// [`DiffError::DepthLimitExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Picks the builder for a pair, or `None` when only the fallback
    /// applies.
    pub fn classify_pair(&self, expected: &Value, actual: &Value) -> Option<&dyn OperationTreeBuilder> {
        let builder = self
            .builders
            .iter()
            .find(|builder| builder.applies_to(expected, actual))
            .map(|builder| builder.as_ref());
        trace!(
            expected = expected.kind_name(),
            actual = actual.kind_name(),
            builder = builder.map_or("default", |b| b.name()),
            "classified pair"
        );
        builder
    }

    /// Diffs a pair into a merged operation tree, or `None` when the pair
    /// is not diffable.
    pub fn build_operation_tree(
        &self,
        expected: &Value,
        actual: &Value,
    ) -> Result<Option<OperationTree>, DiffError> {
        self.build_at(expected, actual, 0)
    }

    fn build_at(
        &self,
        expected: &Value,
        actual: &Value,
        depth: usize,
    ) -> Result<Option<OperationTree>, DiffError> {
        let Some(builder) = self.classify_pair(expected, actual) else {
            return Ok(None);
        };
        if depth > self.max_depth {
            return Err(DiffError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        debug!(builder = builder.name(), depth, "building operation tree");

        let raw = builder.operations(expected, actual)?;
        let operations = merge(raw, |left, right| self.build_at(left, right, depth + 1))?;
        Ok(Some(OperationTree::new(
            builder.style(expected, actual),
            operations,
        )))
    }

    /// Names of the builders in priority order, fallback last.
    pub fn names(&self) -> Vec<&'static str> {
        self.builders
            .iter()
            .map(|builder| builder.name())
            .chain(core::iter::once("default"))
            .collect()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl core::fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("builders", &self.names())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
