#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod differ;
mod matchers;
mod options;
mod report;

pub use differ::Differ;
pub use options::DiffOptions;
pub use report::Comparison;

pub use whydiff_core::{
    BuilderRegistry, DiffError, Key, Operation, OperationTree, OperationTreeBuilder,
};
pub use whydiff_pretty::{InspectionTreeBuilder, InspectorRegistry, PrettyPrinter};
pub use whydiff_value::{
    Attributes, MapValue, Number, ObjectKind, ObjectValue, Partial, RangeValue, ToValueError,
    Value, to_value,
};

/// Pretty-prints a value with default options.
pub fn inspect(value: &Value) -> String {
    Differ::default().inspect(value)
}

/// Explains why `actual` does not match `expected`, with default options.
pub fn diff(expected: &Value, actual: &Value) -> Result<Comparison, DiffError> {
    Differ::default().compare(expected, actual)
}

/// Explains why `actual` does not match `expected`.
pub fn diff_with(
    expected: &Value,
    actual: &Value,
    options: &DiffOptions,
) -> Result<Comparison, DiffError> {
    Differ::new(options.clone()).compare(expected, actual)
}
