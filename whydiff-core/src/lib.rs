#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod alignment;
pub mod builders;
mod error;
mod merge;
mod operation;
mod registry;
pub mod render;

pub use alignment::{align_collection_subset, align_entries, align_sequences, align_subset};
pub use builders::OperationTreeBuilder;
pub use error::DiffError;
pub use merge::merge;
pub use operation::{Key, KeyStyle, Operation, OperationTree, TreeStyle};
pub use registry::BuilderRegistry;
pub use render::{
    AnsiBackend, ColorBackend, DiffSymbols, DiffTheme, PlainBackend, RenderOptions, SemanticColor,
    render, render_lines, render_to_string, write_lines,
};
