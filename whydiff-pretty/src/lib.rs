#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod builders;
mod layout;
mod printer;
mod registry;
mod tree;

pub use builders::{InspectionTreeBuilder, Inspector, quote, raw_line, split_lines};
pub use layout::{Layout, Line, Marker};
pub use printer::PrettyPrinter;
pub use registry::InspectorRegistry;
pub use tree::{Entry, Group, Node};
