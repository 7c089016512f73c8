//! Standalone pretty-printing of a value.

use whydiff_value::Value;

use crate::{Inspector, InspectorRegistry, Layout, Marker, Node};

/// A formatter for values.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    registry: InspectorRegistry,
    width: usize,
    indent_size: usize,
    max_depth: Option<usize>,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            registry: InspectorRegistry::default(),
            width: 80,
            indent_size: 2,
            max_depth: None,
        }
    }
}

impl PrettyPrinter {
    /// Create a new PrettyPrinter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width budget containers must fit in to stay on one line
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the indentation size
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Set the maximum depth for recursive printing; deeper values print as `...`
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Use a custom builder registry
    pub fn with_registry(mut self, registry: InspectorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The builder registry in use.
    pub fn registry(&self) -> &InspectorRegistry {
        &self.registry
    }

    /// The layout this printer lays trees out with.
    pub fn layout(&self) -> Layout {
        Layout::new(self.width).with_indent_size(self.indent_size)
    }

    /// Build the inspection tree of a value
    pub fn tree(&self, value: &Value) -> Node {
        Inspector::new(&self.registry, self.max_depth).inspect(value)
    }

    /// Format a value, breaking containers that do not fit the width
    pub fn format(&self, value: &Value) -> String {
        let layout = self.layout();
        let mut lines = Vec::new();
        layout.push_node(&mut lines, &self.tree(value), "", 0, Marker::Context, "");
        layout.write_plain(&lines)
    }

    /// Format a value on a single line
    pub fn format_inline(&self, value: &Value) -> String {
        self.tree(value).inline()
    }
}
