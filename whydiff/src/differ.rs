use whydiff_core::{
    AnsiBackend, BuilderRegistry, ColorBackend, DiffError, OperationTree, PlainBackend,
    RenderOptions, SemanticColor, render_to_string,
};
use whydiff_pretty::{InspectorRegistry, PrettyPrinter};
use whydiff_value::Value;

use crate::{Comparison, DiffOptions, matchers};

/// Compares and inspects values with a fixed configuration.
///
/// ```
/// use whydiff::{DiffOptions, Differ, Value};
///
/// let differ = Differ::new(DiffOptions::plain());
/// let comparison = differ
///     .compare(&Value::from("latte"), &Value::from("mocha"))
///     .unwrap();
///
/// assert!(!comparison.equal);
/// assert_eq!(
///     comparison.summary,
///     "Differing strings.\n\nExpected: \"latte\"\n  Actual: \"mocha\""
/// );
/// assert_eq!(comparison.diff_block, None);
/// ```
#[derive(Debug, Clone)]
pub struct Differ {
    options: DiffOptions,
    printer: PrettyPrinter,
    builders: BuilderRegistry,
}

impl Default for Differ {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}

impl Differ {
    /// A differ with the standard registries.
    pub fn new(options: DiffOptions) -> Self {
        let printer = PrettyPrinter::new()
            .with_width(options.width())
            .with_max_depth(options.max_depth());
        let builders = BuilderRegistry::default().with_max_depth(options.max_depth());
        Self {
            options,
            printer,
            builders,
        }
    }

    /// Use custom inspection builders, for both inspection and the leaves of
    /// diffs.
    pub fn with_inspectors(mut self, registry: InspectorRegistry) -> Self {
        self.printer = self.printer.with_registry(registry);
        self
    }

    /// Use custom operation tree builders.
    pub fn with_builders(mut self, registry: BuilderRegistry) -> Self {
        self.builders = registry.with_max_depth(self.options.max_depth());
        self
    }

    /// The options in use.
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Pretty-prints a value, breaking containers that do not fit the width.
    pub fn inspect(&self, value: &Value) -> String {
        self.printer.format(value)
    }

    /// Explains why `actual` does not match `expected`.
    ///
    /// Placeholders on the expected side match the way [`Value::matches`]
    /// does. Fails when a map carries a key that cannot be compared, or
    /// when the values nest deeper than the configured limit.
    pub fn compare(&self, expected: &Value, actual: &Value) -> Result<Comparison, DiffError> {
        if expected.matches(actual) {
            debug!("values are equal");
            return Ok(Comparison::equal());
        }

        let matcher = matchers::select(expected, actual);
        let tree = matcher.diff_tree(&self.builders, expected, actual)?;
        debug!(
            matcher = matcher.name(),
            has_diff = tree.is_some(),
            "values differ"
        );

        let (summary, diff_block) = if self.options.colors() {
            self.explain(matcher.label(), expected, actual, tree, AnsiBackend::default())
        } else {
            self.explain(matcher.label(), expected, actual, tree, PlainBackend)
        };
        Ok(Comparison::different(summary, diff_block))
    }

    fn explain<B: ColorBackend>(
        &self,
        label: &str,
        expected: &Value,
        actual: &Value,
        tree: Option<OperationTree>,
        backend: B,
    ) -> (String, Option<String>) {
        let mut summary = format!("{label}\n\n");
        backend
            .write_styled(
                &mut summary,
                &format!("Expected: {}", self.printer.format_inline(expected)),
                SemanticColor::Deleted,
            )
            .expect("writing to String cannot fail");
        summary.push('\n');
        backend
            .write_styled(
                &mut summary,
                &format!("  Actual: {}", self.printer.format_inline(actual)),
                SemanticColor::Inserted,
            )
            .expect("writing to String cannot fail");

        let diff_block = tree.map(|tree| {
            let opts = RenderOptions::plain()
                .with_backend(backend)
                .with_printer(self.printer.clone());
            render_to_string(&tree, &opts)
        });
        (summary, diff_block)
    }
}
