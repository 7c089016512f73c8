//! Strings: quoted and escaped when inlined, raw lines in a line diff.

use whydiff_value::Value;

use super::{InspectionTreeBuilder, Inspector};
use crate::Node;

/// Shown in place of a newline.
const NEWLINE_GLYPH: char = '⏎';

/// Strings, as a quoted literal.
pub struct StringInspector;

impl InspectionTreeBuilder for StringInspector {
    fn name(&self) -> &'static str {
        "string"
    }

    fn applies_to(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn build(&self, value: &Value, _inspector: &Inspector<'_>) -> Node {
        match value {
            Value::String(s) => Node::text(quote(s)),
            other => Node::text(format!("{other:?}")),
        }
    }
}

/// Quotes and escapes `s` so that it fits on one line.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => push_visible(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// One line of a multi-line string as shown in a line diff: unquoted, with
/// its newline (if any) made visible.
pub fn raw_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        push_visible(&mut out, c);
    }
    out
}

/// Splits `s` into lines, each keeping its newline.
pub fn split_lines(s: &str) -> Vec<String> {
    s.split_inclusive('\n').map(str::to_owned).collect()
}

fn push_visible(out: &mut String, c: char) {
    match c {
        '\n' => out.push(NEWLINE_GLYPH),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", u32::from(c))),
        c => out.push(c),
    }
}
