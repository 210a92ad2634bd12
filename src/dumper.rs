//! Rendering value trees as text.
//!
//! This module provides the [`Dumper`], which writes a [`Value`] in block form
//! down to a configurable nesting level and in single-line flow form below it.
//!
//! ## Overview
//!
//! - **Block form**: one line per element, `- ` for sequence items and `key: ` for
//!   mapping entries, nested levels indented by [`DumpOptions::indent`]
//! - **Flow form**: `[a, b]` and `{ k: v }`, used from the inline threshold on and
//!   for empty containers
//! - **Strings**: multi-line strings in block position become literal block
//!   scalars; other strings are quoted only when needed
//! - **Numbers**: locale-independent, floats always re-read as floats
//!
//! ## Usage
//!
//! ```rust
//! use serde_yamlite::{dump, yaml, DumpOptions, Dumper};
//!
//! let value = yaml!({
//!     "name": "demo",
//!     "tags": ["a", "b"],
//!     "nested": {"deep": {"deeper": [1, 2]}}
//! });
//!
//! assert_eq!(
//!     dump(&value, 2, 0),
//!     "name: demo\ntags:\n  - a\n  - b\nnested:\n  deep: { deeper: [1, 2] }\n"
//! );
//! assert_eq!(
//!     Dumper::new(DumpOptions::new().with_inline(0)).dump(&value),
//!     "{ name: demo, tags: [a, b], nested: { deep: { deeper: [1, 2] } } }"
//! );
//! ```

use crate::escape;
use crate::tag::{PassThrough, TagCodec};
use crate::{DumpOptions, Value};

/// Writes value trees as text.
///
/// Dumping never fails: every value has a textual form.
pub struct Dumper<'a> {
    options: DumpOptions,
    codec: &'a dyn TagCodec,
}

impl<'a> Dumper<'a> {
    pub fn new(options: DumpOptions) -> Self {
        Dumper {
            options,
            codec: &PassThrough,
        }
    }

    /// Sets the codec that renders [`Value::Tagged`] leaves.
    #[must_use]
    pub fn with_codec(mut self, codec: &'a dyn TagCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Renders `value`. Block form output ends with a newline, flow form output
    /// does not.
    pub fn dump(&self, value: &Value) -> String {
        let mut output = String::with_capacity(256);
        self.write_block(&mut output, value, self.options.inline, self.options.base_indent);
        output
    }

    fn step(&self) -> usize {
        self.options.indent.max(1)
    }

    fn write_block(&self, output: &mut String, value: &Value, inline: usize, indent: usize) {
        if inline == 0 || !is_nested(value) {
            push_indent(output, indent);
            self.write_inline(output, value);
            return;
        }

        match value {
            Value::Sequence(items) => {
                for item in items {
                    self.write_entry(output, "-", item, inline, indent);
                }
            }
            Value::Mapping(map) => {
                for (key, item) in map {
                    let mut lead = String::new();
                    self.write_inline(&mut lead, key);
                    lead.push(':');
                    self.write_entry(output, &lead, item, inline, indent);
                }
            }
            _ => {}
        }
    }

    /// Writes one `- item` or `key: value` line, followed by the nested block if
    /// the value stays in block form.
    fn write_entry(&self, output: &mut String, lead: &str, value: &Value, inline: usize, indent: usize) {
        push_indent(output, indent);
        output.push_str(lead);

        if let Value::String(s) = value {
            if let Some(header) = literal_block_header(s) {
                output.push(' ');
                output.push_str(&header);
                output.push('\n');
                write_literal_lines(output, s, indent + 2);
                return;
            }
        }

        let child_inline = inline - 1;
        if child_inline == 0 || !is_nested(value) {
            output.push(' ');
            self.write_inline(output, value);
            output.push('\n');
        } else {
            output.push('\n');
            self.write_block(output, value, child_inline, indent + self.step());
        }
    }

    fn write_inline(&self, output: &mut String, value: &Value) {
        match value {
            Value::Null => output.push_str("null"),
            Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => output.push_str(&i.to_string()),
            Value::Float(f) => write_float(output, *f),
            Value::String(s) => write_string(output, s),
            Value::Sequence(items) => {
                output.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        output.push_str(", ");
                    }
                    self.write_inline(output, item);
                }
                output.push(']');
            }
            Value::Mapping(map) => {
                if map.is_empty() {
                    output.push_str("{}");
                    return;
                }
                output.push_str("{ ");
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        output.push_str(", ");
                    }
                    self.write_inline(output, key);
                    output.push_str(": ");
                    self.write_inline(output, item);
                }
                output.push_str(" }");
            }
            Value::Tagged(tagged) => match self.codec.render_tag(tagged) {
                Some((tag, payload)) if payload.is_empty() => output.push_str(&tag),
                Some((tag, payload)) => {
                    output.push_str(&tag);
                    output.push(' ');
                    output.push_str(&payload);
                }
                None => output.push_str("null"),
            },
        }
    }
}

/// Renders `value` in block form down to `inline` levels, every line prefixed
/// with `indent` spaces.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{dump, yaml};
///
/// let value = yaml!({"a": [1, 2]});
/// assert_eq!(dump(&value, 1, 0), "a: [1, 2]\n");
/// assert_eq!(dump(&value, 2, 4), "    a:\n      - 1\n      - 2\n");
/// assert_eq!(dump(&value, 0, 0), "{ a: [1, 2] }");
/// ```
#[must_use]
pub fn dump(value: &Value, inline: usize, indent: usize) -> String {
    Dumper::new(
        DumpOptions::new()
            .with_inline(inline)
            .with_base_indent(indent),
    )
    .dump(value)
}

#[inline]
fn is_nested(value: &Value) -> bool {
    match value {
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        _ => false,
    }
}

#[inline]
fn push_indent(output: &mut String, indent: usize) {
    output.extend(std::iter::repeat(' ').take(indent));
}

fn write_float(output: &mut String, f: f64) {
    if f.is_nan() {
        output.push_str(".NaN");
    } else if f.is_infinite() {
        output.push_str(if f > 0.0 { ".Inf" } else { "-.Inf" });
    } else if f.fract() == 0.0 {
        // a bare whole number would read back as an integer
        let repr = format!("{:?}", f);
        output.push_str("!!float ");
        output.push_str(repr.strip_suffix(".0").unwrap_or(&repr));
    } else {
        output.push_str(&format!("{:?}", f));
    }
}

fn write_string(output: &mut String, s: &str) {
    if escape::requires_double_quoting(s) {
        output.push_str(&escape::escape_with_double_quotes(s));
    } else if escape::requires_single_quoting(s) {
        output.push_str(&escape::escape_with_single_quotes(s));
    } else {
        output.push_str(s);
    }
}

/// Returns the `|`, `|-`, `|2` or `|2-` header when `s` can be written as a
/// literal block scalar that reads back unchanged.
fn literal_block_header(s: &str) -> Option<String> {
    if !s.contains('\n') {
        return None;
    }
    let mut buf = [0; 4];
    if s
        .chars()
        .any(|c| c != '\n' && escape::requires_double_quoting(c.encode_utf8(&mut buf)))
    {
        return None;
    }
    let (body, chomp) = match s.strip_suffix('\n') {
        Some(body) if body.ends_with('\n') => return None,
        Some(body) => (body, ""),
        None => (s, "-"),
    };
    if body.split('\n').any(|line| !line.is_empty() && line.trim().is_empty()) {
        return None;
    }
    let first = body.split('\n').find(|line| !line.is_empty())?;
    let indicator = if first.starts_with(' ') { "2" } else { "" };
    Some(format!("|{}{}", indicator, chomp))
}

fn write_literal_lines(output: &mut String, s: &str, indent: usize) {
    let body = s.strip_suffix('\n').unwrap_or(s);
    for line in body.split('\n') {
        if !line.is_empty() {
            push_indent(output, indent);
            output.push_str(line);
        }
        output.push('\n');
    }
}
