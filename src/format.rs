//! JSON output, compact and indented.
//!
//! Object members are emitted in insertion order, never sorted. Integers
//! emit their canonical decimal representation; a [`Decimal`] emits the
//! literal text it was built from, so no precision is lost or renormalized.
//!
//! [`Decimal`]: crate::Decimal

use crate::escape;
use crate::value::Value;

/// Indentation width applied when none is configured.
pub const DEFAULT_INDENTATION: usize = 2;

/// Formatting options for indented output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Spaces added per nesting level.
    pub indent: usize,
    /// Separator between lines.
    pub line_separator: String,
    /// Whether to end the document with a line separator.
    pub trailing_newline: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENTATION,
            line_separator: "\n".to_string(),
            trailing_newline: false,
        }
    }
}

/// Serialize a value as compact JSON with no inter-token whitespace.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    serialize_into(&mut out, value);
    out
}

/// Serialize a value as compact JSON, appending to `out`.
pub fn serialize_into(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Long(i) => out.push_str(&i.to_string()),
        // Emit the shortest decimal form for the float's own width, so the
        // text parses back to an equal value.
        Value::Float(f) => {
            if f.is_finite() {
                out.push_str(&f.to_string());
            } else {
                out.push_str("null");
            }
        }
        Value::Double(f) => push_float(out, *f),
        Value::Decimal(d) => out.push_str(d.as_str()),
        Value::String(s) => push_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                serialize_into(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_string(out, key);
                out.push(':');
                serialize_into(out, member);
            }
            out.push('}');
        }
    }
}

/// Serialize a value with one member per line and nested indentation.
pub fn indented(value: &Value, options: &Format) -> String {
    let mut out = String::new();
    indented_into(&mut out, value, options);
    out
}

/// Serialize a value with indentation, appending to `out`.
pub fn indented_into(out: &mut String, value: &Value, options: &Format) {
    indent_value(out, value, options, 0);
    if options.trailing_newline {
        out.push_str(&options.line_separator);
    }
}

fn indent_value(out: &mut String, value: &Value, options: &Format, indent: usize) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push('{');
            let inner = indent + options.indent;
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&options.line_separator);
                push_spaces(out, inner);
                push_string(out, key);
                out.push_str(": ");
                indent_value(out, member, options, inner);
            }
            out.push_str(&options.line_separator);
            push_spaces(out, indent);
            out.push('}');
        }
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            let inner = indent + options.indent;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&options.line_separator);
                push_spaces(out, inner);
                indent_value(out, item, options, inner);
            }
            out.push_str(&options.line_separator);
            push_spaces(out, indent);
            out.push(']');
        }
        other => serialize_into(out, other),
    }
}

fn push_spaces(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}

fn push_string(out: &mut String, s: &str) {
    out.push('"');
    escape::encode_into(out, s);
    out.push('"');
}

/// Floats have no JSON representation for NaN or infinities; emit `null`.
fn push_float(out: &mut String, f: f64) {
    if f.is_finite() {
        out.push_str(&f.to_string());
    } else {
        out.push_str("null");
    }
}
