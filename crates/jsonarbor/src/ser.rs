//! Canonical JSON output.

use alloc::string::String;
use core::fmt;

use crate::{Value, strings};

/// Options for [`Value::to_json_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Emit `/` as `\/` so the output can be embedded in XML or HTML.
    /// Defaults to `true`.
    pub escape_slashes: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            escape_slashes: true,
        }
    }
}

fn write_value<W: fmt::Write>(
    value: &Value,
    options: SerializeOptions,
    out: &mut W,
) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => {
            out.write_char('"')?;
            strings::write_escaped(s, options.escape_slashes, out)?;
            out.write_char('"')
        }
        Value::Array(array) => {
            out.write_char('[')?;
            for (ix, element) in array.iter().enumerate() {
                if ix > 0 {
                    out.write_char(',')?;
                }
                write_value(element, options, out)?;
            }
            out.write_char(']')
        }
        Value::Object(object) => {
            out.write_char('{')?;
            for (ix, (key, element)) in object.iter().enumerate() {
                if ix > 0 {
                    out.write_char(',')?;
                }
                out.write_char('"')?;
                strings::write_escaped(key, options.escape_slashes, out)?;
                out.write_str("\":")?;
                write_value(element, options, out)?;
            }
            out.write_char('}')
        }
    }
}

impl Value {
    /// Serializes to canonical JSON with the default options.
    ///
    /// Object entries are written in insertion order, so output is
    /// deterministic for a given tree.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_json_with(SerializeOptions::default())
    }

    /// Serializes to canonical JSON.
    #[must_use]
    pub fn to_json_with(&self, options: SerializeOptions) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_value(self, options, &mut out);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, SerializeOptions::default(), f)
    }
}
