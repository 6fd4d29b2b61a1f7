//! Line protocol encoding.
//!
//! Renders a [`Point`] back to one line of wire text:
//!
//! ```text
//! <measurement>[,<tagKey>=<tagValue>...] <fieldKey>=<fieldValue>[,...] <timestamp>
//! ```
//!
//! Characters that would be read as delimiters on the way back in are
//! backslash-escaped: `,` and space in the measurement name; `,`, space, and
//! `=` in tag keys, tag values, and field keys. Field values render in their
//! typed wire shape (`10i`, `0.64`, `true`, `"quoted"`).
//!
//! ```rust
//! use line_protocol::Point;
//!
//! let point = Point::builder("cpu")
//!     .tag("host", "server01")
//!     .field("value", 0.64)
//!     .timestamp(1434055562000000000)
//!     .build();
//!
//! assert_eq!(
//!     line_protocol::to_line(&point),
//!     "cpu,host=server01 value=0.64 1434055562000000000"
//! );
//! ```

use crate::Point;

/// Encodes a point as one line of line protocol text.
///
/// The output ends with the timestamp; no trailing newline is appended, so
/// callers batching multiple points join them with `\n` themselves.
#[must_use]
pub fn to_line(point: &Point) -> String {
    let mut line = String::with_capacity(64);
    escape_measurement(&mut line, point.measurement());

    for (key, value) in point.tags() {
        line.push(',');
        escape_key(&mut line, key);
        line.push('=');
        escape_key(&mut line, value);
    }

    let mut first = true;
    for (key, value) in point.fields() {
        line.push(if first { ' ' } else { ',' });
        first = false;
        escape_key(&mut line, key);
        line.push('=');
        // FieldValue::Display renders the typed wire shape
        line.push_str(&value.to_string());
    }

    line.push(' ');
    line.push_str(&point.timestamp().to_string());
    line
}

/// Escapes `,` and space in a measurement name.
fn escape_measurement(out: &mut String, name: &str) {
    for ch in name.chars() {
        if ch == ',' || ch == ' ' {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Escapes `,`, space, and `=` in tag keys, tag values, and field keys.
fn escape_key(out: &mut String, key: &str) {
    for ch in key.chars() {
        if ch == ',' || ch == ' ' || ch == '=' {
            out.push('\\');
        }
        out.push(ch);
    }
}
