//! # line_protocol
//!
//! A single-pass parser and encoder for the InfluxDB line protocol text format.
//!
//! ## What is line protocol?
//!
//! A newline-delimited format encoding one measurement event per line: a
//! measurement name, indexed string tags, typed fields, and a nanosecond
//! timestamp.
//!
//! ```text
//! cpu,host=server01,region=us-west value=0.64 1434055562000000000
//! ```
//!
//! ## Key Features
//!
//! - **Single-pass parsing**: one O(n) left-to-right scan, no backtracking
//! - **Typed field values**: integers (`10i`), floats, booleans, and quoted
//!   strings classified by ordered inference rules
//! - **Order preserving**: tag and field sets keep wire order, so identical
//!   input re-encodes identically
//! - **Explicit errors**: every malformed line maps to a specific [`Error`]
//!   variant; no partial records, no panics
//! - **Re-entrant**: no shared state between calls; parse from as many
//!   threads as you like
//!
//! ## Quick Start
//!
//! ```rust
//! use line_protocol::{parse_line, FieldValue};
//!
//! let point = parse_line("cpu,host=server01 value=0.64 1434055562000000000").unwrap();
//!
//! assert_eq!(point.measurement(), "cpu");
//! assert_eq!(point.tags().get("host"), Some(&"server01".to_string()));
//! assert_eq!(point.fields().get("value"), Some(&FieldValue::Float(0.64)));
//! assert_eq!(point.timestamp(), 1434055562000000000);
//! ```
//!
//! ### Building and Encoding Points
//!
//! ```rust
//! use line_protocol::{parse_line, Point};
//!
//! let point = Point::builder("cpu")
//!     .tag("host", "server01")
//!     .field("value", 10i64)
//!     .timestamp(1434055562000000000)
//!     .build();
//!
//! let line = line_protocol::to_line(&point);
//! assert_eq!(line, "cpu,host=server01 value=10i 1434055562000000000");
//!
//! // Round-trips through the parser
//! assert_eq!(parse_line(&line).unwrap(), point);
//! ```
//!
//! ### Map Macros
//!
//! ```rust
//! use line_protocol::{fields, tags, FieldValue};
//!
//! let tags = tags! { "host" => "server01" };
//! let fields = fields! { "value" => 0.64, "active" => true };
//!
//! assert_eq!(tags.get("host"), Some(&"server01".to_string()));
//! assert_eq!(fields.get("active"), Some(&FieldValue::Boolean(true)));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) in the line length, single pass
//! - **Memory**: O(n) auxiliary space for the produced strings
//! - **No I/O, no blocking**: each call is a pure computation over its input
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full layout, quoting, and escaping
//! rules this implementation follows.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod point;
pub mod ser;
pub mod value;

pub use de::LineParser;
pub use error::{Error, Result};
pub use map::{FieldMap, PointMap, TagMap};
pub use point::{Point, PointBuilder};
pub use value::FieldValue;

/// Parses one line of line protocol text into a [`Point`].
///
/// The line is taken whole; it must not contain embedded newlines (a
/// trailing newline from a reader is trimmed). Each call is independent and
/// re-entrant.
///
/// # Examples
///
/// ```rust
/// use line_protocol::{parse_line, FieldValue};
///
/// let point = parse_line("cpu,host=server01 active=true 1434055562000000000").unwrap();
/// assert_eq!(point.fields().get("active"), Some(&FieldValue::Boolean(true)));
/// ```
///
/// # Errors
///
/// Returns the specific [`Error`] variant for empty input, a missing or
/// malformed timestamp, a pair without `=`, a field value that fails type
/// inference, or an empty measurement name. On any error no record is
/// produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_line(line: &str) -> Result<Point> {
    LineParser::new(line).parse()
}

/// Encodes a [`Point`] as one line of line protocol text.
///
/// Delimiter characters in the measurement, tag pairs, and field keys are
/// backslash-escaped; field values render in their typed wire shape. See
/// the [`ser`] module for details.
///
/// # Examples
///
/// ```rust
/// use line_protocol::Point;
///
/// let point = Point::builder("cpu")
///     .field("value", 0.64)
///     .timestamp(99)
///     .build();
/// assert_eq!(line_protocol::to_line(&point), "cpu value=0.64 99");
/// ```
#[must_use]
pub fn to_line(point: &Point) -> String {
    ser::to_line(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_smoke() {
        let point =
            parse_line("cpu,host=server01,region=us-west value=0.64 1434055562000000000").unwrap();
        assert_eq!(point.measurement(), "cpu");
        assert_eq!(point.tags().len(), 2);
        assert_eq!(point.fields().len(), 1);
    }

    #[test]
    fn test_roundtrip_smoke() {
        let point = Point::builder("mem")
            .tag("host", "server02")
            .field("used", 1024i64)
            .field("free", 2048i64)
            .timestamp(1434055562000000000)
            .build();
        let line = to_line(&point);
        assert_eq!(parse_line(&line).unwrap(), point);
    }

    #[test]
    fn test_errors_surface() {
        assert!(parse_line("").is_err());
        assert!(parse_line("novalue").is_err());
    }
}
