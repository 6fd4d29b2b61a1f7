//! The parsed data point record.
//!
//! A [`Point`] is the structured result of parsing one line: a measurement
//! name, an ordered tag set, an ordered typed field set, and a nanosecond
//! timestamp. It is fully populated during the single scan and immutable to
//! the caller thereafter.
//!
//! Points can also be built programmatically with [`PointBuilder`] for
//! encoding back to wire text:
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
//!     point.to_line(),
//!     "cpu,host=server01 value=0.64 1434055562000000000"
//! );
//! ```

use crate::map::{FieldMap, TagMap};
use crate::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One measurement event: the structured record a line decodes into.
///
/// Invariants after a successful parse:
///
/// - `measurement` is non-empty
/// - `timestamp` is present (its absence is a hard parse error)
/// - `tags` and `fields` preserve wire order; duplicate keys were resolved
///   last-write-wins during the scan
///
/// A point with zero fields is degenerate but accepted: a line such as
/// `cpu 1434055562000000000` parses to a point carrying no data. Callers
/// that require data should check [`Point::fields`] themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    measurement: String,
    tags: TagMap,
    fields: FieldMap,
    timestamp: i64,
}

impl Point {
    /// Creates a point from its parts.
    ///
    /// Mostly useful in tests; prefer [`Point::builder`] for incremental
    /// construction and [`crate::parse_line`] for wire input.
    #[must_use]
    pub fn new(measurement: String, tags: TagMap, fields: FieldMap, timestamp: i64) -> Self {
        Point {
            measurement,
            tags,
            fields,
            timestamp,
        }
    }

    /// Starts building a point for the given measurement.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_protocol::{FieldValue, Point};
    ///
    /// let point = Point::builder("cpu")
    ///     .field("value", 10i64)
    ///     .timestamp(1434055562000000000)
    ///     .build();
    /// assert_eq!(point.fields().get("value"), Some(&FieldValue::Integer(10)));
    /// ```
    #[must_use]
    pub fn builder(measurement: impl Into<String>) -> PointBuilder {
        PointBuilder {
            measurement: measurement.into(),
            tags: TagMap::new(),
            fields: FieldMap::new(),
            timestamp: 0,
        }
    }

    /// The entity name this point belongs to (analogous to a table name).
    #[must_use]
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    /// The indexed string attributes, in wire order.
    #[must_use]
    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    /// The typed value attributes, in wire order.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// The nanosecond-resolution epoch timestamp.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The timestamp as a UTC instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_protocol::parse_line;
    ///
    /// let point = parse_line("cpu,host=a value=1i 1434055562000000000").unwrap();
    /// assert_eq!(point.time().timestamp(), 1434055562);
    /// ```
    #[must_use]
    pub fn time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp)
    }

    /// Encodes this point back to line protocol text.
    ///
    /// See [`crate::to_line`] for the escaping rules.
    #[must_use]
    pub fn to_line(&self) -> String {
        crate::ser::to_line(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Fluent builder for [`Point`].
///
/// Created via [`Point::builder`]. The timestamp defaults to `0` when not
/// set; wire-faithful points should always set it explicitly.
#[derive(Debug, Clone)]
pub struct PointBuilder {
    measurement: String,
    tags: TagMap,
    fields: FieldMap,
    timestamp: i64,
}

impl PointBuilder {
    /// Adds a tag pair. Duplicate keys replace the earlier value.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Adds a field pair. Duplicate keys replace the earlier value.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Sets the nanosecond epoch timestamp.
    #[must_use]
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Finishes the point.
    #[must_use]
    pub fn build(self) -> Point {
        Point {
            measurement: self.measurement,
            tags: self.tags,
            fields: self.fields,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let point = Point::builder("cpu")
            .tag("host", "server01")
            .tag("region", "us-west")
            .field("value", 0.64)
            .field("active", true)
            .timestamp(1434055562000000000)
            .build();

        assert_eq!(point.measurement(), "cpu");
        assert_eq!(point.tags().len(), 2);
        assert_eq!(
            point.tags().get("host"),
            Some(&"server01".to_string())
        );
        assert_eq!(
            point.fields().get("active"),
            Some(&FieldValue::Boolean(true))
        );
        assert_eq!(point.timestamp(), 1434055562000000000);
    }

    #[test]
    fn test_builder_duplicate_key_last_wins() {
        let point = Point::builder("cpu")
            .tag("host", "a")
            .tag("host", "b")
            .field("value", 1i64)
            .build();
        assert_eq!(point.tags().get("host"), Some(&"b".to_string()));
        assert_eq!(point.tags().len(), 1);
    }

    #[test]
    fn test_time_conversion() {
        let point = Point::builder("cpu")
            .field("value", 1i64)
            .timestamp(1434055562000000000)
            .build();
        assert_eq!(point.time().timestamp_nanos_opt(), Some(1434055562000000000));
    }

    #[test]
    fn test_serde_json_representation() {
        let point = Point::builder("cpu")
            .tag("host", "a")
            .field("value", 10i64)
            .timestamp(5)
            .build();
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["measurement"], "cpu");
        assert_eq!(json["tags"]["host"], "a");
        assert_eq!(json["fields"]["value"], 10);
        assert_eq!(json["timestamp"], 5);

        let back: Point = serde_json::from_value(json).unwrap();
        assert_eq!(back, point);
    }
}
