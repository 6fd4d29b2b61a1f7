//! Error types for line protocol parsing and encoding.
//!
//! Every failure mode of the parser maps to one [`Error`] variant, so callers
//! can match on the exact reason a line produced no record.
//!
//! ## Error Categories
//!
//! - **Input errors**: empty or blank lines
//! - **Structural errors**: missing timestamp segment, missing measurement,
//!   tag/field tokens without a `=` separator
//! - **Value errors**: field values or timestamp segments that claim numeric
//!   shape but fail to parse
//!
//! ## Propagation
//!
//! All errors are detected synchronously during the single scan (or during the
//! final timestamp extraction) and abort the parse with no partial record.
//! Parsing is deterministic, so retrying identical input is pointless; callers
//! should treat any error as "this line produced no record".
//!
//! ## Examples
//!
//! ```rust
//! use line_protocol::{parse_line, Error};
//!
//! let result = parse_line("");
//! assert_eq!(result.unwrap_err(), Error::EmptyInput);
//!
//! let result = parse_line("novalue");
//! assert_eq!(result.unwrap_err(), Error::MissingTimestamp);
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing a line.
///
/// Each variant carries the offending token where one exists, to aid
/// debugging of malformed producer output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input line is empty or contains only whitespace
    #[error("input line is empty or blank")]
    EmptyInput,

    /// No unescaped, unquoted space delimits a trailing timestamp segment
    #[error("no timestamp segment: line contains no unquoted space delimiter")]
    MissingTimestamp,

    /// The scan produced an empty measurement name
    #[error("missing measurement name")]
    MissingMeasurement,

    /// A tag or field token lacks the `=` key/value separator
    #[error("malformed pair `{pair}`: no `=` separator")]
    MalformedPair { pair: String },

    /// A field value with numeric shape failed to parse as the inferred type
    #[error("malformed value `{value}`: not a valid {expected}")]
    MalformedValue {
        value: String,
        expected: &'static str,
    },

    /// The trailing timestamp segment is not a valid integer
    #[error("malformed timestamp `{segment}`: not a valid integer")]
    MalformedTimestamp { segment: String },
}

impl Error {
    /// Creates a malformed-pair error for a tag or field token without `=`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_protocol::Error;
    ///
    /// let err = Error::malformed_pair("hostserver01");
    /// assert!(err.to_string().contains("hostserver01"));
    /// ```
    pub fn malformed_pair(pair: &str) -> Self {
        Error::MalformedPair {
            pair: pair.to_string(),
        }
    }

    /// Creates a malformed-value error for a field value that claimed a
    /// numeric shape (`i` suffix or bare token) but did not parse.
    pub fn malformed_value(value: &str, expected: &'static str) -> Self {
        Error::MalformedValue {
            value: value.to_string(),
            expected,
        }
    }

    /// Creates a malformed-timestamp error for a trailing segment that is
    /// not a base-10 integer.
    pub fn malformed_timestamp(segment: &str) -> Self {
        Error::MalformedTimestamp {
            segment: segment.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
