//! Line Protocol Format Reference
//!
//! This module documents the line protocol text layout as implemented by this
//! library.
//!
//! # Overview
//!
//! Line protocol is a newline-delimited text format encoding one measurement
//! event per line. Each line carries a named entity (the measurement), a set
//! of indexed string attributes (tags), a set of typed value attributes
//! (fields), and a nanosecond-resolution epoch timestamp.
//!
//! # Layout
//!
//! ```text
//! <measurement>[,<tagKey>=<tagValue>...] <fieldKey>=<fieldValue>[,...] <timestamp>
//! ```
//!
//! A concrete line:
//!
//! ```text
//! cpu,host=server01,region=us-west value=0.64 1434055562000000000
//! ```
//!
//! **Rules**:
//! - The measurement name comes first and ends at the first unquoted,
//!   unescaped space or comma
//! - Tag pairs follow the measurement, comma-separated; the first unquoted
//!   space ends the tag section
//! - Field pairs follow the tags, comma-separated; the next unquoted space
//!   ends the field section
//! - The timestamp is the trailing whitespace-delimited segment of the line,
//!   always, no matter how many pairs preceded it
//!
//! # Field Value Types
//!
//! | Type | Syntax | Example |
//! |---------|----------------------------------|------------------|
//! | Integer | decimal digits with `i` suffix | `count=42i` |
//! | Float | bare decimal, sign/exponent ok | `value=0.64` |
//! | Boolean | bare `true` or `false` | `active=true` |
//! | String | wrapped in double quotes | `note="hello"` |
//!
//! Classification is ordered: quotes win over everything (`"10"` is a
//! string), the `i` suffix wins over float (`10i` is an integer), and
//! anything left must parse as a float.
//!
//! Tag values are always strings and are stored verbatim, quotes and
//! escapes included.
//!
//! # Quoting
//!
//! Both `'` and `"` suspend delimiter recognition until the matching closing
//! character. Only double-quoted segments produce string field values;
//! single quotes merely protect delimiters inside a token.
//!
//! While a span of one kind is open, a quote of the other kind is literal
//! content: an apostrophe inside a double-quoted string value does not open
//! a single-quote span, so `msg="it's fine"` decodes as the string
//! `it's fine`.
//!
//! ```text
//! cpu,host=a note="one, two three" 1434055562000000000
//! ```
//!
//! The comma and spaces inside the quotes are literal content.
//!
//! # Escaping
//!
//! An unescaped backslash escapes exactly the next character, suppressing
//! its delimiter or quote meaning. Escapes are not removed from the decoded
//! token:
//!
//! ```text
//! cpu,region=us\ west value=1i 1434055562000000000
//! ```
//!
//! decodes the tag value as `us\ west`, backslash included.
//!
//! # Timestamp
//!
//! The trailing segment after the last unquoted, unescaped space, parsed as
//! a signed 64-bit integer of nanoseconds since the Unix epoch. A line with
//! no such space has no timestamp and is rejected; the timestamp is
//! mandatory.
//!
//! # Degenerate Lines
//!
//! - A line whose field set comes out empty (e.g. `cpu 1434055562000000000`)
//!   is accepted but unusual; it carries no data
//! - The delimiter ending the measurement always opens the tag section, so
//!   on a tagless line such as `cpu value=1 123` the pair lands in the tag
//!   set and stays a raw string
//! - Duplicate tag or field keys are not an error; the last occurrence wins
//!
//! # Out of Scope
//!
//! One line in, one record out. Batching, multi-line input, transport, and
//! storage all belong to the caller.

// This module contains only documentation; no implementation code
