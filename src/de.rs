//! Line protocol parsing.
//!
//! This module implements the single-pass tokenizer that splits a raw line
//! into measurement name, tag set, field set, and timestamp.
//!
//! ## Overview
//!
//! The scan walks the line left to right exactly once, O(n) with no
//! backtracking, maintaining:
//!
//! - a section state progressing in strict forward order
//!   (`Measurement → Tags → Fields → Timestamp`), never revisited;
//! - a cursor marking the start of the current unconsumed token;
//! - two quote flags (`'` and `"`), each toggled by an unescaped quote of its
//!   kind; delimiter recognition is suspended while either is set, and a quote
//!   of one kind is literal content inside an open span of the other kind;
//! - an escape flag toggled per character, so an unescaped backslash escapes
//!   exactly the next character.
//!
//! A space or comma is a live delimiter only when unquoted and unescaped.
//! Comma keeps the current section (more pairs follow); space advances it.
//! The delimiter after the measurement advances to `Tags` on either kind.
//!
//! The timestamp is extracted after the scan from everything past the *last*
//! unquoted, unescaped space, which guarantees it is the trailing
//! whitespace-delimited segment no matter how many pairs preceded it.
//!
//! ## Usage
//!
//! Most users should use the crate-root function:
//!
//! ```rust
//! use line_protocol::parse_line;
//!
//! let point = parse_line("cpu,host=server01 value=0.64 1434055562000000000").unwrap();
//! assert_eq!(point.measurement(), "cpu");
//! ```

use crate::map::{FieldMap, TagMap};
use crate::{Error, FieldValue, Point, Result};

/// Which part of the line the scan is currently inside.
///
/// Sections are entered in strict forward order and never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Measurement,
    Tags,
    Fields,
    Timestamp,
}

/// The two delimiter kinds the tokenizer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delim {
    /// Advances to the next section.
    Space,
    /// Stays within the current section.
    Comma,
}

impl Section {
    /// The transition table keyed by (section, delimiter kind).
    fn advance(self, delim: Delim) -> Section {
        match (self, delim) {
            // either delimiter ends the measurement name
            (Section::Measurement, _) => Section::Tags,
            (Section::Tags, Delim::Comma) => Section::Tags,
            (Section::Tags, Delim::Space) => Section::Fields,
            (Section::Fields, Delim::Comma) => Section::Fields,
            (Section::Fields, Delim::Space) => Section::Timestamp,
            (Section::Timestamp, _) => Section::Timestamp,
        }
    }
}

/// Single-pass tokenizer state for one line.
///
/// Each parse constructs a fresh `LineParser`; no state outlives one call,
/// so parsing is re-entrant and trivially safe to run from many threads.
pub struct LineParser<'a> {
    input: &'a str,
    section: Section,
    cursor: usize,
    in_single_quote: bool,
    in_double_quote: bool,
    escaped: bool,
    /// Byte offset of the last unquoted, unescaped space seen so far.
    last_space: Option<usize>,
}

impl<'a> LineParser<'a> {
    /// Creates a parser over one line.
    ///
    /// The line is trimmed of surrounding whitespace before scanning, so a
    /// trailing newline left by a reader does not end up in the timestamp
    /// segment.
    pub fn new(line: &'a str) -> Self {
        LineParser {
            input: line.trim(),
            section: Section::Measurement,
            cursor: 0,
            in_single_quote: false,
            in_double_quote: false,
            escaped: false,
            last_space: None,
        }
    }

    /// Runs the scan and returns the completed point.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] when the line is empty or blank
    /// - [`Error::MissingTimestamp`] when no unquoted space delimits a
    ///   trailing segment
    /// - [`Error::MalformedTimestamp`] when that segment is not an integer
    /// - [`Error::MalformedPair`] when a tag or field token has no `=`
    /// - [`Error::MalformedValue`] when a field value fails type inference
    /// - [`Error::MissingMeasurement`] when the measurement name is empty
    pub fn parse(mut self) -> Result<Point> {
        if self.input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut measurement = String::new();
        let mut tags = TagMap::new();
        let mut fields = FieldMap::new();

        for (i, ch) in self.input.char_indices() {
            if self.escaped || ch == '\\' {
                // an unescaped backslash escapes exactly the next character
                self.escaped = !self.escaped;
                continue;
            }
            match ch {
                // a quote of one kind is literal content inside an open
                // span of the other kind
                '\'' if !self.in_double_quote => {
                    self.in_single_quote = !self.in_single_quote;
                }
                '"' if !self.in_single_quote => {
                    self.in_double_quote = !self.in_double_quote;
                }
                ' ' | ',' if !self.in_single_quote && !self.in_double_quote => {
                    let delim = if ch == ' ' {
                        self.last_space = Some(i);
                        Delim::Space
                    } else {
                        Delim::Comma
                    };
                    let token = &self.input[self.cursor..i];
                    self.dispatch(token, &mut measurement, &mut tags, &mut fields)?;
                    self.section = self.section.advance(delim);
                    self.cursor = i + 1;
                }
                _ => {}
            }
        }

        // Authoritative timestamp extraction: everything after the last
        // unquoted space, trimmed. Takes precedence over anything the scan
        // classified, so the timestamp is always the trailing segment.
        let timestamp = match self.last_space {
            Some(pos) => {
                let segment = self.input[pos + 1..].trim();
                segment
                    .parse::<i64>()
                    .map_err(|_| Error::malformed_timestamp(segment))?
            }
            None => return Err(Error::MissingTimestamp),
        };

        if measurement.is_empty() {
            return Err(Error::MissingMeasurement);
        }

        Ok(Point::new(measurement, tags, fields, timestamp))
    }

    /// Routes one token to the container of the current section.
    fn dispatch(
        &self,
        token: &str,
        measurement: &mut String,
        tags: &mut TagMap,
        fields: &mut FieldMap,
    ) -> Result<()> {
        match self.section {
            Section::Measurement => {
                *measurement = token.to_string();
            }
            Section::Tags => {
                if token.trim().is_empty() {
                    return Ok(());
                }
                let (key, value) = split_pair(token)?;
                tags.insert(key.to_string(), value.to_string());
            }
            Section::Fields => {
                if token.trim().is_empty() {
                    return Ok(());
                }
                let (key, raw) = split_pair(token)?;
                fields.insert(key.to_string(), FieldValue::infer(raw)?);
            }
            // the trailing segment is handled after the scan
            Section::Timestamp => {}
        }
        Ok(())
    }
}

/// Splits a tag or field token on its first `=`.
fn split_pair(token: &str) -> Result<(&str, &str)> {
    token
        .split_once('=')
        .ok_or_else(|| Error::malformed_pair(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_line;

    #[test]
    fn test_full_line() {
        let point =
            parse_line("cpu,host=server01,region=us-west value=0.64 1434055562000000000").unwrap();
        assert_eq!(point.measurement(), "cpu");
        assert_eq!(point.tags().get("host"), Some(&"server01".to_string()));
        assert_eq!(point.tags().get("region"), Some(&"us-west".to_string()));
        assert_eq!(point.fields().get("value"), Some(&FieldValue::Float(0.64)));
        assert_eq!(point.timestamp(), 1434055562000000000);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(parse_line("").unwrap_err(), Error::EmptyInput);
        assert_eq!(parse_line("   ").unwrap_err(), Error::EmptyInput);
        assert_eq!(parse_line("\t\n").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_no_space_at_all() {
        assert_eq!(parse_line("novalue").unwrap_err(), Error::MissingTimestamp);
        assert_eq!(
            parse_line("cpu,host=a").unwrap_err(),
            Error::MissingTimestamp
        );
    }

    #[test]
    fn test_trailing_segment_not_integer() {
        // one space exists, so "value=1" is taken as the timestamp segment
        assert_eq!(
            parse_line("cpu value=1").unwrap_err(),
            Error::malformed_timestamp("value=1")
        );
    }

    #[test]
    fn test_typed_field_values() {
        let point = parse_line("cpu,host=server01 value=10i 1434055562000000000").unwrap();
        assert_eq!(point.fields().get("value"), Some(&FieldValue::Integer(10)));

        let point = parse_line("cpu,host=server01 active=true 1434055562000000000").unwrap();
        assert_eq!(
            point.fields().get("active"),
            Some(&FieldValue::Boolean(true))
        );

        let point =
            parse_line("cpu,host=server01 note=\"hello world\" 1434055562000000000").unwrap();
        assert_eq!(
            point.fields().get("note"),
            Some(&FieldValue::String("hello world".to_string()))
        );
    }

    #[test]
    fn test_multiple_fields() {
        let point = parse_line("cpu,host=a user=0.5,system=0.25,count=3i 99").unwrap();
        assert_eq!(point.fields().len(), 3);
        assert_eq!(point.fields().get("user"), Some(&FieldValue::Float(0.5)));
        assert_eq!(point.fields().get("system"), Some(&FieldValue::Float(0.25)));
        assert_eq!(point.fields().get("count"), Some(&FieldValue::Integer(3)));
        assert_eq!(point.timestamp(), 99);
    }

    #[test]
    fn test_quoted_value_hides_delimiters() {
        // the space and comma inside the quotes are not delimiters
        let point = parse_line("cpu,host=a note=\"one, two three\" 7").unwrap();
        assert_eq!(
            point.fields().get("note"),
            Some(&FieldValue::String("one, two three".to_string()))
        );
        assert_eq!(point.timestamp(), 7);
    }

    #[test]
    fn test_escaped_delimiters_kept_verbatim() {
        // `us\ west` scans as one token; the backslash survives into the value
        let point = parse_line("cpu,region=us\\ west value=1i 7").unwrap();
        assert_eq!(
            point.tags().get("region"),
            Some(&"us\\ west".to_string())
        );
        assert_eq!(point.timestamp(), 7);
    }

    #[test]
    fn test_escaped_backslash_does_not_escape_delimiter() {
        // `\\` is a literal backslash, so the comma after it still delimits
        let point = parse_line("cpu,a=b\\\\,c=d value=1i 7").unwrap();
        assert_eq!(point.tags().get("a"), Some(&"b\\\\".to_string()));
        assert_eq!(point.tags().get("c"), Some(&"d".to_string()));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let point = parse_line("cpu,host=a,host=b value=1i,value=2i 7").unwrap();
        assert_eq!(point.tags().get("host"), Some(&"b".to_string()));
        assert_eq!(point.fields().get("value"), Some(&FieldValue::Integer(2)));
    }

    #[test]
    fn test_malformed_pair_is_strict() {
        assert_eq!(
            parse_line("cpu,hosta value=1i 7").unwrap_err(),
            Error::malformed_pair("hosta")
        );
        assert_eq!(
            parse_line("cpu,host=a value1,other=2i 7").unwrap_err(),
            Error::malformed_pair("value1")
        );
    }

    #[test]
    fn test_malformed_field_value() {
        assert_eq!(
            parse_line("cpu,host=a value=12x4i,other=1i 7").unwrap_err(),
            Error::malformed_value("12x4i", "integer")
        );
        assert_eq!(
            parse_line("cpu,host=a value=abc,other=1i 7").unwrap_err(),
            Error::malformed_value("abc", "float")
        );
    }

    #[test]
    fn test_empty_measurement_rejected() {
        assert_eq!(
            parse_line(",host=a value=1i 7").unwrap_err(),
            Error::MissingMeasurement
        );
    }

    #[test]
    fn test_no_tags_section_collects_first_pairs() {
        // the delimiter after the measurement always enters the tag section,
        // so pairs on a tagless line land in tags; documented as degenerate
        let point = parse_line("cpu value=1 123").unwrap();
        assert_eq!(point.measurement(), "cpu");
        assert_eq!(point.tags().get("value"), Some(&"1".to_string()));
        assert!(point.fields().is_empty());
        assert_eq!(point.timestamp(), 123);
    }

    #[test]
    fn test_measurement_and_timestamp_only() {
        let point = parse_line("cpu 1434055562000000000").unwrap();
        assert_eq!(point.measurement(), "cpu");
        assert!(point.tags().is_empty());
        assert!(point.fields().is_empty());
        assert_eq!(point.timestamp(), 1434055562000000000);
    }

    #[test]
    fn test_negative_timestamp() {
        let point = parse_line("cpu,host=a value=1i -42").unwrap();
        assert_eq!(point.timestamp(), -42);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let point = parse_line("  cpu,host=a value=1i 7\n").unwrap();
        assert_eq!(point.measurement(), "cpu");
        assert_eq!(point.timestamp(), 7);
    }

    #[test]
    fn test_single_quotes_close_on_apostrophe() {
        // a matched pair of single quotes hides the space between them, and
        // the tag value keeps the quote characters verbatim
        let point = parse_line("cpu,host='one two' value=1i 7").unwrap();
        assert_eq!(
            point.tags().get("host"),
            Some(&"'one two'".to_string())
        );
        assert_eq!(point.timestamp(), 7);
    }

    #[test]
    fn test_apostrophe_inside_double_quoted_value() {
        // the apostrophe is literal content; it must not open a single-quote
        // span that would swallow the timestamp delimiter
        let point = parse_line("m,t=a msg=\"it's fine\" 7").unwrap();
        assert_eq!(
            point.fields().get("msg"),
            Some(&FieldValue::String("it's fine".to_string()))
        );
        assert_eq!(point.timestamp(), 7);
    }

    #[test]
    fn test_double_quote_inside_single_quoted_span() {
        // a lone double quote inside the span stays literal and does not
        // leave a dangling double-quote span after the closing apostrophe
        let point = parse_line("m,t='a \"b c' f=1i 7").unwrap();
        assert_eq!(point.tags().get("t"), Some(&"'a \"b c'".to_string()));
        assert_eq!(point.timestamp(), 7);
    }

    #[test]
    fn test_single_quoted_field_value_is_not_a_string() {
        // only double quotes produce string values; a single-quoted token
        // falls through to float inference and fails there
        assert_eq!(
            parse_line("cpu,host=a note='one two' 7").unwrap_err(),
            Error::malformed_value("'one two'", "float")
        );
    }

    #[test]
    fn test_deterministic() {
        let line = "cpu,host=server01,region=us-west value=0.64,count=2i 1434055562000000000";
        let a = parse_line(line).unwrap();
        let b = parse_line(line).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tag_order_preserved() {
        let point = parse_line("cpu,zone=z,area=a,mid=m value=1i 7").unwrap();
        let keys: Vec<_> = point.tags().keys().cloned().collect();
        assert_eq!(keys, vec!["zone", "area", "mid"]);
    }
}
