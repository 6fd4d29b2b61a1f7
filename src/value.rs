//! Typed field values and the scalar type-inference routine.
//!
//! This module provides the [`FieldValue`] enum which represents any value a
//! line protocol field can carry, plus [`FieldValue::infer`], the routine that
//! classifies a raw token from the right-hand side of a `field=value` pair.
//!
//! ## Inference Rules
//!
//! Rules are ordered; the first match wins:
//!
//! 1. Wrapped in a matching pair of double quotes → [`FieldValue::String`],
//!    surrounding quotes stripped (no interior un-escaping at this layer)
//! 2. Trailing `i` suffix → [`FieldValue::Integer`] (base-10 signed)
//! 3. Exactly `true` → [`FieldValue::Boolean(true)`](FieldValue::Boolean)
//! 4. Exactly `false` → [`FieldValue::Boolean(false)`](FieldValue::Boolean)
//! 5. Anything else → [`FieldValue::Float`]
//!
//! Ordering matters: `10i` is an integer, never a float, and a quoted `"10"`
//! is a string, never numeric.
//!
//! ## Examples
//!
//! ```rust
//! use line_protocol::FieldValue;
//!
//! assert_eq!(FieldValue::infer("10i").unwrap(), FieldValue::Integer(10));
//! assert_eq!(FieldValue::infer("0.64").unwrap(), FieldValue::Float(0.64));
//! assert_eq!(FieldValue::infer("true").unwrap(), FieldValue::Boolean(true));
//! assert_eq!(
//!     FieldValue::infer("\"10\"").unwrap(),
//!     FieldValue::String("10".to_string())
//! );
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A typed value attached to a measurement field.
///
/// Line protocol distinguishes four scalar types on the wire:
///
/// - integers carry a trailing `i` (`value=10i`)
/// - floats are bare decimals (`value=0.64`)
/// - booleans are bare `true`/`false`
/// - strings are wrapped in double quotes (`note="hello"`)
///
/// # Examples
///
/// ```rust
/// use line_protocol::FieldValue;
///
/// let value = FieldValue::Integer(42);
/// assert!(value.is_integer());
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.to_string(), "42i");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl FieldValue {
    /// Classifies a raw field token into a typed value.
    ///
    /// This is the right-hand side of a `key=value` pair exactly as it
    /// appeared on the wire. The rules are ordered (see the module docs);
    /// notably a quoted token is always a string, even if its content looks
    /// numeric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_protocol::FieldValue;
    ///
    /// assert_eq!(FieldValue::infer("-3i").unwrap(), FieldValue::Integer(-3));
    /// assert_eq!(FieldValue::infer("1e3").unwrap(), FieldValue::Float(1000.0));
    /// assert_eq!(
    ///     FieldValue::infer("\"true\"").unwrap(),
    ///     FieldValue::String("true".to_string())
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedValue`] when a token claims numeric shape
    /// (trailing `i`, or no other rule matched) but fails the numeric parse.
    pub fn infer(raw: &str) -> Result<FieldValue> {
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Ok(FieldValue::String(raw[1..raw.len() - 1].to_string()));
        }
        if let Some(digits) = raw.strip_suffix('i') {
            return digits
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| Error::malformed_value(raw, "integer"));
        }
        match raw {
            "true" => Ok(FieldValue::Boolean(true)),
            "false" => Ok(FieldValue::Boolean(false)),
            _ => raw
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| Error::malformed_value(raw, "float")),
        }
    }

    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, FieldValue::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, FieldValue::Float(_))
    }

    /// Returns `true` if this is a boolean value.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, FieldValue::Boolean(_))
    }

    /// Returns `true` if this is a string value.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, FieldValue::String(_))
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_protocol::FieldValue;
    ///
    /// assert_eq!(FieldValue::Integer(10).as_i64(), Some(10));
    /// assert_eq!(FieldValue::Float(10.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`. Otherwise returns `None`.
    ///
    /// Integers convert losslessly up to 2^53.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FromStr for FieldValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldValue::infer(s)
    }
}

impl fmt::Display for FieldValue {
    /// Renders the value in its wire shape: `42i`, `0.64`, `true`,
    /// `"quoted"` with interior quotes and backslashes escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}i", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::String(s) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

// TryFrom implementations for extracting values from FieldValue
impl TryFrom<FieldValue> for i64 {
    type Error = Error;

    fn try_from(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Integer(i) => Ok(i),
            _ => Err(Error::malformed_value(&value.to_string(), "integer")),
        }
    }
}

impl TryFrom<FieldValue> for f64 {
    type Error = Error;

    fn try_from(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Integer(i) => Ok(i as f64),
            FieldValue::Float(f) => Ok(f),
            _ => Err(Error::malformed_value(&value.to_string(), "float")),
        }
    }
}

impl TryFrom<FieldValue> for bool {
    type Error = Error;

    fn try_from(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Boolean(b) => Ok(b),
            _ => Err(Error::malformed_value(&value.to_string(), "boolean")),
        }
    }
}

impl TryFrom<FieldValue> for String {
    type Error = Error;

    fn try_from(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::String(s) => Ok(s),
            _ => Err(Error::malformed_value(&value.to_string(), "string")),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::String(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer, float, boolean, or string")
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(FieldValue::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(FieldValue::Integer(value as i64))
                } else {
                    Ok(FieldValue::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(FieldValue::Float(value))
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(FieldValue::Boolean(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(FieldValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(FieldValue::String(value))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_quoted_string() {
        assert_eq!(
            FieldValue::infer("\"hello world\"").unwrap(),
            FieldValue::String("hello world".to_string())
        );
        // Surrounding quotes stripped, interior escapes left alone
        assert_eq!(
            FieldValue::infer("\"say \\\"hi\\\"\"").unwrap(),
            FieldValue::String("say \\\"hi\\\"".to_string())
        );
        assert_eq!(
            FieldValue::infer("\"\"").unwrap(),
            FieldValue::String(String::new())
        );
    }

    #[test]
    fn test_infer_integer() {
        assert_eq!(FieldValue::infer("10i").unwrap(), FieldValue::Integer(10));
        assert_eq!(FieldValue::infer("-42i").unwrap(), FieldValue::Integer(-42));
        assert_eq!(FieldValue::infer("0i").unwrap(), FieldValue::Integer(0));
        assert_eq!(
            FieldValue::infer("9223372036854775807i").unwrap(),
            FieldValue::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_infer_boolean() {
        assert_eq!(
            FieldValue::infer("true").unwrap(),
            FieldValue::Boolean(true)
        );
        assert_eq!(
            FieldValue::infer("false").unwrap(),
            FieldValue::Boolean(false)
        );
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(FieldValue::infer("0.64").unwrap(), FieldValue::Float(0.64));
        assert_eq!(FieldValue::infer("-2.5").unwrap(), FieldValue::Float(-2.5));
        assert_eq!(FieldValue::infer("1e3").unwrap(), FieldValue::Float(1000.0));
        assert_eq!(FieldValue::infer("3").unwrap(), FieldValue::Float(3.0));
    }

    #[test]
    fn test_infer_ordering() {
        // `i` suffix wins over float
        assert_eq!(FieldValue::infer("10i").unwrap(), FieldValue::Integer(10));
        // quotes win over everything
        assert_eq!(
            FieldValue::infer("\"10\"").unwrap(),
            FieldValue::String("10".to_string())
        );
        assert_eq!(
            FieldValue::infer("\"true\"").unwrap(),
            FieldValue::String("true".to_string())
        );
    }

    #[test]
    fn test_infer_malformed() {
        assert_eq!(
            FieldValue::infer("12xi").unwrap_err(),
            Error::malformed_value("12xi", "integer")
        );
        assert_eq!(
            FieldValue::infer("hello").unwrap_err(),
            Error::malformed_value("hello", "float")
        );
        // a lone quote is not a matching pair, and not a float either
        assert!(FieldValue::infer("\"").is_err());
    }

    #[test]
    fn test_display_wire_shape() {
        assert_eq!(FieldValue::Integer(10).to_string(), "10i");
        assert_eq!(FieldValue::Float(0.64).to_string(), "0.64");
        assert_eq!(FieldValue::Boolean(true).to_string(), "true");
        assert_eq!(
            FieldValue::String("hello".to_string()).to_string(),
            "\"hello\""
        );
        assert_eq!(
            FieldValue::String("say \"hi\"".to_string()).to_string(),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::Integer(7).as_i64(), Some(7));
        assert_eq!(FieldValue::Integer(7).as_f64(), Some(7.0));
        assert_eq!(FieldValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(FieldValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(FieldValue::String("x".to_string()).as_str(), Some("x"));
        assert_eq!(FieldValue::Float(1.5).as_i64(), None);
        assert_eq!(FieldValue::Integer(7).as_str(), None);
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(FieldValue::Integer(5)).unwrap(), 5);
        assert_eq!(f64::try_from(FieldValue::Float(2.5)).unwrap(), 2.5);
        assert_eq!(f64::try_from(FieldValue::Integer(2)).unwrap(), 2.0);
        assert!(bool::try_from(FieldValue::Boolean(true)).unwrap());
        assert_eq!(
            String::try_from(FieldValue::String("ok".to_string())).unwrap(),
            "ok"
        );
        assert!(i64::try_from(FieldValue::Float(2.5)).is_err());
        assert!(bool::try_from(FieldValue::Integer(1)).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(FieldValue::from(42i32), FieldValue::Integer(42));
        assert_eq!(FieldValue::from(42i64), FieldValue::Integer(42));
        assert_eq!(FieldValue::from(2.5f64), FieldValue::Float(2.5));
        assert_eq!(FieldValue::from(false), FieldValue::Boolean(false));
        assert_eq!(
            FieldValue::from("text"),
            FieldValue::String("text".to_string())
        );
    }

    #[test]
    fn test_fromstr_delegates_to_infer() {
        let value: FieldValue = "10i".parse().unwrap();
        assert_eq!(value, FieldValue::Integer(10));
    }
}
