//! Construction macros for tag and field sets.

/// Builds a [`TagMap`](crate::TagMap) from `key => value` pairs.
///
/// Keys and values accept anything with a `to_string`; insertion order is
/// the order written.
///
/// # Examples
///
/// ```rust
/// use line_protocol::tags;
///
/// let tags = tags! {
///     "host" => "server01",
///     "region" => "us-west",
/// };
/// assert_eq!(tags.get("host"), Some(&"server01".to_string()));
/// ```
#[macro_export]
macro_rules! tags {
    () => {
        $crate::TagMap::new()
    };

    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::TagMap::new();
        $(
            map.insert($key.to_string(), $value.to_string());
        )*
        map
    }};
}

/// Builds a [`FieldMap`](crate::FieldMap) from `key => value` pairs.
///
/// Values go through [`FieldValue::from`](crate::FieldValue), so integers,
/// floats, booleans, and strings all work directly.
///
/// # Examples
///
/// ```rust
/// use line_protocol::{fields, FieldValue};
///
/// let fields = fields! {
///     "value" => 0.64,
///     "count" => 10i64,
///     "active" => true,
/// };
/// assert_eq!(fields.get("count"), Some(&FieldValue::Integer(10)));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldMap::new()
    };

    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::FieldMap::new();
        $(
            map.insert($key.to_string(), $crate::FieldValue::from($value));
        )*
        map
    }};
}
