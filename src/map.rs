//! Ordered map types for tags and fields.
//!
//! This module provides [`PointMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for tag and field sets. Ordering is irrelevant
//! for correctness but preserved for reproducibility: a parsed record
//! re-encodes with its pairs in the order they appeared on the wire.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` gives us:
//!
//! - **Deterministic output**: identical input lines re-encode identically
//! - **Iteration order**: pairs iterate in wire order
//! - **Last write wins**: inserting a duplicate key replaces the value in
//!   place, which is exactly the duplicate-key policy of the parser
//!
//! ## Examples
//!
//! ```rust
//! use line_protocol::TagMap;
//!
//! let mut tags = TagMap::new();
//! tags.insert("host".to_string(), "server01".to_string());
//! tags.insert("region".to_string(), "us-west".to_string());
//!
//! let keys: Vec<_> = tags.keys().cloned().collect();
//! assert_eq!(keys, vec!["host", "region"]);
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::FieldValue;

/// The tag set of a point: string keys to string values, in wire order.
pub type TagMap = PointMap<String>;

/// The field set of a point: string keys to typed values, in wire order.
pub type FieldMap = PointMap<FieldValue>;

/// An insertion-ordered map of string keys, used for both tag and field sets.
///
/// This is a thin wrapper around [`IndexMap`]. Every point gets fresh empty
/// maps at construction time; maps are never shared between points.
///
/// # Examples
///
/// ```rust
/// use line_protocol::{FieldMap, FieldValue};
///
/// let mut fields = FieldMap::new();
/// fields.insert("value".to_string(), FieldValue::Float(0.64));
/// assert_eq!(fields.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointMap<V>(IndexMap<String, V>);

impl<V> PointMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        PointMap(IndexMap::new())
    }

    /// Creates an empty map with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PointMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// (the key keeps its original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_protocol::TagMap;
    ///
    /// let mut map = TagMap::new();
    /// assert!(map.insert("host".to_string(), "a".to_string()).is_none());
    /// assert_eq!(
    ///     map.insert("host".to_string(), "b".to_string()),
    ///     Some("a".to_string())
    /// );
    /// ```
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V> Default for PointMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<HashMap<String, V>> for PointMap<V> {
    fn from(map: HashMap<String, V>) -> Self {
        PointMap(map.into_iter().collect())
    }
}

impl<V> From<PointMap<V>> for HashMap<String, V> {
    fn from(map: PointMap<V>) -> Self {
        map.0.into_iter().collect()
    }
}

impl<V> IntoIterator for PointMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a PointMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V> FromIterator<(String, V)> for PointMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        PointMap(IndexMap::from_iter(iter))
    }
}

impl<V: Serialize> Serialize for PointMap<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for PointMap<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PointMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for PointMapVisitor<V> {
            type Value = PointMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with string keys")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = PointMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(PointMapVisitor(PhantomData))
    }
}
