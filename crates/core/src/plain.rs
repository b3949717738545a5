//! Plain representation of a record
//!
//! A `PlainMap` is the recursively unwrapped key/value form of a record:
//! nested records become nested maps, every other value (functions included)
//! is carried verbatim. It is the shape handed to external encoders and the
//! shape `update` transforms operate on.
//!
//! Keys iterate in insertion order, which for serialized records means field
//! declaration order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::FieldValue;

/// Ordered key/value map produced by record serialization
///
/// Inserting an existing key replaces the value in place, preserving the
/// key's original position; new keys append. Equality is structural and
/// order-insensitive, matching [`FieldValue`] object semantics.
#[derive(Debug, Clone, Default)]
pub struct PlainMap {
    entries: Vec<(String, FieldValue)>,
}

impl PlainMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True if the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert a value, replacing in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

// Structural, order-insensitive equality: two maps are equal when they hold
// the same keys mapped to equal values.
impl PartialEq for PlainMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(String, FieldValue)> for PlainMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut map = PlainMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for PlainMap {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PlainMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
