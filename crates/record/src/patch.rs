//! Partial field maps
//!
//! A `Patch` is the caller-supplied side of construction and update: an
//! ordered set of field overrides. Keys that do not name a declared field
//! are ignored entirely when the patch is applied; that permissiveness is
//! part of the record contract, not an error.

use dataclass_core::{FieldValue, PlainMap};

/// Ordered partial field map used as constructor overrides or update patch
///
/// Built fluently:
///
/// ```
/// use dataclass_record::Patch;
///
/// let patch = Patch::new()
///     .set("name", "Ham Sandwich")
///     .set("phone", 2_222_222_222_i64);
/// assert_eq!(patch.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    entries: Vec<(String, FieldValue)>,
}

impl Patch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an override; last write for a key wins
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Look up an override by field name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// True if the patch overrides the field
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the patch holds no overrides
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate overrides in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FieldValue)> for Patch {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut patch = Patch::new();
        for (k, v) in iter {
            patch = patch.set(k, v);
        }
        patch
    }
}

impl From<PlainMap> for Patch {
    fn from(plain: PlainMap) -> Self {
        plain.into_iter().collect()
    }
}
