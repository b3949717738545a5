//! Per-instance field storage
//!
//! A `FieldStore` holds one resolved value per declared field, in
//! declaration order. It is the only mutable storage in the system, and it
//! is only ever mutated during construction; once a store is wrapped in an
//! `Arc` by its record instance it is read-only for the rest of its life,
//! which makes unsynchronized concurrent reads safe.
//!
//! Field names are `&'static str`: every stored key comes from a type's
//! literal declarations (undeclared override keys are dropped before they
//! reach the store).

use dataclass_core::FieldValue;
use smallvec::SmallVec;

use crate::schema::FieldDecl;

// Records rarely declare more than a handful of fields; keep small stores
// inline.
type Entries = SmallVec<[(&'static str, FieldValue); 8]>;

/// Ordered field-name to value container for one record instance
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    entries: Entries,
}

impl FieldStore {
    /// Build a store from a type's literal declarations
    ///
    /// Duplicate field names keep the first occurrence; later duplicates
    /// are dropped.
    pub fn from_declarations(declarations: Vec<FieldDecl>) -> Self {
        let mut store = FieldStore {
            entries: Entries::with_capacity(declarations.len()),
        };
        for (name, value) in declarations {
            if store.get(name).is_none() {
                store.entries.push((name, value));
            }
        }
        store
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Iterate `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Iterate field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Iterate field values in declaration order
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub(crate) fn push(&mut self, name: &'static str, value: FieldValue) {
        self.entries.push((name, value));
    }
}
