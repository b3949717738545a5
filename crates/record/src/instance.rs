//! Record instances
//!
//! `Record<T>` is an immutable handle over the resolved field values of one
//! instance of record type `T`. Construction merges caller overrides onto
//! the type's cached default instance, field by field, in declaration
//! order; after that the instance never changes. There is no write path at
//! all. Assignment being silently ignored maps to compile-time immutability
//! here, with the same observable result: a constructed instance's fields
//! never change.
//!
//! Cloning a record is cheap; clones share the underlying field store,
//! which is safe because the store is read-only after construction.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use dataclass_core::{Error, FieldValue, PlainMap, Result, Structural};
use serde::ser::{Serialize, Serializer};

use crate::patch::Patch;
use crate::registry;
use crate::schema::RecordType;
use crate::store::FieldStore;

/// An immutable instance of record type `T`
pub struct Record<T: RecordType> {
    store: Arc<FieldStore>,
    _type: PhantomData<fn() -> T>,
}

impl<T: RecordType> Record<T> {
    /// Construct an instance holding the type's declared defaults
    pub fn new() -> Self {
        Self::with(&Patch::new())
    }

    /// Construct an instance, merging `patch` onto the declared defaults
    ///
    /// For each declared field, in declaration order: the patch value wins
    /// when the patch contains that field name, otherwise the default is
    /// used. Patch keys that name undeclared fields are dropped entirely.
    pub fn with(patch: &Patch) -> Self {
        let defaults = registry::get_or_init::<T>();
        let mut store = FieldStore::default();
        for (name, default_value) in defaults.iter() {
            let value = match patch.get(name) {
                Some(override_value) => override_value.clone(),
                None => default_value.clone(),
            };
            store.push(name, value);
        }
        Self {
            store: Arc::new(store),
            _type: PhantomData,
        }
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.store.get(name)
    }

    /// Look up a field value by name, failing on undeclared fields
    pub fn try_get(&self, name: &str) -> Result<&FieldValue> {
        self.store.get(name).ok_or_else(|| Error::UnknownField {
            type_name: T::type_name(),
            field: name.to_string(),
        })
    }

    /// Iterate `(name, value)` pairs in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.store.iter()
    }

    /// Iterate field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.store.names()
    }

    /// Iterate field values in declaration order
    pub fn field_values(&self) -> impl Iterator<Item = &FieldValue> {
        self.store.values()
    }

    /// Structural equality against another instance of the same type
    ///
    /// Walks the type's declared fields in order and short-circuits on the
    /// first mismatch. Nested records compare recursively; function fields
    /// compare by source-text fingerprint; everything else by value.
    pub fn equals(&self, other: &Record<T>) -> bool {
        let defaults = registry::get_or_init::<T>();
        for name in defaults.names() {
            let a = self.store.get(name);
            let b = other.store.get(name);
            let fields_match = match (a, b) {
                (Some(FieldValue::Record(ra)), Some(FieldValue::Record(rb))) => {
                    ra.structural_eq(rb.as_ref())
                }
                // A record on one side and anything else on the other is a
                // mismatch, never an error.
                (Some(FieldValue::Record(_)), _) | (_, Some(FieldValue::Record(_))) => false,
                (Some(FieldValue::Func(fa)), Some(FieldValue::Func(fb))) => fa == fb,
                (Some(FieldValue::Func(_)), _) | (_, Some(FieldValue::Func(_))) => false,
                (a, b) => a == b,
            };
            if !fields_match {
                return false;
            }
        }
        true
    }

    /// Serialize recursively into the plain key/value representation
    ///
    /// Nested records become nested maps; functions pass through verbatim.
    /// The result is a fresh map; mutating it never touches this instance.
    pub fn to_plain(&self) -> PlainMap {
        let mut plain = PlainMap::with_capacity(self.store.len());
        for (name, value) in self.store.iter() {
            match value {
                FieldValue::Record(nested) => plain.insert(name, nested.to_plain()),
                other => plain.insert(name, other.clone()),
            }
        }
        plain
    }

    /// Produce a new instance with `patch` merged over this one's
    /// serialized state
    ///
    /// `self` is untouched; the returned instance is always distinct, even
    /// when the patch changes nothing.
    pub fn update(&self, patch: &Patch) -> Self {
        let mut merged = self.to_plain();
        for (name, value) in patch.iter() {
            merged.insert(name, value.clone());
        }
        Self::from_plain(merged)
    }

    /// Produce a new instance from a transform of this one's serialized
    /// state
    pub fn update_with<F>(&self, transform: F) -> Self
    where
        F: FnOnce(PlainMap) -> PlainMap,
    {
        Self::from_plain(transform(self.to_plain()))
    }

    fn from_plain(plain: PlainMap) -> Self {
        Self::with(&Patch::from(plain))
    }
}

impl<T: RecordType> Default for Record<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordType> Clone for Record<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _type: PhantomData,
        }
    }
}

impl<T: RecordType> PartialEq for Record<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: RecordType> fmt::Debug for Record<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(T::type_name());
        for (name, value) in self.store.iter() {
            s.field(name, value);
        }
        s.finish()
    }
}

impl<T: RecordType> Structural for Record<T> {
    fn to_plain(&self) -> PlainMap {
        Record::to_plain(self)
    }

    fn structural_eq(&self, other: &dyn Structural) -> bool {
        match other.as_any().downcast_ref::<Record<T>>() {
            Some(other) => self.equals(other),
            // Different record types never compare equal.
            None => false,
        }
    }

    fn record_type_name(&self) -> &'static str {
        T::type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: RecordType> From<Record<T>> for FieldValue {
    fn from(record: Record<T>) -> Self {
        FieldValue::Record(Arc::new(record))
    }
}

impl<T: RecordType> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}
