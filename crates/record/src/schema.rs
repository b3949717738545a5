//! Record type declarations
//!
//! A record type is a nominal, zero-sized marker implementing
//! [`RecordType`]. The trait's one required method returns the type's
//! literal field declarations: an ordered list of `(name, default value)`
//! pairs. Declaration order is the canonical field order: construction,
//! enumeration, serialization, and comparison all follow it.
//!
//! Two record types with identical field shapes remain distinct types;
//! identity is the Rust type itself, not the shape.
//!
//! ```
//! use dataclass_record::{FieldDecl, RecordType};
//!
//! struct Person;
//!
//! impl RecordType for Person {
//!     fn declared_fields() -> Vec<FieldDecl> {
//!         vec![
//!             ("name", "Apple Bacon".into()),
//!             ("phone", 5_555_555_555_i64.into()),
//!             ("is_person", true.into()),
//!         ]
//!     }
//! }
//! ```

use dataclass_core::FieldValue;

/// One declared field: name plus literal default value
pub type FieldDecl = (&'static str, FieldValue);

/// A nominal record type: an ordered set of named fields with defaults
///
/// `declared_fields` is the "uninitialized construction path": it is
/// evaluated exactly once per type (by the defaults registry) and must
/// produce the literal declared defaults with no overrides applied. It may
/// construct nested record instances as defaults.
pub trait RecordType: Send + Sync + 'static {
    /// The type's literal field declarations, in declaration order
    fn declared_fields() -> Vec<FieldDecl>;

    /// Short name of the record type, for diagnostics and errors
    fn type_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}
