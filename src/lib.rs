//! Dataclass - immutable structured records for Rust
//!
//! A record type declares its fields with default values once; every
//! instance thereafter is immutable, structurally comparable, and
//! recursively serializable to a plain key/value form, including when
//! fields hold nested records or function values.
//!
//! # Quick Start
//!
//! ```
//! use dataclass::{FieldDecl, Patch, Record, RecordType};
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
//!
//! let person = Record::<Person>::new();
//! assert_eq!(person.get("name").and_then(|v| v.as_str()), Some("Apple Bacon"));
//!
//! let renamed = person.update(&Patch::new().set("name", "Ham Sandwich"));
//! assert_eq!(renamed.get("name").and_then(|v| v.as_str()), Some("Ham Sandwich"));
//! // The original is untouched.
//! assert_eq!(person.get("name").and_then(|v| v.as_str()), Some("Apple Bacon"));
//! ```
//!
//! # Architecture
//!
//! The value model (`FieldValue`, `FuncValue`, `PlainMap`, the `Structural`
//! capability trait) lives in `dataclass-core`; the record machinery
//! (`RecordType`, the defaults registry, `Record`, `Patch`) lives in
//! `dataclass-record`. This crate re-exports the public API of both.

// Re-export the public API
pub use dataclass_core::{
    fingerprint, Error, FieldFn, FieldValue, FuncValue, PlainMap, Result, SharedRecord,
    Structural,
};
pub use dataclass_record::{registry, FieldDecl, FieldStore, Patch, Record, RecordType};
