//! Core types and traits for the dataclass record library
//!
//! This crate defines the foundational pieces used by the record machinery:
//! - FieldValue: unified value enum for everything a field can hold
//! - FuncValue: function-valued fields with source-text identity
//! - PlainMap: the ordered plain key/value representation of a record
//! - Structural: capability trait that lets equality and serialization
//!   recurse through nested records
//! - Error: error type hierarchy
//! - hash: content fingerprinting for function comparison

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod func;
pub mod hash;
pub mod plain;
pub mod traits;
pub mod value;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use func::{FieldFn, FuncValue};
pub use hash::fingerprint;
pub use plain::PlainMap;
pub use traits::Structural;
pub use value::{FieldValue, SharedRecord};
