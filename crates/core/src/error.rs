//! Error types for the record library
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. The record core is total for well-formed input: the
//! only fallible surface is looking up a field that the record type never
//! declared, which is a programmer error surfaced through `try_get`.

use thiserror::Error;

/// Result type alias for record operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for record operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Field name was never declared on the record type
    #[error("unknown field `{field}` on record type `{type_name}`")]
    UnknownField {
        /// Name of the record type being accessed
        type_name: &'static str,
        /// The undeclared field name
        field: String,
    },
}
