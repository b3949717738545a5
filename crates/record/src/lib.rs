//! Record machinery: declarations, defaults, construction, and update
//!
//! This crate builds the record abstraction on top of `dataclass-core`:
//! - RecordType: trait declaring a type's ordered fields and defaults
//! - registry: process-wide cache of per-type default instances
//! - FieldStore: ordered per-instance field storage
//! - Patch: partial field map for overrides and updates
//! - Record: the immutable instance handle with `equals`, `to_plain`,
//!   `update`, and `update_with`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod instance;
pub mod patch;
pub mod registry;
pub mod schema;
pub mod store;

// Re-export commonly used types and traits
pub use instance::Record;
pub use patch::Patch;
pub use schema::{FieldDecl, RecordType};
pub use store::FieldStore;
