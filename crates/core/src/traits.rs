//! Capability trait for nested records
//!
//! The equality and serialization algorithms need to recurse into
//! field values that are themselves records, without knowing the concrete
//! record type at the field position. Rather than probing values for an
//! `equals`-shaped method at runtime, nesting is expressed through an
//! explicit capability trait: a field value is a nested record exactly when
//! it implements [`Structural`].

use std::any::Any;
use std::fmt;

use crate::plain::PlainMap;

/// Type-erased view of a record instance, enabling recursion through
/// nested record fields
///
/// Implementations must be immutable after construction; both methods are
/// read-only and safe to call concurrently from multiple threads.
pub trait Structural: fmt::Debug + Send + Sync {
    /// Serialize recursively into the plain key/value representation
    fn to_plain(&self) -> PlainMap;

    /// Structural equality against another type-erased record
    ///
    /// Comparing records of different concrete record types returns false;
    /// it is never an error.
    fn structural_eq(&self, other: &dyn Structural) -> bool;

    /// Name of the concrete record type, for diagnostics
    fn record_type_name(&self) -> &'static str;

    /// Downcast support for same-type comparison
    fn as_any(&self) -> &dyn Any;
}
