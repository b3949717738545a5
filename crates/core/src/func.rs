//! Function-valued fields
//!
//! A `FuncValue` pairs a callable with the source text it was declared with.
//! Closures in Rust carry no runtime-introspectable source, so the text is
//! supplied explicitly at construction and serves as the function's
//! comparison key: two `FuncValue`s are equal exactly when the content
//! fingerprints of their source texts are equal.

use std::fmt;
use std::sync::Arc;

use crate::hash::fingerprint;
use crate::value::FieldValue;

/// Callable signature for function-valued fields
pub type FieldFn = dyn Fn(&[FieldValue]) -> FieldValue + Send + Sync;

/// A function-valued field: a callable plus its declared source text
#[derive(Clone)]
pub struct FuncValue {
    source: Arc<str>,
    body: Arc<FieldFn>,
}

impl FuncValue {
    /// Create a function value from its source text and body
    ///
    /// The source text is the function's identity for equality purposes;
    /// the body is what [`call`](Self::call) invokes. Callers are expected
    /// to keep the two consistent.
    pub fn new<F>(source: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&[FieldValue]) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            source: source.into(),
            body: Arc::new(body),
        }
    }

    /// The source text this function was declared with
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Content fingerprint of the normalized source text
    pub fn content_fingerprint(&self) -> String {
        fingerprint(&self.source)
    }

    /// Invoke the wrapped callable
    pub fn call(&self, args: &[FieldValue]) -> FieldValue {
        (self.body)(args)
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncValue")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// Behavioral-equality proxy: equal source fingerprints mean equal functions.
// Functions with different source text but identical behavior compare
// unequal; that limitation is documented in the hash module.
impl PartialEq for FuncValue {
    fn eq(&self, other: &Self) -> bool {
        self.content_fingerprint() == other.content_fingerprint()
    }
}
