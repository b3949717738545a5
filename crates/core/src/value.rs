//! Field value model
//!
//! This module defines:
//! - FieldValue: unified enum for every value a record field can hold
//!
//! ## Type Rules
//!
//! - No implicit type coercions: `Int(1) != Float(1.0)`
//! - Float equality follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`
//! - `Func` values compare by content fingerprint of their source text,
//!   never by identity
//! - `Record` values compare structurally, field by field, recursing into
//!   nested records
//! - `Map` values compare structurally and order-insensitively

use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

use crate::func::FuncValue;
use crate::plain::PlainMap;
use crate::traits::Structural;

/// Shared handle to a type-erased nested record
pub type SharedRecord = Arc<dyn Structural>;

/// Canonical value type for record fields
///
/// Scalars, functions, plain maps, and nested records. Nesting is
/// unbounded in principle but must be acyclic; `Arc`-held immutable records
/// cannot form cycles, so the recursion in equality and serialization
/// always terminates.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Function value, compared by source-text fingerprint
    Func(FuncValue),
    /// Plain key/value map, as produced by serialization of a nested record
    Map(PlainMap),
    /// Nested record instance
    Record(SharedRecord),
}

// Custom PartialEq: same-variant only, IEEE-754 floats, fingerprint
// comparison for functions, structural comparison for records and maps.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
            (FieldValue::Func(a), FieldValue::Func(b)) => a == b,
            (FieldValue::Map(a), FieldValue::Map(b)) => a == b,
            (FieldValue::Record(a), FieldValue::Record(b)) => a.structural_eq(b.as_ref()),
            // Different variants are never equal
            _ => false,
        }
    }
}

impl FieldValue {
    /// Get the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "Null",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Int(_) => "Int",
            FieldValue::Float(_) => "Float",
            FieldValue::Str(_) => "Str",
            FieldValue::Func(_) => "Func",
            FieldValue::Map(_) => "Map",
            FieldValue::Record(_) => "Record",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Check if this is a function value
    pub fn is_func(&self) -> bool {
        matches!(self, FieldValue::Func(_))
    }

    /// Check if this is a nested record
    pub fn is_record(&self) -> bool {
        matches!(self, FieldValue::Record(_))
    }

    /// Get the boolean if this is a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer if this is an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the float if this is a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string slice if this is a Str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the function value if this is a Func
    pub fn as_func(&self) -> Option<&FuncValue> {
        match self {
            FieldValue::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Get the plain map if this is a Map
    pub fn as_map(&self) -> Option<&PlainMap> {
        match self {
            FieldValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get the nested record if this is a Record
    pub fn as_record(&self) -> Option<&SharedRecord> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(i64::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<FuncValue> for FieldValue {
    fn from(f: FuncValue) -> Self {
        FieldValue::Func(f)
    }
}

impl From<PlainMap> for FieldValue {
    fn from(m: PlainMap) -> Self {
        FieldValue::Map(m)
    }
}

impl From<SharedRecord> for FieldValue {
    fn from(r: SharedRecord) -> Self {
        FieldValue::Record(r)
    }
}

// Encoding boundary: functions encode as their source text, nested records
// as their plain map. The plain form carries no record-specific metadata.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(n) => serializer.serialize_i64(*n),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::Str(s) => serializer.serialize_str(s),
            FieldValue::Func(f) => serializer.serialize_str(f.source()),
            FieldValue::Map(m) => m.serialize(serializer),
            FieldValue::Record(r) => r.to_plain().serialize(serializer),
        }
    }
}
