//! Global defaults registry
//!
//! Every record type has exactly one default instance: the field store
//! produced by evaluating its literal declarations with no overrides. The
//! registry caches that store per type for the life of the process. It is
//! computed lazily on first construction and never evicted or recomputed.
//!
//! Uses `parking_lot::Mutex` instead of `std::sync::Mutex` to avoid
//! cascading panics from mutex poisoning.

use std::any::TypeId;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::schema::RecordType;
use crate::store::FieldStore;

/// Init-once slot holding one type's default instance
type DefaultSlot = Arc<OnceCell<Arc<FieldStore>>>;

/// Global registry of default instances (record type -> init-once slot)
static DEFAULTS: Lazy<Mutex<FxHashMap<TypeId, DefaultSlot>>> =
    Lazy::new(|| Mutex::new(FxHashMap::default()));

/// Get the cached default instance for `T`, computing it on first use
///
/// Race-safe and exactly-once: each type owns an init-once slot, so under
/// a first-construction race the declarations still evaluate a single
/// time; every other caller blocks on the slot until the one result is
/// published, and no caller ever sees a partially-built store. The
/// registry lock is held only to resolve the slot, never across
/// declaration evaluation, so declarations may construct nested record
/// instances (which re-enter this registry for their own types).
pub fn get_or_init<T: RecordType>() -> Arc<FieldStore> {
    let slot: DefaultSlot = {
        let mut registry = DEFAULTS.lock();
        Arc::clone(registry.entry(TypeId::of::<T>()).or_default())
    };

    Arc::clone(slot.get_or_init(|| {
        let store = Arc::new(FieldStore::from_declarations(T::declared_fields()));
        tracing::debug!(
            record_type = T::type_name(),
            fields = store.len(),
            "captured default instance"
        );
        store
    }))
}

/// Clear every cached default instance
///
/// Test lifecycle only: lets a test suite observe first-construction
/// behavior repeatedly. Instances constructed before a reset remain valid;
/// they own their field stores independently of the registry.
pub fn reset() {
    let mut registry = DEFAULTS.lock();
    let evicted = registry.len();
    registry.clear();
    tracing::debug!(evicted, "defaults registry reset");
}
