// Wed Oct 14 2026 - Alex

//! Callbacks that copy a resolved value into a caller-owned slot.
//!
//! Typical use is binding a field of a plugin struct to a gamedata entry
//! before load, so the field is filled the moment the entry resolves.

use parking_lot::RwLock;
use std::sync::Arc;

pub type Slot<T> = Arc<RwLock<Option<T>>>;

pub fn slot<T>() -> Slot<T> {
    Arc::new(RwLock::new(None))
}

pub fn bind<K, V>(slot: &Slot<V>) -> impl FnMut(&K, &V) + Send + 'static
where
    K: 'static,
    V: Clone + Send + Sync + 'static,
{
    let slot = Arc::clone(slot);
    move |_key: &K, value: &V| {
        *slot.write() = Some(value.clone());
    }
}

/// Like [`bind`], converting the value first (e.g. an address into a typed pointer).
pub fn bind_with<K, V, T, F>(slot: &Slot<T>, map: F) -> impl FnMut(&K, &V) + Send + 'static
where
    K: 'static,
    V: 'static,
    T: Send + Sync + 'static,
    F: Fn(&V) -> T + Send + 'static,
{
    let slot = Arc::clone(slot);
    move |_key: &K, value: &V| {
        *slot.write() = Some(map(value));
    }
}
