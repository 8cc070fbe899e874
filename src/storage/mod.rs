// Wed Oct 14 2026 - Alex

pub mod binding;
pub mod collector;

pub use binding::{bind, bind_with, slot, Slot};
pub use collector::{Callback, Collector, Multiplicity};

use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

pub trait Listener<K, V>: Send {
    fn on_changed(&mut self, key: &K, value: &V);
}

impl<K, V, F> Listener<K, V> for F
where
    F: FnMut(&K, &V) + Send,
{
    fn on_changed(&mut self, key: &K, value: &V) {
        self(key, value)
    }
}

/// Handle returned by [`Storage::add_listener`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Resolved values of one kind, with synchronous change notification.
///
/// [`Storage::set`] is the only mutator that notifies. Listeners run in
/// registration order, after the value has been committed.
pub struct Storage<K, V> {
    values: IndexMap<K, V>,
    listeners: Vec<(ListenerId, Box<dyn Listener<K, V>>)>,
    next_listener_id: u64,
}

impl<K: Hash + Eq, V> Storage<K, V> {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn with_listener<L>(listener: L) -> Self
    where
        L: Listener<K, V> + 'static,
    {
        let mut storage = Self::new();
        storage.add_listener(listener);
        storage
    }

    pub fn get<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.values.get(key).unwrap_or(default)
    }

    pub fn find(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: K, value: V) {
        let (index, _) = self.values.insert_full(key, value);

        if let Some((key, value)) = self.values.get_index(index) {
            for (_, listener) in self.listeners.iter_mut() {
                listener.on_changed(key, value);
            }
        }
    }

    /// Notifies every listener again for each stored value, in insertion order.
    pub fn trigger_callbacks(&mut self) {
        for (key, value) in self.values.iter() {
            for (_, listener) in self.listeners.iter_mut() {
                listener.on_changed(key, value);
            }
        }
    }

    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: Listener<K, V> + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(existing, _)| *existing == id) {
            Some(position) => {
                self.listeners.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values.iter()
    }
}

impl<K: Hash + Eq, V> Default for Storage<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Index<&K> for Storage<K, V> {
    type Output = V;

    /// Panics when the key was never set, use [`Storage::get`] otherwise.
    fn index(&self, key: &K) -> &V {
        &self.values[key]
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Storage<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_get_returns_default_when_missing() {
        let storage: Storage<&str, i64> = Storage::new();
        assert_eq!(*storage.get(&"missing", &-1), -1);
        assert!(storage.find(&"missing").is_none());
    }

    #[test]
    fn test_set_then_get() {
        let mut storage = Storage::new();
        storage.set("m_iHealth", 0x344_i64);

        assert_eq!(*storage.get(&"m_iHealth", &-1), 0x344);
        assert_eq!(storage[&"m_iHealth"], 0x344);

        storage.set("m_iHealth", 0x348);
        assert_eq!(*storage.get(&"m_iHealth", &-1), 0x348);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_listener_invoked_once_after_commit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut storage: Storage<String, u64> = Storage::new();

        let sink = Arc::clone(&seen);
        storage.add_listener(move |key: &String, value: &u64| {
            sink.lock().unwrap().push((key.clone(), *value));
        });

        storage.set("GameRules".to_string(), 0x1000);

        assert_eq!(*seen.lock().unwrap(), vec![("GameRules".to_string(), 0x1000)]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut storage: Storage<u32, u32> = Storage::new();

        for tag in 0..3 {
            let order = Arc::clone(&order);
            storage.add_listener(move |_: &u32, _: &u32| order.lock().unwrap().push(tag));
        }

        storage.set(1, 1);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_removed_listener_not_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut storage: Storage<u32, u32> = Storage::new();

        let counter = Arc::clone(&calls);
        let id = storage.add_listener(move |_: &u32, _: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(storage.remove_listener(id));
        assert!(!storage.remove_listener(id));

        storage.set(7, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clear_values_keeps_listeners() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut storage: Storage<&str, u32> = Storage::with_listener(move |_: &&str, _: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        storage.set("a", 1);
        storage.set("b", 2);
        storage.clear_values();

        assert_eq!(*storage.get(&"a", &0), 0);
        assert_eq!(*storage.get(&"b", &0), 0);
        assert_eq!(storage.listener_count(), 1);

        storage.set("a", 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        storage.clear_listeners();
        assert_eq!(storage.listener_count(), 0);
        assert_eq!(*storage.get(&"a", &0), 3);
    }

    #[test]
    fn test_trigger_callbacks_replays_values() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut storage: Storage<u32, u32> = Storage::new();
        storage.set(1, 10);
        storage.set(2, 20);

        let sink = Arc::clone(&seen);
        storage.add_listener(move |key: &u32, value: &u32| {
            sink.lock().unwrap().push((*key, *value))
        });
        storage.trigger_callbacks();

        assert_eq!(*seen.lock().unwrap(), vec![(1, 10), (2, 20)]);
    }
}
