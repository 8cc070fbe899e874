// Wed Oct 14 2026 - Alex

use crate::storage::Listener;
use ahash::AHashMap;
use std::hash::Hash;

pub type Callback<K, V> = Box<dyn FnMut(&K, &V) + Send>;

/// How many callbacks a [`Collector`] keeps for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Multiplicity {
    /// A new callback replaces the previous one.
    #[default]
    Replace,
    /// Callbacks accumulate and run in insertion order.
    Append,
}

/// Listener that dispatches changes to per-key callbacks.
///
/// Register it on a storage with [`crate::storage::Storage::add_listener`]
/// once its callbacks are inserted.
pub struct Collector<K, V> {
    multiplicity: Multiplicity,
    callbacks: AHashMap<K, Vec<Callback<K, V>>>,
}

impl<K: Hash + Eq + Send, V> Collector<K, V> {
    pub fn new(multiplicity: Multiplicity) -> Self {
        Self {
            multiplicity,
            callbacks: AHashMap::new(),
        }
    }

    pub fn single() -> Self {
        Self::new(Multiplicity::Replace)
    }

    pub fn multiple() -> Self {
        Self::new(Multiplicity::Append)
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn insert<F>(&mut self, key: K, callback: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.insert_boxed(key, Box::new(callback));
    }

    pub fn insert_boxed(&mut self, key: K, callback: Callback<K, V>) {
        let entry = self.callbacks.entry(key).or_default();

        if self.multiplicity == Multiplicity::Replace {
            entry.clear();
        }
        entry.push(callback);
    }

    /// Appends a batch of callbacks; under `Replace` only the last one survives.
    pub fn extend(&mut self, key: K, callbacks: Vec<Callback<K, V>>) {
        match self.multiplicity {
            Multiplicity::Append => self.callbacks.entry(key).or_default().extend(callbacks),
            Multiplicity::Replace => {
                if let Some(last) = callbacks.into_iter().last() {
                    self.insert_boxed(key, last);
                }
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.callbacks.remove(key).is_some()
    }

    pub fn remove_all(&mut self) {
        self.callbacks.clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.callbacks.contains_key(key)
    }

    pub fn callback_count(&self, key: &K) -> usize {
        self.callbacks.get(key).map_or(0, Vec::len)
    }
}

impl<K: Hash + Eq + Send, V> Listener<K, V> for Collector<K, V> {
    fn on_changed(&mut self, key: &K, value: &V) {
        if let Some(callbacks) = self.callbacks.get_mut(key) {
            for callback in callbacks.iter_mut() {
                callback(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use std::sync::{Arc, Mutex};

    fn recorder(
        log: &Arc<Mutex<Vec<String>>>,
        tag: &'static str,
    ) -> impl FnMut(&u32, &u64) + Send + 'static {
        let log = Arc::clone(log);
        move |key: &u32, value: &u64| {
            log.lock().unwrap().push(format!("{}:{}={:#x}", tag, key, value))
        }
    }

    #[test]
    fn test_single_collector_replaces() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut collector = Collector::single();
        collector.insert(1, recorder(&log, "first"));
        collector.insert(1, recorder(&log, "second"));
        assert_eq!(collector.callback_count(&1), 1);

        let mut storage = Storage::with_listener(collector);
        storage.set(1, 0x10);
        storage.set(2, 0x20);

        assert_eq!(*log.lock().unwrap(), vec!["second:1=0x10".to_string()]);
    }

    #[test]
    fn test_multiple_collector_appends_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut collector = Collector::multiple();
        collector.insert(1, recorder(&log, "a"));
        collector.insert(1, recorder(&log, "b"));
        let late: Callback<u32, u64> = Box::new(recorder(&log, "c"));
        collector.extend(1, vec![late]);

        let mut storage = Storage::with_listener(collector);
        storage.set(1, 0x10);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["a:1=0x10".to_string(), "b:1=0x10".to_string(), "c:1=0x10".to_string()]
        );
    }

    #[test]
    fn test_remove_reports_presence() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut collector: Collector<u32, u64> = Collector::multiple();
        collector.insert(3, recorder(&log, "x"));

        assert!(collector.remove(&3));
        assert!(!collector.remove(&3));
        assert!(!collector.contains(&3));

        collector.insert(4, recorder(&log, "y"));
        collector.remove_all();
        assert!(!collector.contains(&4));
    }
}
