//! Keyed in-memory store
//!
//! Values live in insertion order; a key -> slot index gives O(1) lookup and
//! replace-by-key. Removal shifts later slots and re-indexes them.
//!
//! Not synchronized. Repositories wrap one store in one `Mutex`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct KeyedStore<K, V> {
    values: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value under `key`, keeping its position, or append it.
    /// Returns the previous value if there was one.
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&slot) => self
                .values
                .get_mut(slot)
                .map(|existing| std::mem::replace(existing, value)),
            None => {
                self.index.insert(key, self.values.len());
                self.values.push(value);
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).and_then(|&slot| self.values.get(slot))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        if slot >= self.values.len() {
            return None;
        }
        let removed = self.values.remove(slot);
        for later in self.index.values_mut() {
            if *later > slot {
                *later -= 1;
            }
        }
        Some(removed)
    }

    /// Values in insertion order
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
