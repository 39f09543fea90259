//! Hash-backed store with linear worst-key search.

use super::{KeyStore, Values};
use crate::direction::Direction;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Unordered store that finds the worst key by scanning.
///
/// Uses FxHasher for fast non-cryptographic hashing. Finding the worst key
/// visits every retained key, which `TopN` only does after an eviction.
#[derive(Debug, Clone)]
pub struct ScanStore<K, V> {
    entries: FxHashMap<K, Values<V>>,
}

impl<K, V> ScanStore<K, V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Creates an empty store with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<K, V> Default for ScanStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Hash, V> KeyStore<K, V> for ScanStore<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&[V]> {
        self.entries.get(key).map(|values| values.as_slice())
    }

    #[inline]
    fn push(&mut self, key: &K, value: V) -> Result<(), V> {
        match self.entries.get_mut(key) {
            Some(values) => {
                values.push(value);
                Ok(())
            }
            None => Err(value),
        }
    }

    #[inline]
    fn insert(&mut self, key: K, values: Values<V>) -> Option<Values<V>> {
        self.entries.insert(key, values)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<(K, Values<V>)> {
        self.entries.remove_entry(key)
    }

    fn worst(&self, direction: Direction) -> Option<&K> {
        self.entries
            .keys()
            .reduce(|worst, key| direction.worse(worst, key))
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.entries.keys())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &[V])> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(key, values)| (key, values.as_slice())),
        )
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_worst_scans_all_keys() {
        let mut store = ScanStore::with_capacity(16);
        for key in [17, 3, 99, 42, -8, 55] {
            store.insert(key, smallvec![key * 2]);
        }
        assert_eq!(store.worst(Direction::Top), Some(&-8));
        assert_eq!(store.worst(Direction::Bottom), Some(&99));

        store.remove(&-8);
        store.remove(&99);
        assert_eq!(store.worst(Direction::Top), Some(&3));
        assert_eq!(store.worst(Direction::Bottom), Some(&55));
    }

    #[test]
    fn test_single_key_is_worst_both_ways() {
        let mut store = ScanStore::new();
        store.insert("only", smallvec![1u8]);
        assert_eq!(store.worst(Direction::Top), Some(&"only"));
        assert_eq!(store.worst(Direction::Bottom), Some(&"only"));
    }
}
