//! `BTreeMap`-backed store.

use super::{KeyStore, Values};
use crate::direction::Direction;
use std::collections::BTreeMap;

/// Ordered store: the worst key is always at one end of the map.
///
/// # Examples
///
/// ```rust
/// use topn::store::{KeyStore, OrderedStore};
/// use topn::Direction;
///
/// let mut store = OrderedStore::new();
/// store.insert(3, ["c"].into_iter().collect());
/// store.insert(1, ["a"].into_iter().collect());
/// assert_eq!(store.worst(Direction::Top), Some(&1));
/// assert_eq!(store.worst(Direction::Bottom), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedStore<K, V> {
    entries: BTreeMap<K, Values<V>>,
}

impl<K, V> OrderedStore<K, V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K, V> Default for OrderedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> KeyStore<K, V> for OrderedStore<K, V> {
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

    #[inline]
    fn worst(&self, direction: Direction) -> Option<&K> {
        match direction {
            Direction::Top => self.entries.keys().next(),
            Direction::Bottom => self.entries.keys().next_back(),
        }
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
    fn test_keys_are_sorted() {
        let mut store = OrderedStore::new();
        for key in [4, 2, 8, 6] {
            store.insert(key, smallvec![()]);
        }
        let keys: Vec<_> = store.keys().copied().collect();
        assert_eq!(keys, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_worst_tracks_removal() {
        let mut store = OrderedStore::new();
        for key in ["pear", "apple", "zucchini"] {
            store.insert(key, smallvec![key.len()]);
        }
        assert_eq!(store.worst(Direction::Top), Some(&"apple"));
        store.remove(&"apple");
        assert_eq!(store.worst(Direction::Top), Some(&"pear"));
        assert_eq!(store.worst(Direction::Bottom), Some(&"zucchini"));
    }
}
