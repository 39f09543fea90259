//! Storage backends for `TopN`.
//!
//! A [`KeyStore`] owns the key → value-sequence mapping. `TopN` drives all
//! admission and eviction decisions; the store only has to answer which of its
//! keys is the worst under a given [`Direction`] and to add or remove entries.
//!
//! Two backends are provided:
//!
//! - [`OrderedStore`]: `BTreeMap`-backed. The worst key is the first or last
//!   key of the map, so eviction is O(log capacity). This is the default.
//! - [`ScanStore`]: `FxHashMap`-backed. The worst key is found by scanning
//!   every retained key, so eviction is O(capacity), but lookups and appends
//!   are O(1) and keys only need `Hash + Eq` besides `Ord`.
//!
//! Both backends produce the same observable behavior for any insertion
//! sequence; only their costs differ.

mod ordered;
mod scan;

pub use ordered::OrderedStore;
pub use scan::ScanStore;

use crate::direction::Direction;
use smallvec::SmallVec;

/// Value sequence stored for each key.
///
/// Most keys only ever see one value, so the first one is stored inline.
pub type Values<V> = SmallVec<[V; 1]>;

/// Key → value-sequence mapping used by `TopN`.
pub trait KeyStore<K, V> {
    /// Number of distinct keys.
    fn len(&self) -> usize;

    /// Check if the store holds no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a key is present
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Values stored under `key`, in insertion order.
    fn get(&self, key: &K) -> Option<&[V]>;

    /// Appends `value` to an existing key.
    ///
    /// Returns the value back as `Err` if the key is absent, leaving the store
    /// untouched.
    fn push(&mut self, key: &K, value: V) -> Result<(), V>;

    /// Inserts a key with its values, returning the previous values if the
    /// key was already present.
    fn insert(&mut self, key: K, values: Values<V>) -> Option<Values<V>>;

    /// Removes a key and all of its values.
    fn remove(&mut self, key: &K) -> Option<(K, Values<V>)>;

    /// The worst retained key under `direction`: the minimum for
    /// [`Direction::Top`], the maximum for [`Direction::Bottom`].
    fn worst(&self, direction: Direction) -> Option<&K>;

    /// Iterate over the retained keys (order is backend-specific)
    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Iterate over `(key, values)` entries (order is backend-specific)
    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &[V])> + '_>;

    /// Removes every entry.
    fn clear(&mut self);
}
