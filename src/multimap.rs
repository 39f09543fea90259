//! `TopN` - a bounded multimap that keeps only the extreme keys.
//!
//! # Overview
//!
//! `TopN` accepts a stream of `(key, value)` pairs and retains at most
//! `capacity` distinct keys: the largest ones under [`Direction::Top`], the
//! smallest under [`Direction::Bottom`]. Every retained key accumulates all of
//! the values inserted under it, in insertion order.
//!
//! The retained key that would be evicted next is the *threshold*. A new key
//! arriving at a full container is admitted only if it is strictly more
//! extreme than the threshold, in which case the threshold entry (with all of
//! its values) is evicted. Ties never displace an entry that is already in.
//!
//! # Example
//!
//! ```rust
//! use topn::prelude::*;
//!
//! let mut leaders = TopN::new(2, Direction::Top).unwrap();
//! assert!(leaders.insert(1, "a").is_accepted());
//! assert!(leaders.insert(2, "b").is_accepted());
//!
//! // 3 displaces the threshold key 1
//! assert!(leaders.insert(3, "c").is_accepted());
//! assert_eq!(leaders.find(&1), None);
//! assert_eq!(leaders.threshold(), Some(&2));
//!
//! // 0 is worse than the threshold and leaves no trace
//! assert!(leaders.insert(0, "d").is_rejected());
//! assert_eq!(leaders.len(), 2);
//!
//! // existing keys always accept more values
//! assert!(leaders.insert(2, "e").is_accepted());
//! assert_eq!(leaders.find(&2), Some(&["b", "e"][..]));
//! ```

use crate::direction::Direction;
use crate::error::Result;
use crate::options::{checked_capacity, TopNOptions, DEFAULT_CAPACITY};
use crate::store::{KeyStore, OrderedStore, ScanStore};
use smallvec::smallvec;
use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

const DEFAULT_NONZERO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY as usize) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be positive"),
};

/// Result of [`TopN::insert`].
///
/// Rejection is an ordinary outcome, not an error.
#[must_use = "a rejected key is dropped; check the outcome if that matters"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    /// The value was stored, either under an existing key or a newly admitted one.
    Accepted,
    /// The key was new and not more extreme than the threshold of a full
    /// container. Nothing changed.
    Rejected,
}

impl InsertOutcome {
    /// Returns `true` for [`InsertOutcome::Accepted`].
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, InsertOutcome::Accepted)
    }

    /// Returns `true` for [`InsertOutcome::Rejected`].
    #[inline]
    pub fn is_rejected(self) -> bool {
        matches!(self, InsertOutcome::Rejected)
    }
}

/// Bounded multimap retaining the `capacity` most extreme keys.
///
/// # Type Parameters
///
/// - `K`: Key type, totally ordered
/// - `V`: Value type, opaque
/// - `S`: Storage backend (defaults to [`OrderedStore`])
///
/// # Invariants
///
/// After every operation:
/// - `len() <= capacity()`
/// - `threshold()` is `None` iff the container is empty, and otherwise equals
///   the minimum (`Top`) or maximum (`Bottom`) of the retained keys
#[derive(Debug, Clone)]
pub struct TopN<K, V, S = OrderedStore<K, V>> {
    store: S,
    threshold: Option<K>,
    capacity: NonZeroUsize,
    direction: Direction,
    _values: PhantomData<V>,
}

/// `TopN` backed by a hash map with a linear threshold scan.
pub type ScanTopN<K, V> = TopN<K, V, ScanStore<K, V>>;

impl<K: Ord + Clone, V> TopN<K, V> {
    /// Creates an empty container with the default [`OrderedStore`] backend.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::InvalidArgument) if `capacity` is not
    /// a positive integer representable as `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topn::{Direction, InvalidArgument, TopN};
    ///
    /// let topn: TopN<u32, String> = TopN::new(10, Direction::Bottom).unwrap();
    /// assert_eq!(topn.capacity(), 10);
    ///
    /// let err = TopN::<u32, String>::new(0, Direction::Top).unwrap_err();
    /// assert_eq!(err, InvalidArgument::NonPositiveCapacity(0));
    /// ```
    pub fn new(capacity: i64, direction: Direction) -> Result<Self> {
        Self::with_store(capacity, direction, OrderedStore::new())
    }

    /// Creates an empty container from validated [`TopNOptions`].
    pub fn with_options(options: TopNOptions) -> Result<Self> {
        Self::new(options.capacity, options.direction)
    }
}

impl<K: Ord + Clone, V> Default for TopN<K, V> {
    /// Capacity 100, [`Direction::Top`].
    fn default() -> Self {
        Self::from_parts(DEFAULT_NONZERO_CAPACITY, Direction::Top, OrderedStore::new())
    }
}

impl<K, V, S> TopN<K, V, S>
where
    K: Ord + Clone,
    S: KeyStore<K, V>,
{
    /// Creates an empty container over the given backend.
    ///
    /// Any entries already in `store` are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topn::store::ScanStore;
    /// use topn::{Direction, ScanTopN, TopN};
    ///
    /// let topn: ScanTopN<i64, ()> =
    ///     TopN::with_store(5, Direction::Top, ScanStore::with_capacity(5)).unwrap();
    /// assert!(topn.is_empty());
    /// ```
    pub fn with_store(capacity: i64, direction: Direction, mut store: S) -> Result<Self> {
        let capacity = checked_capacity(capacity)?;
        store.clear();
        Ok(Self::from_parts(capacity, direction, store))
    }

    /// Builds a container and feeds it `pairs`, dropping rejected ones.
    pub fn from_iter_with<I>(capacity: i64, direction: Direction, pairs: I) -> Result<Self>
    where
        S: Default,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut topn = Self::with_store(capacity, direction, S::default())?;
        topn.extend(pairs);
        Ok(topn)
    }

    pub(crate) fn from_parts(capacity: NonZeroUsize, direction: Direction, store: S) -> Self {
        tracing::debug!(capacity = capacity.get(), %direction, "created TopN");
        Self {
            store,
            threshold: None,
            capacity,
            direction,
            _values: PhantomData,
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// - An existing key always accepts the value, appended after the values
    ///   already stored.
    /// - A new key is admitted while there is room.
    /// - At capacity, a new key is admitted only if it is strictly more extreme
    ///   than the threshold; the threshold entry is then evicted and the
    ///   threshold recomputed. Otherwise the pair is rejected and nothing
    ///   changes.
    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome {
        let value = match self.store.push(&key, value) {
            Ok(()) => {
                tracing::trace!(size = self.store.len(), "appended value to retained key");
                return InsertOutcome::Accepted;
            }
            Err(value) => value,
        };

        if self.is_full() {
            let displaces = self
                .threshold
                .as_ref()
                .map_or(true, |threshold| self.direction.more_extreme(&key, threshold));
            if !displaces {
                tracing::trace!(
                    size = self.store.len(),
                    direction = %self.direction,
                    "rejected key at or beyond threshold"
                );
                return InsertOutcome::Rejected;
            }
            self.evict_threshold();
        }

        self.admit(key, value);
        debug_assert!(self.store.len() <= self.capacity.get());
        InsertOutcome::Accepted
    }

    /// Removes the threshold entry and recomputes the threshold from the
    /// remaining keys.
    fn evict_threshold(&mut self) {
        if let Some(threshold) = self.threshold.take() {
            if let Some((_, values)) = self.store.remove(&threshold) {
                tracing::debug!(
                    evicted_values = values.len(),
                    size = self.store.len(),
                    direction = %self.direction,
                    "evicted threshold key"
                );
            }
            self.threshold = self.store.worst(self.direction).cloned();
        }
    }

    /// Stores a key that is known to be absent. There must be room for it.
    fn admit(&mut self, key: K, value: V) {
        let becomes_threshold = match &self.threshold {
            None => true,
            Some(threshold) => self.direction.rejects(&key, threshold),
        };
        if becomes_threshold {
            self.threshold = Some(key.clone());
        }
        self.store.insert(key, smallvec![value]);
        tracing::trace!(size = self.store.len(), becomes_threshold, "admitted key");
    }

    /// Values accumulated under `key`, in insertion order.
    #[inline]
    pub fn find(&self, key: &K) -> Option<&[V]> {
        self.store.get(key)
    }

    /// Check if `key` is currently retained
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Snapshot of the retained keys.
    pub fn keys(&self) -> BTreeSet<K> {
        self.store.keys().cloned().collect()
    }

    /// Iterates over retained `(key, values)` entries in backend order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> + '_ {
        self.store.iter()
    }

    /// Number of retained keys.
    #[inline]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Number of retained keys (alias of [`size`](Self::size)).
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no keys are retained
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns `true` once `capacity()` keys are retained.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.store.len() >= self.capacity.get()
    }

    /// The worst retained key, or `None` when empty.
    #[inline]
    pub fn threshold(&self) -> Option<&K> {
        self.threshold.as_ref()
    }

    /// Maximum number of retained keys.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Configured retention direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Read-only access to the storage backend.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<K, V, S> Extend<(K, V)> for TopN<K, V, S>
where
    K: Ord + Clone,
    S: KeyStore<K, V>,
{
    /// Inserts every pair; rejected pairs are dropped silently.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            let _ = self.insert(key, value);
        }
    }
}
