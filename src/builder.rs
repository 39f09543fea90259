//! Builder pattern for creating `TopN` instances.
//!
//! The `TopNBuilder` provides a fluent API for constructing `TopN`
//! instances, deferring validation to [`build`](TopNBuilder::build).

use crate::direction::Direction;
use crate::error::Result;
use crate::multimap::TopN;
use crate::options::TopNOptions;
use crate::store::KeyStore;

/// Builder for constructing a `TopN` with a fluent API.
///
/// Unset fields fall back to the defaults: capacity 100, [`Direction::Top`].
///
/// # Example
///
/// ```rust
/// use topn::prelude::*;
///
/// let mut slowest: TopN<u64, &str> = TopNBuilder::new()
///     .capacity(3)
///     .direction(Direction::Top)
///     .build()
///     .unwrap();
///
/// assert!(slowest.insert(120, "GET /").is_accepted());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TopNBuilder {
    options: TopNOptions,
}

impl TopNBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of options.
    pub fn from_options(options: TopNOptions) -> Self {
        Self { options }
    }

    /// Set the maximum number of retained keys.
    ///
    /// Validated by [`build`](Self::build); zero or negative values fail there.
    pub fn capacity(mut self, capacity: i64) -> Self {
        self.options.capacity = capacity;
        self
    }

    /// Set which extreme of the key space to retain.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.options.direction = direction;
        self
    }

    /// The options accumulated so far.
    pub fn options(&self) -> &TopNOptions {
        &self.options
    }

    /// Build a `TopN` with the default backend.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`](crate::InvalidArgument) if the capacity is
    /// not a positive integer.
    pub fn build<K: Ord + Clone, V>(self) -> Result<TopN<K, V>> {
        TopN::with_options(self.options)
    }

    /// Build a `TopN` over a caller-supplied backend.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_store<K, V, S>(self, store: S) -> Result<TopN<K, V, S>>
    where
        K: Ord + Clone,
        S: KeyStore<K, V>,
    {
        TopN::with_store(self.options.capacity, self.options.direction, store)
    }
}
