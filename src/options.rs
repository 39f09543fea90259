//! Configuration surface for `TopN`.
//!
//! [`TopNOptions`] holds the two knobs a container has, `capacity` and
//! `direction`, and validates them strictly. Options can be assembled in code,
//! parsed from `(key, value)` string pairs, or (with the `serialization`
//! feature) deserialized with serde. In every form an unrecognized key is an
//! error.
//!
//! # Examples
//!
//! ```rust
//! use topn::{Direction, TopNOptions};
//!
//! let options = TopNOptions::from_pairs([("maxkeys", "10"), ("direction", "bottom")]).unwrap();
//! assert_eq!(options.capacity, 10);
//! assert_eq!(options.direction, Direction::Bottom);
//!
//! assert!(TopNOptions::from_pairs([("capactiy", "10")]).is_err());
//! ```

use crate::direction::Direction;
use crate::error::{InvalidArgument, Result};
use std::num::NonZeroUsize;

/// Default number of retained keys.
pub const DEFAULT_CAPACITY: i64 = 100;

const CAPACITY_KEYS: [&str; 3] = ["capacity", "maxkeys", "maxsize"];
const DIRECTION_KEY: &str = "direction";

/// Unvalidated constructor options.
///
/// `capacity` is signed so that zero and negative requests can be reported as
/// [`InvalidArgument::NonPositiveCapacity`] instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct TopNOptions {
    /// Maximum number of distinct keys retained.
    #[cfg_attr(feature = "serialization", serde(alias = "maxkeys", alias = "maxsize"))]
    pub capacity: i64,
    /// Which extreme of the key space to retain.
    pub direction: Direction,
}

impl Default for TopNOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            direction: Direction::Top,
        }
    }
}

impl TopNOptions {
    /// Creates options with the defaults (capacity 100, `Top`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity.
    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Parses options from `(key, value)` string pairs.
    ///
    /// Recognized keys are `capacity` (also spelled `maxkeys` or `maxsize`) and
    /// `direction`. Keys that are not given keep their defaults.
    ///
    /// # Errors
    ///
    /// - [`InvalidArgument::UnrecognizedOption`] for any other key
    /// - [`InvalidArgument::DuplicateOption`] if an option is given twice
    /// - [`InvalidArgument::MalformedCapacity`] if the capacity is not an integer
    /// - [`InvalidArgument::UnknownDirection`] if the direction is not `top`/`bottom`
    ///
    /// Capacity range is not checked here; see [`validate`](Self::validate).
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        let mut seen_capacity = false;
        let mut seen_direction = false;

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if CAPACITY_KEYS.contains(&key) {
                if std::mem::replace(&mut seen_capacity, true) {
                    return Err(InvalidArgument::DuplicateOption(key.to_string()));
                }
                options.capacity = value
                    .trim()
                    .parse()
                    .map_err(|_| InvalidArgument::MalformedCapacity(value.to_string()))?;
            } else if key == DIRECTION_KEY {
                if std::mem::replace(&mut seen_direction, true) {
                    return Err(InvalidArgument::DuplicateOption(key.to_string()));
                }
                options.direction = value.parse()?;
            } else {
                return Err(InvalidArgument::UnrecognizedOption(key.to_string()));
            }
        }

        Ok(options)
    }

    /// Checks the options, returning the capacity as a `NonZeroUsize`.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::NonPositiveCapacity`] or
    /// [`InvalidArgument::CapacityOverflow`] if the capacity is out of range.
    pub fn validate(&self) -> Result<(NonZeroUsize, Direction)> {
        Ok((checked_capacity(self.capacity)?, self.direction))
    }
}

/// Converts a requested capacity to a `NonZeroUsize`.
pub(crate) fn checked_capacity(capacity: i64) -> Result<NonZeroUsize> {
    if capacity <= 0 {
        return Err(InvalidArgument::NonPositiveCapacity(capacity));
    }
    usize::try_from(capacity)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(InvalidArgument::CapacityOverflow(capacity))
}
