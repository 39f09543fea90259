//! Retention direction.
//!
//! A [`Direction`] decides which end of the key order a `TopN` keeps, and
//! therefore which retained key is the threshold (the next one to go).

use crate::error::InvalidArgument;
use std::fmt;
use std::str::FromStr;

/// Which extreme of the key space to retain.
///
/// # Examples
///
/// ```rust
/// use topn::Direction;
///
/// assert!(Direction::Top.rejects(&1, &2));
/// assert!(!Direction::Top.rejects(&3, &2));
/// assert!(Direction::Bottom.rejects(&3, &2));
///
/// let parsed: Direction = "bottom".parse().unwrap();
/// assert_eq!(parsed, Direction::Bottom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Retain the largest keys; the threshold is the minimum retained key.
    #[default]
    Top,
    /// Retain the smallest keys; the threshold is the maximum retained key.
    Bottom,
}

impl Direction {
    /// Returns `true` if `candidate` is strictly worse than `threshold`.
    ///
    /// Top rejects smaller keys, Bottom rejects larger ones. Equal keys are
    /// not worse; tie handling is left to the caller.
    #[inline]
    pub fn rejects<K: Ord + ?Sized>(self, candidate: &K, threshold: &K) -> bool {
        match self {
            Direction::Top => candidate < threshold,
            Direction::Bottom => candidate > threshold,
        }
    }

    /// Returns `true` if `a` is strictly more extreme than `b`.
    #[inline]
    pub fn more_extreme<K: Ord + ?Sized>(self, a: &K, b: &K) -> bool {
        match self {
            Direction::Top => a > b,
            Direction::Bottom => a < b,
        }
    }

    /// Picks the worse of two keys, preferring `a` on ties.
    #[inline]
    pub fn worse<'a, K: Ord + ?Sized>(self, a: &'a K, b: &'a K) -> &'a K {
        if self.rejects(b, a) {
            b
        } else {
            a
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("top") {
            Ok(Direction::Top)
        } else if trimmed.eq_ignore_ascii_case("bottom") {
            Ok(Direction::Bottom)
        } else {
            Err(InvalidArgument::UnknownDirection(s.to_string()))
        }
    }
}
