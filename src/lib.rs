//! # topn
//!
//! Bounded key-ordered multimap for streaming top-K / bottom-K aggregation.
//!
//! A [`TopN`] is fed `(key, value)` pairs and keeps only the `capacity` keys
//! with the largest ([`Direction::Top`]) or smallest ([`Direction::Bottom`])
//! key values. Each retained key accumulates every value inserted under it.
//! Useful when key cardinality is large but only the extremes matter, such as
//! leaderboards or the tail of a latency histogram.
//!
//! ## Example
//!
//! ```rust
//! use topn::prelude::*;
//!
//! let mut slowest = TopN::new(2, Direction::Top).unwrap();
//! for (latency_ms, path) in [(12, "/a"), (250, "/b"), (90, "/c"), (250, "/d"), (3, "/e")] {
//!     let _ = slowest.insert(latency_ms, path);
//! }
//!
//! assert_eq!(slowest.keys().into_iter().collect::<Vec<_>>(), vec![90, 250]);
//! assert_eq!(slowest.find(&250), Some(&["/b", "/d"][..]));
//! assert_eq!(slowest.threshold(), Some(&90));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use topn::prelude::*;
//!
//! let options = TopNOptions::from_pairs([("capacity", "10"), ("direction", "bottom")]).unwrap();
//! let fastest: TopN<u32, String> = TopN::with_options(options).unwrap();
//! assert_eq!(fastest.direction(), Direction::Bottom);
//!
//! // Typos fail construction instead of being ignored
//! assert!(TopNOptions::from_pairs([("direcion", "bottom")]).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod direction;
pub mod error;
pub mod multimap;
pub mod options;
pub mod store;

pub use builder::TopNBuilder;
pub use direction::Direction;
pub use error::{InvalidArgument, Result};
pub use multimap::{InsertOutcome, ScanTopN, TopN};
pub use options::TopNOptions;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::builder::TopNBuilder;
    pub use crate::direction::Direction;
    pub use crate::error::InvalidArgument;
    pub use crate::multimap::{InsertOutcome, ScanTopN, TopN};
    pub use crate::options::TopNOptions;
    pub use crate::store::{KeyStore, OrderedStore, ScanStore};
}
