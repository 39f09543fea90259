//! Error types for `TopN` construction.
//!
//! Every error in this crate is raised while a container is being configured.
//! Once a `TopN` exists, all of its operations are total: a rejected key is an
//! [`InsertOutcome`](crate::InsertOutcome), not an error.

use thiserror::Error;

/// Invalid constructor argument or configuration option.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Capacity was zero or negative.
    #[error("capacity must be a positive integer, got {0}")]
    NonPositiveCapacity(i64),

    /// Capacity is positive but does not fit in `usize` on this platform.
    #[error("capacity {0} is too large for this platform")]
    CapacityOverflow(i64),

    /// Textual capacity could not be parsed as an integer.
    #[error("capacity must be a positive integer, got {0:?}")]
    MalformedCapacity(String),

    /// Direction was neither `top` nor `bottom`.
    #[error("unknown direction {0:?}, expected \"top\" or \"bottom\"")]
    UnknownDirection(String),

    /// Configuration key not recognized.
    ///
    /// Unknown keys are rejected rather than ignored so that a typo such as
    /// `capactiy` fails loudly instead of silently falling back to the default.
    #[error("unrecognized option {0:?}")]
    UnrecognizedOption(String),

    /// Same option (or one of its aliases) given more than once.
    #[error("option {0:?} given more than once")]
    DuplicateOption(String),
}

/// A specialized `Result` type for `TopN` construction.
pub type Result<T> = std::result::Result<T, InvalidArgument>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidArgument::NonPositiveCapacity(-1).to_string(),
            "capacity must be a positive integer, got -1"
        );
        assert_eq!(
            InvalidArgument::UnknownDirection("flarg".to_string()).to_string(),
            "unknown direction \"flarg\", expected \"top\" or \"bottom\""
        );
        assert_eq!(
            InvalidArgument::UnrecognizedOption("capactiy".to_string()).to_string(),
            "unrecognized option \"capactiy\""
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&InvalidArgument::MalformedCapacity("ten".to_string()));
    }
}
