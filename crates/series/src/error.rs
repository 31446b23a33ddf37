//! Error types for the epocha-series crate.

use epocha_intervals::IntervalError;

/// Error type for all fallible operations in the epocha-series crate.
///
/// Covers timestamp validation, value/timestamp shape mismatches, and
/// interval errors raised while deriving supports.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Interval set error.
    #[error(transparent)]
    Interval(#[from] IntervalError),

    /// Returned when a timestamp is NaN or infinite.
    #[error("timestamp {index} is not finite")]
    NonFiniteTimestamp {
        /// Position of the offending timestamp.
        index: usize,
    },

    /// Returned when timestamps decrease.
    #[error("timestamps must be non-decreasing, violated at index {index}")]
    UnsortedTimestamps {
        /// Position of the first timestamp smaller than its predecessor.
        index: usize,
    },

    /// Returned when the value array does not have one row per timestamp.
    #[error("values have {rows} rows along the time axis, expected {times}")]
    LengthMismatch {
        /// Number of timestamps.
        times: usize,
        /// Length of the value array's first axis.
        rows: usize,
    },

    /// Returned when the value array has no time axis.
    #[error("values must have at least one dimension")]
    ZeroDimensional,

    /// Returned when values cannot be reshaped.
    #[error("reshape failed: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
