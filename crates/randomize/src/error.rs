//! Error types for the epocha-randomize crate.

use epocha_series::SeriesError;

/// Error type for all fallible operations in the epocha-randomize crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RandomizeError {
    /// Container error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when a dynamically typed input is not a point process.
    #[error("Invalid input type, should be Ts or TsGroup")]
    InvalidInputType,

    /// Returned when a required parameter was never set.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Returned when a lower bound exceeds its upper bound.
    #[error("min_{name} ({min}) must not exceed max_{name} ({max})")]
    InvalidBounds {
        /// Parameter family, e.g. `"shift"`.
        name: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Returned when a bound is NaN or infinite.
    #[error("{name} bound must be finite, got {value}")]
    NonFiniteBound {
        /// Parameter family, e.g. `"jitter"`.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
