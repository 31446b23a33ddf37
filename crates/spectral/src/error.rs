//! Error types for the epocha-spectral crate.

use epocha_intervals::IntervalError;
use epocha_series::SeriesError;

/// Error type for all fallible operations in the epocha-spectral crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpectralError {
    /// Container error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Interval set error.
    #[error(transparent)]
    Interval(#[from] IntervalError),

    /// Returned when a single-epoch estimate is asked for a multi-epoch support.
    #[error("Given epoch (or signal time_support) must have length 1")]
    EpochNotSingle,

    /// Returned when a dynamically typed signal is neither `Tsd` nor `TsdFrame`.
    #[error("Currently {op} is only implemented for Tsd or TsdFrame")]
    UnsupportedSignal {
        /// Name of the rejected operation.
        op: &'static str,
    },

    /// Returned when the sampling rate is not a positive finite number.
    #[error("sampling rate must be a positive finite number, got {0}")]
    InvalidSamplingRate(f64),

    /// Returned when the averaging window is not a positive finite duration.
    #[error("interval_size must be a positive finite number, got {0}")]
    InvalidIntervalSize(f64),

    /// Returned when no window holds `round(interval_size * fs)` samples.
    #[error("no epoch window of {interval_size} s holds {samples} samples")]
    NoCompleteWindow {
        /// Requested window duration.
        interval_size: f64,
        /// Samples required per window.
        samples: usize,
    },

    /// Returned when the signal has no sample within the epoch.
    #[error("signal has no sample within the epoch")]
    EmptySignal,
}
