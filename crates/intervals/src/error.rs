//! Error types for the epocha-intervals crate.

/// Error type for all fallible operations in the epocha-intervals crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// Returned when `starts` and `ends` have different lengths.
    #[error("starts and ends differ in length: {starts} starts, {ends} ends")]
    LengthMismatch {
        /// Number of start bounds.
        starts: usize,
        /// Number of end bounds.
        ends: usize,
    },

    /// Returned when a bound is NaN or infinite.
    #[error("interval bounds must be finite, got ({start}, {end})")]
    NonFiniteBound {
        /// Offending start bound.
        start: f64,
        /// Offending end bound.
        end: f64,
    },

    /// Returned when an interval starts after it ends.
    #[error("interval {index} has start {start} > end {end}")]
    StartAfterEnd {
        /// Position of the interval in the input.
        index: usize,
        /// Start bound.
        start: f64,
        /// End bound.
        end: f64,
    },

    /// Returned when a split or window size is not a positive finite number.
    #[error("interval size must be a positive finite number, got {0}")]
    InvalidSize(f64),

    /// Returned when a gap threshold is negative or not finite.
    #[error("gap threshold must be a non-negative finite number, got {0}")]
    InvalidGap(f64),

    /// Returned when a validity mask does not match its timestamps.
    #[error("times and mask differ in length: {times} times, {mask} mask entries")]
    MaskLengthMismatch {
        /// Number of timestamps.
        times: usize,
        /// Number of mask entries.
        mask: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_length_mismatch() {
        let err = IntervalError::LengthMismatch { starts: 3, ends: 2 };
        assert_eq!(
            err.to_string(),
            "starts and ends differ in length: 3 starts, 2 ends"
        );
    }

    #[test]
    fn error_start_after_end() {
        let err = IntervalError::StartAfterEnd {
            index: 1,
            start: 5.0,
            end: 4.0,
        };
        assert_eq!(err.to_string(), "interval 1 has start 5 > end 4");
    }

    #[test]
    fn error_invalid_size() {
        let err = IntervalError::InvalidSize(-1.0);
        assert_eq!(
            err.to_string(),
            "interval size must be a positive finite number, got -1"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IntervalError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IntervalError>();
    }
}
