//! Error types for the epocha-wavelet crate.

use epocha_series::SeriesError;

/// Error type for all fallible operations in the epocha-wavelet crate.
///
/// Covers parameter validation, unsupported inputs and reshaping failures
/// that may occur while assembling the time-frequency output.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaveletError {
    /// Container error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when the Gaussian width is not strictly positive.
    #[error("gaussian_width must be a positive number.")]
    InvalidGaussianWidth(f64),

    /// Returned when the window length is not strictly positive.
    #[error("window_length must be a positive number.")]
    InvalidWindowLength(f64),

    /// Returned when the sampling rate is not a positive finite number.
    #[error("sampling rate must be a positive finite number, got {0}")]
    InvalidSamplingRate(f64),

    /// Returned when a centre frequency is not a positive finite number.
    #[error("frequencies must be positive finite numbers, got {0}")]
    InvalidFrequency(f64),

    /// Returned when a frequency range has a non-positive step or count.
    #[error("invalid frequency range: {0}")]
    InvalidRange(String),

    /// Returned when no centre frequency is given.
    #[error("at least one frequency is required")]
    EmptyFrequencies,

    /// Returned when an unknown normalisation name is given.
    #[error("unsupported wavelet norm: {0} (expected \"l1\", \"l2\" or none)")]
    UnsupportedNorm(String),

    /// Returned when a dynamically typed input is not a valued time series.
    #[error("Currently compute_wavelet_transform is only implemented for Tsd, TsdFrame or TsdTensor, got {0}")]
    UnsupportedSignal(&'static str),

    /// Returned when the output cannot be reshaped.
    #[error("reshape failed: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
