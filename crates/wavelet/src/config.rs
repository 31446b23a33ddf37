//! Configuration for the Morlet wavelet transform.

use std::str::FromStr;

use crate::error::WaveletError;

/// Amplitude scaling applied to each wavelet before convolution.
///
/// Changes the amplitude scale only, not the frequency localisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveletNorm {
    /// Divide the kernel at frequency `f` by `fs / f`.
    L1,
    /// Divide the kernel at frequency `f` by `fs / sqrt(f)`.
    L2,
}

impl WaveletNorm {
    /// Divisor applied to the kernel centred on `freq`.
    pub(crate) fn divisor(self, freq: f64, fs: f64) -> f64 {
        match self {
            WaveletNorm::L1 => fs / freq,
            WaveletNorm::L2 => fs / freq.sqrt(),
        }
    }
}

impl FromStr for WaveletNorm {
    type Err = WaveletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l1" => Ok(WaveletNorm::L1),
            "l2" => Ok(WaveletNorm::L2),
            other => Err(WaveletError::UnsupportedNorm(other.to_string())),
        }
    }
}

/// Configuration for [`compute_wavelet_transform`](crate::compute_wavelet_transform).
///
/// # Example
///
/// ```ignore
/// use epocha_wavelet::{WaveletConfig, WaveletNorm};
///
/// let config = WaveletConfig::new()
///     .with_fs(1250.0)
///     .with_norm(Some(WaveletNorm::L2))
///     .with_gaussian_width(3.0);
/// ```
#[derive(Clone, Debug)]
pub struct WaveletConfig {
    /// Sampling rate (None = signal rate).
    fs: Option<f64>,
    /// Kernel scaling (None = raw convolution).
    norm: Option<WaveletNorm>,
    /// Width of the Gaussian envelope; larger trades time for frequency
    /// resolution.
    gaussian_width: f64,
    /// Length of the mother wavelet in cycles.
    window_length: f64,
}

impl WaveletConfig {
    /// Creates a new `WaveletConfig` with default parameters.
    ///
    /// Defaults: `fs = None` (signal rate), `norm = Some(L1)`,
    /// `gaussian_width = 1.5`, `window_length = 1.0`.
    pub fn new() -> Self {
        Self {
            fs: None,
            norm: Some(WaveletNorm::L1),
            gaussian_width: 1.5,
            window_length: 1.0,
        }
    }

    /// Sets the sampling rate in Hz.
    pub fn with_fs(mut self, fs: f64) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Sets the kernel scaling; `None` convolves with raw kernels.
    pub fn with_norm(mut self, norm: Option<WaveletNorm>) -> Self {
        self.norm = norm;
        self
    }

    /// Sets the Gaussian width.
    pub fn with_gaussian_width(mut self, gaussian_width: f64) -> Self {
        self.gaussian_width = gaussian_width;
        self
    }

    /// Sets the window length.
    pub fn with_window_length(mut self, window_length: f64) -> Self {
        self.window_length = window_length;
        self
    }

    /// Returns the sampling rate, if explicitly set.
    pub fn fs(&self) -> Option<f64> {
        self.fs
    }

    /// Returns the kernel scaling.
    pub fn norm(&self) -> Option<WaveletNorm> {
        self.norm
    }

    /// Returns the Gaussian width.
    pub fn gaussian_width(&self) -> f64 {
        self.gaussian_width
    }

    /// Returns the window length.
    pub fn window_length(&self) -> f64 {
        self.window_length
    }

    /// Checks the shape parameters.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::InvalidGaussianWidth`] | `gaussian_width <= 0` or not finite |
    /// | [`WaveletError::InvalidWindowLength`] | `window_length <= 0` or not finite |
    pub fn validate(&self) -> Result<(), WaveletError> {
        if !(self.gaussian_width.is_finite() && self.gaussian_width > 0.0) {
            return Err(WaveletError::InvalidGaussianWidth(self.gaussian_width));
        }
        if !(self.window_length.is_finite() && self.window_length > 0.0) {
            return Err(WaveletError::InvalidWindowLength(self.window_length));
        }
        Ok(())
    }
}

impl Default for WaveletConfig {
    fn default() -> Self {
        Self::new()
    }
}
