//! Parameters shared by the spectral estimators.

use epocha_intervals::IntervalSet;

/// Configuration for power spectral density estimation.
///
/// # Example
///
/// ```ignore
/// use epocha_spectral::PsdConfig;
///
/// let config = PsdConfig::new().with_fs(1250.0).with_norm(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PsdConfig {
    /// Sampling rate (None = signal rate).
    fs: Option<f64>,
    /// Epoch to analyse (None = signal time support).
    ep: Option<IntervalSet>,
    /// Keep negative frequencies.
    full_range: bool,
    /// Z-score each channel before the transform.
    norm: bool,
}

impl PsdConfig {
    /// Creates a config with defaults: signal rate, signal support,
    /// non-negative frequencies only, no normalisation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sampling rate in Hz.
    pub fn with_fs(mut self, fs: f64) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Sets the epoch to analyse.
    pub fn with_ep(mut self, ep: IntervalSet) -> Self {
        self.ep = Some(ep);
        self
    }

    /// Sets whether negative frequencies are returned.
    pub fn with_full_range(mut self, full_range: bool) -> Self {
        self.full_range = full_range;
        self
    }

    /// Sets whether channels are z-scored first.
    pub fn with_norm(mut self, norm: bool) -> Self {
        self.norm = norm;
        self
    }

    /// Returns the sampling rate, if explicitly set.
    pub fn fs(&self) -> Option<f64> {
        self.fs
    }

    /// Returns the epoch, if explicitly set.
    pub fn ep(&self) -> Option<&IntervalSet> {
        self.ep.as_ref()
    }

    /// Returns whether negative frequencies are returned.
    pub fn full_range(&self) -> bool {
        self.full_range
    }

    /// Returns whether channels are z-scored first.
    pub fn norm(&self) -> bool {
        self.norm
    }
}
