//! Parameters of the surrogate generators.

/// Configuration for [`shift_timestamps`](crate::shift_timestamps).
///
/// Each series is rotated by one offset drawn uniformly from
/// `[min_shift, max_shift)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShiftConfig {
    /// Smallest offset in seconds.
    min_shift: f64,
    /// Largest offset (None = total support duration).
    max_shift: Option<f64>,
}

impl ShiftConfig {
    /// Creates a config with defaults: `min_shift = 0`, `max_shift` = the
    /// support duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smallest offset.
    pub fn with_min_shift(mut self, min_shift: f64) -> Self {
        self.min_shift = min_shift;
        self
    }

    /// Sets the largest offset.
    pub fn with_max_shift(mut self, max_shift: f64) -> Self {
        self.max_shift = Some(max_shift);
        self
    }

    /// Returns the smallest offset.
    pub fn min_shift(&self) -> f64 {
        self.min_shift
    }

    /// Returns the largest offset, if explicitly set.
    pub fn max_shift(&self) -> Option<f64> {
        self.max_shift
    }
}

/// Configuration for [`jitter_timestamps`](crate::jitter_timestamps).
///
/// `max_jitter` has no default and must be set.
///
/// # Example
///
/// ```ignore
/// use epocha_randomize::JitterConfig;
///
/// let config = JitterConfig::new()
///     .with_min_jitter(0.01)
///     .with_max_jitter(0.1)
///     .with_keep_tsupport(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JitterConfig {
    /// Smallest perturbation in seconds.
    min_jitter: f64,
    /// Largest perturbation; required.
    max_jitter: Option<f64>,
    /// Keep the input support (count may change) instead of inferring a new
    /// one (count conserved).
    keep_tsupport: bool,
}

impl JitterConfig {
    /// Creates a config with `min_jitter = 0`, `keep_tsupport = false` and
    /// no `max_jitter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smallest perturbation.
    pub fn with_min_jitter(mut self, min_jitter: f64) -> Self {
        self.min_jitter = min_jitter;
        self
    }

    /// Sets the largest perturbation.
    pub fn with_max_jitter(mut self, max_jitter: f64) -> Self {
        self.max_jitter = Some(max_jitter);
        self
    }

    /// Sets whether the input support is kept.
    pub fn with_keep_tsupport(mut self, keep_tsupport: bool) -> Self {
        self.keep_tsupport = keep_tsupport;
        self
    }

    /// Returns the smallest perturbation.
    pub fn min_jitter(&self) -> f64 {
        self.min_jitter
    }

    /// Returns the largest perturbation, if set.
    pub fn max_jitter(&self) -> Option<f64> {
        self.max_jitter
    }

    /// Returns whether the input support is kept.
    pub fn keep_tsupport(&self) -> bool {
        self.keep_tsupport
    }
}
