//! # epocha
//!
//! Interval-aware time series analysis for neurophysiology: timestamped
//! containers restricted to a time support, spectral estimation, Morlet
//! wavelet decomposition and surrogate point processes.
//!
//! | Crate | Re-exported as | Content |
//! |-------|----------------|---------|
//! | `epocha-intervals` | [`intervals`] | [`IntervalSet`] set algebra |
//! | `epocha-series` | [`series`] | [`Ts`], [`Tsd`], [`TsdFrame`], [`TsdTensor`], [`TsGroup`] |
//! | `epocha-spectral` | [`spectral`] | FFT power spectral density |
//! | `epocha-wavelet` | [`wavelet`] | Morlet filter bank and wavelet transform |
//! | `epocha-randomize` | [`randomize`] | shift, jitter and resample surrogates |
//! | `epocha-stats` | [`stats`] | descriptive statistics |
//!
//! Host applications can load an [`config::AnalysisConfig`] from TOML, turn
//! its sections into crate configs with [`convert`], and route the crates'
//! `tracing` output through [`logging::init`].
//!
//! ```
//! use epocha::{IntervalSet, Ts, ShiftConfig, shift_timestamps};
//!
//! let spikes = Ts::new(vec![0.1, 0.4, 2.2, 3.9, 4.0]).unwrap();
//! let ep = IntervalSet::single(0.0, 3.0).unwrap();
//! let early = spikes.restrict(&ep);
//! assert_eq!(early.len(), 3);
//!
//! let mut rng = epocha::convert::build_rng(Some(1));
//! let shifted = shift_timestamps(&early, &ShiftConfig::new(), &mut rng).unwrap();
//! assert_eq!(shifted.time_support(), early.time_support());
//! ```

pub mod config;
pub mod convert;
pub mod logging;

pub use epocha_intervals as intervals;
pub use epocha_randomize as randomize;
pub use epocha_series as series;
pub use epocha_spectral as spectral;
pub use epocha_stats as stats;
pub use epocha_wavelet as wavelet;

pub use epocha_intervals::{Interval, IntervalError, IntervalSet, SupportClock};
pub use epocha_randomize::{
    JitterConfig, RandomizeError, ShiftConfig, Surrogate, jitter_timestamps, resample_timestamps,
    shift_timestamps,
};
pub use epocha_series::{
    Series, SeriesError, SupportPolicy, TimeSeries, Ts, TsGroup, Tsd, TsdFrame, TsdTensor,
};
pub use epocha_spectral::{
    PsdConfig, SpectralError, Spectrum, compute_mean_power_spectral_density,
    compute_power_spectral_density,
};
pub use epocha_wavelet::{
    Frequencies, WaveletConfig, WaveletError, WaveletNorm, WaveletTransform,
    compute_wavelet_transform, generate_morlet_filterbank,
};
