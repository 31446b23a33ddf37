//! # epocha-spectral
//!
//! Power spectral density of interval-restricted signals.
//!
//! - [`compute_power_spectral_density`]: one FFT over a single contiguous
//!   epoch. Multi-interval epochs are rejected.
//! - [`compute_mean_power_spectral_density`]: magnitudes averaged over
//!   fixed-duration windows cut inside every interval of the epoch, for
//!   comparing spectral content of non-contiguous epochs.
//!
//! Both accept a [`Tsd`](epocha_series::Tsd), a
//! [`TsdFrame`](epocha_series::TsdFrame) or a dynamically typed
//! [`Series`](epocha_series::Series) holding one of them.

mod config;
mod error;
mod psd;
mod signal;
mod spectrum;

pub use config::PsdConfig;
pub use error::SpectralError;
pub use psd::{compute_mean_power_spectral_density, compute_power_spectral_density};
pub use signal::{SignalView, SpectralSignal};
pub use spectrum::Spectrum;
