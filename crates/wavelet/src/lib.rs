//! # epocha-wavelet
//!
//! Complex Morlet wavelet transform of interval-restricted signals.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Tsd / TsdFrame / TsdTensor"] -->|"to_frame()"| B["time × channels"]
//!     B -->|"split by time support"| C["epoch blocks"]
//!     C -->|"FFT convolution (rayon)"| D["time × freq × channels"]
//!     D -->|"reshape"| E["WaveletTransform"]
//! ```
//!
//! Every contiguous epoch is convolved separately, so a burst at the end of
//! one epoch never leaks into the next.
//!
//! ## Quick Start
//!
//! ```ignore
//! use epocha_wavelet::{Frequencies, WaveletConfig, compute_wavelet_transform};
//!
//! let freqs = Frequencies::linear(10.0, 100.0, 10)?;
//! let mwt = compute_wavelet_transform(&lfp, &freqs, &WaveletConfig::new())?;
//! assert_eq!(mwt.shape(), &[lfp.len(), 10]);
//! ```

mod config;
mod error;
mod frequencies;
mod morlet;
mod transform;

pub use config::{WaveletConfig, WaveletNorm};
pub use error::WaveletError;
pub use frequencies::Frequencies;
pub use morlet::generate_morlet_filterbank;
pub use transform::{WaveletSignal, WaveletTransform, compute_wavelet_transform};
