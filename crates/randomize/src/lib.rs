//! # epocha-randomize
//!
//! Surrogate point processes for significance testing.
//!
//! - [`shift_timestamps`]: circular rotation within the time support
//! - [`jitter_timestamps`]: independent per-timestamp perturbation
//! - [`resample_timestamps`]: uniform redraw over the support
//!
//! All three accept [`Ts`](epocha_series::Ts),
//! [`TsGroup`](epocha_series::TsGroup) or a dynamically typed
//! [`Series`](epocha_series::Series) and take the random generator as an
//! argument, so a seeded generator reproduces the same surrogate. Group
//! members are processed in parallel.
//!
//! ```
//! use epocha_randomize::{ShiftConfig, shift_timestamps};
//! use epocha_series::Ts;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let ts = Ts::new(vec![0.0, 1.5, 2.0, 4.0, 10.0]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let shifted = shift_timestamps(&ts, &ShiftConfig::new(), &mut rng).unwrap();
//! assert_eq!(shifted.len(), ts.len());
//! assert_eq!(shifted.time_support(), ts.time_support());
//! ```

mod config;
mod error;
mod surrogate;

pub use config::{JitterConfig, ShiftConfig};
pub use error::RandomizeError;
pub use surrogate::{Surrogate, jitter_timestamps, resample_timestamps, shift_timestamps};
