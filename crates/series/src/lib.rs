//! # epocha-series
//!
//! Timestamped containers restricted to a time support.
//!
//! | Type | Values per timestamp |
//! |------|----------------------|
//! | [`Ts`] | none (point process) |
//! | [`Tsd`] | one scalar |
//! | [`TsdFrame`] | one row of channels |
//! | [`TsdTensor`] | one N-D tensor |
//! | [`TsGroup`] | keyed point processes on one shared support |
//!
//! Supports are shared through [`std::sync::Arc`]; every operation returns a
//! new container and never modifies its input.
//!
//! ```
//! use epocha_intervals::IntervalSet;
//! use epocha_series::Tsd;
//! use ndarray::Array1;
//!
//! let times: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
//! let tsd = Tsd::new(times, Array1::zeros(100)).unwrap();
//! let ep = IntervalSet::new(&[0.1, 0.5], &[0.2, 0.6]).unwrap();
//! let r = tsd.restrict(&ep);
//! assert_eq!(r.time_support().len(), 2);
//! ```

mod error;
mod group;
mod index;
mod series;
mod time_series;
mod ts;

pub use error::SeriesError;
pub use group::{SupportPolicy, TsGroup};
pub use series::Series;
pub use time_series::{TimeSeries, Tsd, TsdFrame, TsdTensor};
pub use ts::Ts;
