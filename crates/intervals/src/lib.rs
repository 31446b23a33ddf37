//! # epocha-intervals
//!
//! Ordered sets of disjoint time intervals: the temporal domain ("time
//! support") over which every epocha container is defined.
//!
//! ## Operations
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`IntervalSet::intersect`] | epochs covered by both sets |
//! | [`IntervalSet::set_diff`] | epochs of `self` minus any overlap with `other` |
//! | [`IntervalSet::union`] | epochs covered by either set |
//! | [`IntervalSet::find_support`] | maximal runs of a validity mask |
//! | [`IntervalSet::split`] | consecutive fixed-duration windows |
//!
//! Every operation returns a new set that is sorted, with `start <= end`
//! and no overlaps. Empty results are empty sets, never errors.
//!
//! ## Quick Start
//!
//! ```
//! use epocha_intervals::IntervalSet;
//!
//! let wake = IntervalSet::new(&[0.0], &[100.0]).unwrap();
//! let run = IntervalSet::new(&[10.0, 50.0], &[20.0, 70.0]).unwrap();
//! let rest = wake.set_diff(&run);
//! assert_eq!(rest.len(), 3);
//! assert_eq!(rest.tot_length(), 70.0);
//! ```

mod error;
mod interval_set;
mod support;

pub use error::IntervalError;
pub use interval_set::{Interval, IntervalSet};
pub use support::SupportClock;
