//! Point process: timestamps restricted to a time support.

use std::sync::Arc;

use epocha_intervals::IntervalSet;
use tracing::debug;

use crate::error::SeriesError;
use crate::index::{default_support, row_range, rows_within, validate_times};

/// A validated sequence of event timestamps with its time support.
///
/// Guarantees:
/// - every timestamp is finite
/// - timestamps are non-decreasing
/// - every timestamp lies within the time support
///
/// The support is held behind an [`Arc`] so that derived series and group
/// members can share it without copying. It is never mutated.
///
/// # Example
///
/// ```ignore
/// use epocha_series::Ts;
///
/// let spikes = Ts::new(vec![0.1, 0.4, 2.5])?;
/// assert_eq!(spikes.len(), 3);
/// assert_eq!(spikes.time_support().tot_length(), 2.4);
/// ```
#[derive(Clone, Debug)]
pub struct Ts {
    times: Vec<f64>,
    support: Arc<IntervalSet>,
}

impl Ts {
    /// Creates a point process whose support spans `[first, last]`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::NonFiniteTimestamp`] | any timestamp is NaN or infinite |
    /// | [`SeriesError::UnsortedTimestamps`] | timestamps decrease |
    pub fn new(times: Vec<f64>) -> Result<Self, SeriesError> {
        validate_times(&times)?;
        let support = Arc::new(default_support(&times));
        Ok(Self { times, support })
    }

    /// Creates a point process on an explicit support.
    ///
    /// Timestamps outside `support` are dropped.
    ///
    /// # Errors
    ///
    /// Same as [`Ts::new`].
    pub fn with_support(
        times: Vec<f64>,
        support: impl Into<Arc<IntervalSet>>,
    ) -> Result<Self, SeriesError> {
        validate_times(&times)?;
        Ok(Self::restricted_to(&times, support.into()))
    }

    /// Wraps already-validated timestamps that lie within `support`.
    pub(crate) fn from_parts(times: Vec<f64>, support: Arc<IntervalSet>) -> Self {
        Self { times, support }
    }

    /// Keeps the timestamps of already-validated `times` inside `support`.
    pub(crate) fn restricted_to(times: &[f64], support: Arc<IntervalSet>) -> Self {
        let rows = rows_within(times, &support);
        let dropped = times.len() - rows.len();
        if dropped > 0 {
            debug!(dropped, "timestamps outside time support dropped");
        }
        Self {
            times: rows.into_iter().map(|i| times[i]).collect(),
            support,
        }
    }

    /// Returns the timestamps.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the shared time support.
    pub fn time_support(&self) -> &Arc<IntervalSet> {
        &self.support
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if there is no event.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First timestamp, if any.
    pub fn start_time(&self) -> Option<f64> {
        self.times.first().copied()
    }

    /// Last timestamp, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Events per unit of support time.
    ///
    /// Not finite when the support has zero length.
    pub fn rate(&self) -> f64 {
        self.times.len() as f64 / self.support.tot_length()
    }

    /// Keeps only the events within `ep`.
    ///
    /// The new support is the intersection of the current support and `ep`.
    pub fn restrict(&self, ep: &IntervalSet) -> Ts {
        let support = Arc::new(self.support.intersect(ep));
        Self::restricted_to(&self.times, support)
    }

    /// Events with `start <= t <= end`, on the unchanged support.
    pub fn get(&self, start: f64, end: f64) -> Ts {
        let range = row_range(&self.times, start, end);
        Self {
            times: self.times[range].to_vec(),
            support: Arc::clone(&self.support),
        }
    }
}

impl AsRef<[f64]> for Ts {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}
