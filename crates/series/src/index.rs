//! Timestamp validation and binary-search row selection.

use std::ops::Range;

use epocha_intervals::IntervalSet;

use crate::error::SeriesError;

/// Checks that timestamps are finite and non-decreasing.
pub(crate) fn validate_times(times: &[f64]) -> Result<(), SeriesError> {
    if let Some(index) = times.iter().position(|t| !t.is_finite()) {
        return Err(SeriesError::NonFiniteTimestamp { index });
    }
    if let Some(index) = times.windows(2).position(|w| w[1] < w[0]) {
        return Err(SeriesError::UnsortedTimestamps { index: index + 1 });
    }
    Ok(())
}

/// Support spanning `[first, last]`, or the empty set.
pub(crate) fn default_support(times: &[f64]) -> IntervalSet {
    match (times.first(), times.last()) {
        (Some(&first), Some(&last)) => IntervalSet::from_pairs([(first, last)])
            .unwrap_or_else(|_| IntervalSet::empty()),
        _ => IntervalSet::empty(),
    }
}

/// Rows with `start <= t <= end`.
pub(crate) fn row_range(times: &[f64], start: f64, end: f64) -> Range<usize> {
    let lo = times.partition_point(|&t| t < start);
    let hi = times.partition_point(|&t| t <= end).max(lo);
    lo..hi
}

/// Rows falling inside any interval of `support`, in time order.
///
/// One binary search pair per interval; a row sitting on a boundary shared
/// by two touching intervals is emitted once.
pub(crate) fn rows_within(times: &[f64], support: &IntervalSet) -> Vec<usize> {
    let mut rows = Vec::new();
    let mut floor = 0;
    for iv in support.iter() {
        let range = row_range(times, iv.start, iv.end);
        let lo = range.start.max(floor);
        if range.end > lo {
            rows.extend(lo..range.end);
            floor = range.end;
        }
    }
    rows
}
