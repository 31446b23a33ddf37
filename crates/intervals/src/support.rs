//! Deriving supports from validity masks, and mapping between absolute time
//! and time elapsed inside a support.

use crate::error::IntervalError;
use crate::interval_set::{Interval, IntervalSet};

impl IntervalSet {
    /// Maximal runs of consecutive `true` entries of `mask`.
    ///
    /// Each run becomes `[times[first], times[last]]`. `times` is expected to
    /// be sorted.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MaskLengthMismatch`] if the slices differ in
    /// length.
    pub fn find_support(times: &[f64], mask: &[bool]) -> Result<IntervalSet, IntervalError> {
        Self::find_support_with_gap(times, mask, f64::INFINITY)
    }

    /// Like [`IntervalSet::find_support`], additionally breaking a run where
    /// two consecutive valid timestamps are more than `min_gap` apart.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`IntervalError::MaskLengthMismatch`] | `times.len() != mask.len()` |
    /// | [`IntervalError::InvalidGap`] | `min_gap` is negative or NaN |
    pub fn find_support_with_gap(
        times: &[f64],
        mask: &[bool],
        min_gap: f64,
    ) -> Result<IntervalSet, IntervalError> {
        if times.len() != mask.len() {
            return Err(IntervalError::MaskLengthMismatch {
                times: times.len(),
                mask: mask.len(),
            });
        }
        if min_gap.is_nan() || min_gap < 0.0 {
            return Err(IntervalError::InvalidGap(min_gap));
        }

        let mut runs: Vec<(f64, f64)> = Vec::new();
        let mut current: Option<(f64, f64)> = None;
        for (&t, &valid) in times.iter().zip(mask) {
            current = match (current, valid) {
                (None, true) => Some((t, t)),
                (Some((start, last)), true) if t - last <= min_gap => Some((start, t)),
                (Some(run), true) => {
                    runs.push(run);
                    Some((t, t))
                }
                (Some(run), false) => {
                    runs.push(run);
                    None
                }
                (None, false) => None,
            };
        }
        runs.extend(current);

        IntervalSet::from_pairs(runs)
    }

    /// Builds a [`SupportClock`] over this set.
    pub fn clock(&self) -> SupportClock<'_> {
        SupportClock::new(self)
    }
}

/// Maps absolute time to time elapsed inside a support, skipping gaps.
///
/// The support `[0, 2] ∪ [5, 6]` has 3 s of support time: absolute `5.5`
/// maps to `2.5`, and back.
#[derive(Clone, Debug)]
pub struct SupportClock<'a> {
    intervals: &'a [Interval],
    /// Support time elapsed at each interval boundary, `len + 1` entries.
    cumulative: Vec<f64>,
}

impl<'a> SupportClock<'a> {
    fn new(set: &'a IntervalSet) -> Self {
        let intervals = set.as_slice();
        let mut cumulative = Vec::with_capacity(intervals.len() + 1);
        cumulative.push(0.0);
        for iv in intervals {
            let last = cumulative[cumulative.len() - 1];
            cumulative.push(last + iv.duration());
        }
        Self {
            intervals,
            cumulative,
        }
    }

    /// Total support time.
    pub fn total(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Support time elapsed at absolute time `t`, or `None` outside the
    /// support.
    pub fn elapsed_at(&self, t: f64) -> Option<f64> {
        let idx = self.intervals.partition_point(|iv| iv.start <= t);
        if idx == 0 {
            return None;
        }
        let iv = self.intervals[idx - 1];
        iv.contains(t)
            .then(|| self.cumulative[idx - 1] + (t - iv.start))
    }

    /// Absolute time at which `elapsed` support time has passed, or `None`
    /// outside `[0, total]`.
    pub fn time_at_elapsed(&self, elapsed: f64) -> Option<f64> {
        if self.intervals.is_empty() || !(0.0..=self.total()).contains(&elapsed) {
            return None;
        }
        let idx = self.cumulative[1..]
            .partition_point(|&c| c < elapsed)
            .min(self.intervals.len() - 1);
        let iv = self.intervals[idx];
        Some((iv.start + (elapsed - self.cumulative[idx])).min(iv.end))
    }
}
