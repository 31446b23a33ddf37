//! Ordered set of disjoint time intervals.

use std::cmp::Ordering;

use crate::error::IntervalError;

/// A single closed epoch `[start, end]`, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Start bound.
    pub start: f64,
    /// End bound, never smaller than `start`.
    pub end: f64,
}

impl Interval {
    /// Length of the epoch.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if `t` lies within `[start, end]`.
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }
}

/// An ordered, non-overlapping set of epochs.
///
/// Guarantees:
/// - every interval has `start <= end`
/// - intervals are sorted ascending by start
/// - no two intervals overlap (they may touch: `end_i == start_{i+1}`)
///
/// Membership is closed on both ends, so the support `[min, max]` of a
/// series contains its own first and last timestamps.
///
/// # Example
///
/// ```ignore
/// use epocha_intervals::IntervalSet;
///
/// let wake = IntervalSet::new(&[0.0, 10.0], &[5.0, 20.0])?;
/// let run = IntervalSet::single(3.0, 12.0)?;
/// let rest = wake.set_diff(&run);
/// assert_eq!(rest.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Creates a set from parallel start/end bounds, sorting and merging
    /// overlapping intervals.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`IntervalError::LengthMismatch`] | `starts.len() != ends.len()` |
    /// | [`IntervalError::NonFiniteBound`] | any bound is NaN or infinite |
    /// | [`IntervalError::StartAfterEnd`] | any `start > end` |
    pub fn new(starts: &[f64], ends: &[f64]) -> Result<Self, IntervalError> {
        if starts.len() != ends.len() {
            return Err(IntervalError::LengthMismatch {
                starts: starts.len(),
                ends: ends.len(),
            });
        }
        Self::from_pairs(starts.iter().copied().zip(ends.iter().copied()))
    }

    /// Creates a set from `(start, end)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`IntervalSet::new`], minus the length check.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, IntervalError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut intervals = Vec::new();
        for (index, (start, end)) in pairs.into_iter().enumerate() {
            if !start.is_finite() || !end.is_finite() {
                return Err(IntervalError::NonFiniteBound { start, end });
            }
            if start > end {
                return Err(IntervalError::StartAfterEnd { index, start, end });
            }
            intervals.push(Interval { start, end });
        }
        Ok(Self::normalized(intervals))
    }

    /// Creates a set holding one epoch.
    ///
    /// # Errors
    ///
    /// Same as [`IntervalSet::new`].
    pub fn single(start: f64, end: f64) -> Result<Self, IntervalError> {
        Self::from_pairs([(start, end)])
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sorts and merges already-validated intervals.
    pub(crate) fn normalized(mut intervals: Vec<Interval>) -> Self {
        intervals.sort_by(|a, b| {
            a.start
                .total_cmp(&b.start)
                .then_with(|| a.end.total_cmp(&b.end))
        });

        // Touching intervals stay apart unless one of them is a single point.
        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for iv in intervals {
            match merged.last_mut() {
                Some(last)
                    if iv.start < last.end
                        || (iv.start <= last.end
                            && (iv.duration() == 0.0 || last.duration() == 0.0)) =>
                {
                    last.end = last.end.max(iv.end);
                }
                _ => merged.push(iv),
            }
        }
        Self { intervals: merged }
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set holds no interval.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the interval at position `index`.
    pub fn get(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    /// Iterates over the intervals in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    /// Returns the intervals as a slice.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Start bounds, in order.
    pub fn starts(&self) -> Vec<f64> {
        self.intervals.iter().map(|iv| iv.start).collect()
    }

    /// End bounds, in order.
    pub fn ends(&self) -> Vec<f64> {
        self.intervals.iter().map(|iv| iv.end).collect()
    }

    /// Start of the first interval, if any.
    pub fn start_time(&self) -> Option<f64> {
        self.intervals.first().map(|iv| iv.start)
    }

    /// End of the last interval, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.intervals.last().map(|iv| iv.end)
    }

    /// Sum of all interval durations.
    pub fn tot_length(&self) -> f64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// Position of the interval containing `t`.
    ///
    /// When `t` sits on a boundary shared by two touching intervals, the
    /// later one is returned.
    pub fn find(&self, t: f64) -> Option<usize> {
        let idx = self.intervals.partition_point(|iv| iv.start <= t);
        if idx == 0 {
            return None;
        }
        let candidate = idx - 1;
        self.intervals[candidate].contains(t).then_some(candidate)
    }

    /// Returns `true` if `t` lies within some interval.
    pub fn contains(&self, t: f64) -> bool {
        self.find(t).is_some()
    }

    /// Intervals common to `self` and `other`.
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        let (a, b) = (&self.intervals, &other.intervals);
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            let lo = a[i].start.max(b[j].start);
            let hi = a[i].end.min(b[j].end);
            let degenerate = a[i].duration() == 0.0 || b[j].duration() == 0.0;
            if lo < hi || (lo == hi && degenerate) {
                out.push(Interval { start: lo, end: hi });
            }
            match a[i].end.total_cmp(&b[j].end) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        Self::normalized(out)
    }

    /// Intervals of `self` with every overlap with `other` removed.
    ///
    /// Intervals are split where `other` cuts through them.
    pub fn set_diff(&self, other: &IntervalSet) -> IntervalSet {
        let b = &other.intervals;
        let mut out = Vec::new();
        let mut j = 0;

        for a in &self.intervals {
            if a.duration() == 0.0 {
                if !other.contains(a.start) {
                    out.push(*a);
                }
                continue;
            }
            while j < b.len() && b[j].end <= a.start {
                j += 1;
            }
            let mut cursor = a.start;
            let mut k = j;
            while k < b.len() && b[k].start < a.end {
                if b[k].start > cursor {
                    out.push(Interval {
                        start: cursor,
                        end: b[k].start,
                    });
                }
                cursor = cursor.max(b[k].end);
                k += 1;
            }
            if cursor < a.end {
                out.push(Interval {
                    start: cursor,
                    end: a.end,
                });
            }
        }
        Self::normalized(out)
    }

    /// Intervals covered by `self` or `other`, merged.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut all = self.intervals.clone();
        all.extend_from_slice(&other.intervals);
        Self::normalized(all)
    }

    /// Cuts every interval into consecutive windows of `interval_size`.
    ///
    /// The trailing remainder of each interval is kept as a shorter window.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidSize`] if `interval_size` is not a
    /// positive finite number.
    pub fn split(&self, interval_size: f64) -> Result<IntervalSet, IntervalError> {
        if !(interval_size.is_finite() && interval_size > 0.0) {
            return Err(IntervalError::InvalidSize(interval_size));
        }
        // Absorbs `0.3 / 0.1 = 2.999...` style rounding.
        let tol = 1e-9;
        let mut out = Vec::new();
        for iv in &self.intervals {
            let n_full = (iv.duration() / interval_size + tol).floor() as usize;
            for k in 0..n_full {
                let start = iv.start + k as f64 * interval_size;
                let end = (iv.start + (k + 1) as f64 * interval_size).min(iv.end);
                out.push(Interval { start, end });
            }
            let covered = iv.start + n_full as f64 * interval_size;
            if iv.end - covered > tol * interval_size {
                out.push(Interval {
                    start: covered,
                    end: iv.end,
                });
            }
        }
        Ok(Self { intervals: out })
    }

    /// Keeps only intervals longer than `threshold`.
    pub fn drop_short_intervals(&self, threshold: f64) -> IntervalSet {
        Self {
            intervals: self
                .intervals
                .iter()
                .filter(|iv| iv.duration() > threshold)
                .copied()
                .collect(),
        }
    }

    /// Merges consecutive intervals separated by a gap smaller than
    /// `threshold`.
    pub fn merge_close_intervals(&self, threshold: f64) -> IntervalSet {
        let mut merged: Vec<Interval> = Vec::with_capacity(self.intervals.len());
        for &iv in &self.intervals {
            match merged.last_mut() {
                Some(last) if iv.start - last.end < threshold => last.end = iv.end,
                _ => merged.push(iv),
            }
        }
        Self { intervals: merged }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
