//! Valued time series: timestamps paired with the rows of an N-D array.

use std::ops::Range;
use std::sync::Arc;

use epocha_intervals::IntervalSet;
use ndarray::{Array, ArrayView, Axis, Dimension, Ix1, Ix2, IxDyn, RemoveAxis, Slice};
use tracing::debug;

use crate::error::SeriesError;
use crate::index::{default_support, row_range, rows_within, validate_times};
use crate::ts::Ts;

/// Timestamps plus an array whose first axis is time, on a time support.
///
/// Row `i` of `values` is the sample recorded at `times[i]`. The same
/// invariants as [`Ts`] hold for the timestamps.
#[derive(Clone, Debug)]
pub struct TimeSeries<A, D: Dimension> {
    times: Vec<f64>,
    values: Array<A, D>,
    support: Arc<IntervalSet>,
}

/// One scalar per timestamp.
pub type Tsd = TimeSeries<f64, Ix1>;

/// One row of channels per timestamp.
pub type TsdFrame = TimeSeries<f64, Ix2>;

/// One tensor per timestamp.
pub type TsdTensor = TimeSeries<f64, IxDyn>;

impl<A, D> TimeSeries<A, D>
where
    A: Clone,
    D: Dimension + RemoveAxis,
{
    /// Creates a series whose support spans `[first, last]`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::NonFiniteTimestamp`] | any timestamp is NaN or infinite |
    /// | [`SeriesError::UnsortedTimestamps`] | timestamps decrease |
    /// | [`SeriesError::ZeroDimensional`] | `values` has no axis |
    /// | [`SeriesError::LengthMismatch`] | axis 0 length differs from `times.len()` |
    pub fn new(times: Vec<f64>, values: Array<A, D>) -> Result<Self, SeriesError> {
        validate(&times, &values)?;
        let support = Arc::new(default_support(&times));
        Ok(Self {
            times,
            values,
            support,
        })
    }

    /// Creates a series on an explicit support, dropping rows outside it.
    ///
    /// # Errors
    ///
    /// Same as [`TimeSeries::new`].
    pub fn with_support(
        times: Vec<f64>,
        values: Array<A, D>,
        support: impl Into<Arc<IntervalSet>>,
    ) -> Result<Self, SeriesError> {
        validate(&times, &values)?;
        let support = support.into();
        let rows = rows_within(&times, &support);
        if rows.len() == times.len() {
            return Ok(Self {
                times,
                values,
                support,
            });
        }
        debug!(
            dropped = times.len() - rows.len(),
            "rows outside time support dropped"
        );
        Ok(Self::select(&times, &values, &rows, support))
    }

    fn select(
        times: &[f64],
        values: &Array<A, D>,
        rows: &[usize],
        support: Arc<IntervalSet>,
    ) -> Self {
        Self {
            times: rows.iter().map(|&i| times[i]).collect(),
            values: values.select(Axis(0), rows),
            support,
        }
    }

    /// Returns the timestamps.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the values; axis 0 is time.
    pub fn values(&self) -> &Array<A, D> {
        &self.values
    }

    /// Returns the shared time support.
    pub fn time_support(&self) -> &Arc<IntervalSet> {
        &self.support
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if there is no row.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Full shape of the value array, time first.
    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    /// Number of values per row once non-time axes are flattened.
    pub fn n_columns(&self) -> usize {
        self.values.shape()[1..].iter().product()
    }

    /// Samples per unit of support time.
    pub fn rate(&self) -> f64 {
        self.times.len() as f64 / self.support.tot_length()
    }

    /// Row indices with `start <= t <= end`.
    pub fn row_range(&self, start: f64, end: f64) -> Range<usize> {
        row_range(&self.times, start, end)
    }

    /// Keeps only the rows within `ep`; the new support is the intersection
    /// of the current support and `ep`.
    pub fn restrict(&self, ep: &IntervalSet) -> Self {
        let support = Arc::new(self.support.intersect(ep));
        let rows = rows_within(&self.times, &support);
        Self::select(&self.times, &self.values, &rows, support)
    }

    /// Rows with `start <= t <= end`, on the unchanged support.
    pub fn get(&self, start: f64, end: f64) -> Self {
        let range = self.row_range(start, end);
        Self {
            times: self.times[range.clone()].to_vec(),
            values: self.values.slice_axis(Axis(0), Slice::from(range)).to_owned(),
            support: Arc::clone(&self.support),
        }
    }

    /// Row `i` as a view.
    pub fn row(&self, i: usize) -> Option<ArrayView<'_, A, D::Smaller>> {
        (i < self.len()).then(|| self.values.index_axis(Axis(0), i))
    }

    /// Flattens every non-time axis into columns, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Shape`] if the values cannot be reshaped.
    pub fn to_frame(&self) -> Result<TimeSeries<A, Ix2>, SeriesError> {
        let values = self
            .values
            .to_shape((self.len(), self.n_columns()))?
            .into_owned();
        Ok(TimeSeries {
            times: self.times.clone(),
            values,
            support: Arc::clone(&self.support),
        })
    }

    /// Drops the dimensionality from the type.
    pub fn into_dyn(self) -> TimeSeries<A, IxDyn> {
        TimeSeries {
            times: self.times,
            values: self.values.into_dyn(),
            support: self.support,
        }
    }

    /// The timestamps alone, on the same support.
    pub fn as_ts(&self) -> Ts {
        Ts::from_parts(self.times.clone(), Arc::clone(&self.support))
    }
}

impl<D> TimeSeries<f64, D>
where
    D: Dimension + RemoveAxis,
{
    /// Removes every row containing a NaN.
    ///
    /// With `update_time_support`, the support becomes the runs of valid rows
    /// intersected with the current support.
    ///
    /// # Errors
    ///
    /// Propagates interval errors from deriving the new support.
    pub fn dropna(&self, update_time_support: bool) -> Result<Self, SeriesError> {
        let mask = self.valid_rows();
        let rows: Vec<usize> = (0..mask.len()).filter(|&i| mask[i]).collect();
        let support = if update_time_support {
            let runs = IntervalSet::find_support(&self.times, &mask)?;
            Arc::new(runs.intersect(&self.support))
        } else {
            Arc::clone(&self.support)
        };
        Ok(Self::select(&self.times, &self.values, &rows, support))
    }

    /// Runs of NaN-free rows, broken where consecutive valid rows are more
    /// than `min_gap` apart.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Interval`] if `min_gap` is negative or NaN.
    pub fn find_support(&self, min_gap: f64) -> Result<IntervalSet, SeriesError> {
        Ok(IntervalSet::find_support_with_gap(
            &self.times,
            &self.valid_rows(),
            min_gap,
        )?)
    }

    fn valid_rows(&self) -> Vec<bool> {
        self.values
            .axis_iter(Axis(0))
            .map(|row| row.iter().all(|v| !v.is_nan()))
            .collect()
    }
}

fn validate<A, D: Dimension>(times: &[f64], values: &Array<A, D>) -> Result<(), SeriesError> {
    validate_times(times)?;
    if values.ndim() == 0 {
        return Err(SeriesError::ZeroDimensional);
    }
    let rows = values.len_of(Axis(0));
    if rows != times.len() {
        return Err(SeriesError::LengthMismatch {
            times: times.len(),
            rows,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, ArrayD, array};

    fn ramp(n: usize) -> Tsd {
        let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
        Tsd::new(times, Array1::from_iter((0..n).map(|i| i as f64 * 10.0))).unwrap()
    }

    #[test]
    fn new_checks_rows() {
        let err = Tsd::new(vec![0.0, 1.0], array![1.0]).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::LengthMismatch { times: 2, rows: 1 }
        ));
    }

    #[test]
    fn new_rejects_scalar_tensor() {
        let values = ArrayD::<f64>::zeros(IxDyn(&[]));
        let err = TsdTensor::new(vec![], values).unwrap_err();
        assert!(matches!(err, SeriesError::ZeroDimensional));
    }

    #[test]
    fn with_support_drops_rows() {
        let support = IntervalSet::new(&[0.0, 3.0], &[1.0, 4.0]).unwrap();
        let tsd = Tsd::with_support(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            support,
        )
        .unwrap();
        assert_eq!(tsd.times(), &[0.0, 1.0, 3.0, 4.0]);
        assert_eq!(tsd.values(), &array![0.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn restrict_rows_and_support() {
        let tsd = ramp(10);
        let ep = IntervalSet::new(&[1.5, 6.0], &[3.0, 7.0]).unwrap();
        let r = tsd.restrict(&ep);
        assert_eq!(r.times(), &[2.0, 3.0, 6.0, 7.0]);
        assert_eq!(r.values(), &array![20.0, 30.0, 60.0, 70.0]);
        assert_eq!(**r.time_support(), ep);
        assert_eq!(tsd.len(), 10);
    }

    #[test]
    fn restrict_frame_keeps_columns() {
        let values = Array2::from_shape_fn((5, 3), |(i, j)| (i * 3 + j) as f64);
        let frame = TsdFrame::new((0..5).map(|i| i as f64).collect(), values).unwrap();
        let r = frame.restrict(&IntervalSet::single(1.0, 2.0).unwrap());
        assert_eq!(r.shape(), &[2, 3]);
        assert_eq!(r.values().row(0).to_vec(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn get_slices_rows() {
        let g = ramp(10).get(2.0, 4.5);
        assert_eq!(g.times(), &[2.0, 3.0, 4.0]);
        assert_eq!(g.values(), &array![20.0, 30.0, 40.0]);
        assert_eq!(g.time_support().end_time(), Some(9.0));
    }

    #[test]
    fn to_frame_flattens_tensor() {
        let values = ArrayD::from_shape_fn(IxDyn(&[4, 2, 3]), |ix| {
            (ix[0] * 100 + ix[1] * 10 + ix[2]) as f64
        });
        let tensor = TsdTensor::new(vec![0.0, 1.0, 2.0, 3.0], values).unwrap();
        assert_eq!(tensor.n_columns(), 6);
        let frame = tensor.to_frame().unwrap();
        assert_eq!(frame.shape(), &[4, 6]);
        assert_eq!(frame.values()[[2, 4]], 211.0);
    }

    #[test]
    fn to_frame_of_tsd_is_single_column() {
        let frame = ramp(3).to_frame().unwrap();
        assert_eq!(frame.shape(), &[3, 1]);
    }

    #[test]
    fn dropna_keeps_support_unless_asked() {
        let tsd = Tsd::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            array![1.0, f64::NAN, 2.0, 3.0, f64::NAN],
        )
        .unwrap();
        let kept = tsd.dropna(false).unwrap();
        assert_eq!(kept.times(), &[0.0, 2.0, 3.0]);
        assert_eq!(kept.time_support().len(), 1);

        let updated = tsd.dropna(true).unwrap();
        let expected = IntervalSet::new(&[0.0, 2.0], &[0.0, 3.0]).unwrap();
        assert_eq!(**updated.time_support(), expected);
    }

    #[test]
    fn find_support_breaks_on_gaps() {
        let tsd = Tsd::new(
            vec![0.0, 0.1, 0.2, 5.0, 5.1],
            array![1.0, 1.0, 1.0, 1.0, 1.0],
        )
        .unwrap();
        let support = tsd.find_support(1.0).unwrap();
        assert_eq!(support.len(), 2);
        assert_eq!(support.starts(), vec![0.0, 5.0]);
    }

    #[test]
    fn as_ts_shares_support() {
        let tsd = ramp(4);
        let ts = tsd.as_ts();
        assert_eq!(ts.times(), tsd.times());
        assert!(Arc::ptr_eq(ts.time_support(), tsd.time_support()));
    }

    #[test]
    fn row_view() {
        let tsd = ramp(3);
        assert_eq!(tsd.row(1).map(|r| r.into_scalar()), Some(&10.0));
        assert!(tsd.row(3).is_none());
    }
}
