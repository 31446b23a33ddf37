//! Frequency-indexed estimates.

use ndarray::{Array2, Axis, s};
use num_complex::Complex64;

/// Frequency-indexed values, one row per bin and one column per channel.
///
/// Frequencies are sorted ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum<T> {
    freqs: Vec<f64>,
    values: Array2<T>,
}

impl<T> Spectrum<T> {
    pub(crate) fn new(freqs: Vec<f64>, values: Array2<T>) -> Self {
        debug_assert_eq!(freqs.len(), values.nrows());
        Self { freqs, values }
    }

    /// Returns the bin frequencies in Hz.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Returns the `freq × channel` values.
    pub fn values(&self) -> &Array2<T> {
        &self.values
    }

    /// Returns the number of frequency bins.
    pub fn n_freqs(&self) -> usize {
        self.freqs.len()
    }

    /// Returns the number of channels.
    pub fn n_channels(&self) -> usize {
        self.values.ncols()
    }

    /// Consumes the spectrum, returning frequencies and values.
    pub fn into_parts(self) -> (Vec<f64>, Array2<T>) {
        (self.freqs, self.values)
    }
}

impl<T: Clone> Spectrum<T> {
    /// Bins with `lo <= f <= hi`.
    pub fn restrict_frequencies(&self, lo: f64, hi: f64) -> Spectrum<T> {
        let first = self.freqs.partition_point(|&f| f < lo);
        let last = self.freqs.partition_point(|&f| f <= hi).max(first);
        Spectrum {
            freqs: self.freqs[first..last].to_vec(),
            values: self.values.slice(s![first..last, ..]).to_owned(),
        }
    }
}

impl Spectrum<Complex64> {
    /// Absolute value of every bin.
    pub fn magnitude(&self) -> Spectrum<f64> {
        self.map(|c| c.norm())
    }

    /// Squared magnitude of every bin.
    pub fn power(&self) -> Spectrum<f64> {
        self.map(|c| c.norm_sqr())
    }

    fn map(&self, f: impl Fn(&Complex64) -> f64) -> Spectrum<f64> {
        Spectrum {
            freqs: self.freqs.clone(),
            values: self.values.map(f),
        }
    }
}

impl Spectrum<f64> {
    /// Frequency of the largest value in `channel`.
    ///
    /// Returns `None` for an out-of-range channel or an empty spectrum.
    pub fn peak_frequency(&self, channel: usize) -> Option<f64> {
        if channel >= self.n_channels() {
            return None;
        }
        self.values
            .index_axis(Axis(1), channel)
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.freqs[i])
    }
}
