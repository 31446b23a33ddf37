//! Per-epoch wavelet transform of interval-restricted signals.

use std::ops::Range;
use std::sync::Arc;

use epocha_series::{Series, TimeSeries, TsdFrame};
use ndarray::{Array3, ArrayD, ArrayView2, Dimension, IxDyn, RemoveAxis, s};
use num_complex::Complex64;
use rayon::prelude::*;
use rustfft::FftPlanner;
use tracing::debug;

use crate::config::WaveletConfig;
use crate::error::WaveletError;
use crate::frequencies::Frequencies;
use crate::morlet::{check_sampling_rate, morlet_kernel};

/// A container the wavelet transform accepts.
pub trait WaveletSignal {
    /// Channels flattened to columns, plus the shape of one sample.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::UnsupportedSignal`] for containers without
    /// values.
    fn channels(&self) -> Result<(TsdFrame, Vec<usize>), WaveletError>;
}

impl<D> WaveletSignal for TimeSeries<f64, D>
where
    D: Dimension + RemoveAxis,
{
    fn channels(&self) -> Result<(TsdFrame, Vec<usize>), WaveletError> {
        Ok((self.to_frame()?, self.shape()[1..].to_vec()))
    }
}

impl WaveletSignal for Series {
    fn channels(&self) -> Result<(TsdFrame, Vec<usize>), WaveletError> {
        match self {
            Series::Tsd(tsd) => tsd.channels(),
            Series::TsdFrame(frame) => frame.channels(),
            Series::TsdTensor(tensor) => tensor.channels(),
            other => Err(WaveletError::UnsupportedSignal(other.kind())),
        }
    }
}

/// Time-frequency coefficients aligned with the input timestamps.
#[derive(Clone, Debug)]
pub struct WaveletTransform {
    coefficients: TimeSeries<Complex64, IxDyn>,
    freqs: Vec<f64>,
}

impl WaveletTransform {
    /// Complex coefficients, shaped `time × frequency × sample shape`.
    pub fn coefficients(&self) -> &TimeSeries<Complex64, IxDyn> {
        &self.coefficients
    }

    /// Centre frequency of each column of axis 1.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// Output shape.
    pub fn shape(&self) -> &[usize] {
        self.coefficients.shape()
    }

    /// Absolute value of every coefficient.
    pub fn magnitude(&self) -> ArrayD<f64> {
        self.coefficients.values().mapv(|c| c.norm())
    }
}

/// Convolves every contiguous epoch of the signal with a Morlet filter bank.
///
/// Each interval of the signal's time support is transformed on its own by
/// FFT convolution ("same" alignment), so energy never crosses a gap; results
/// are written back at the epoch's rows. The output keeps the input
/// timestamps and support and has shape `time × frequency × sample shape`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidGaussianWidth`] | `gaussian_width <= 0` |
/// | [`WaveletError::InvalidWindowLength`] | `window_length <= 0` |
/// | [`WaveletError::InvalidSamplingRate`] | `fs` (or the signal rate) is not positive and finite |
/// | [`WaveletError::UnsupportedSignal`] | a `Series` holding no values |
#[tracing::instrument(skip(signal, freqs, config), fields(n_freqs = freqs.len()))]
pub fn compute_wavelet_transform<S>(
    signal: &S,
    freqs: &Frequencies,
    config: &WaveletConfig,
) -> Result<WaveletTransform, WaveletError>
where
    S: WaveletSignal + ?Sized,
{
    config.validate()?;
    let (frame, sample_shape) = signal.channels()?;
    let fs = config.fs().unwrap_or_else(|| frame.rate());
    check_sampling_rate(fs)?;

    let n = frame.len();
    let n_freqs = freqs.len();
    let n_cols = frame.n_columns();
    let kernels: Vec<Vec<Complex64>> = freqs
        .as_slice()
        .iter()
        .map(|&freq| morlet_kernel(freq, fs, config))
        .collect();

    let epochs = epoch_rows(&frame);
    debug!(n, n_cols, epochs = epochs.len(), fs, "convolving epochs");

    let blocks: Vec<(Range<usize>, Array3<Complex64>)> = epochs
        .into_par_iter()
        .map(|rows| {
            let block = frame.values().slice(s![rows.clone(), ..]);
            let coefs = convolve_epoch(block, &kernels);
            (rows, coefs)
        })
        .collect();

    let mut out = Array3::<Complex64>::zeros((n, n_freqs, n_cols));
    for (rows, coefs) in blocks {
        out.slice_mut(s![rows, .., ..]).assign(&coefs);
    }

    let mut shape = vec![n, n_freqs];
    shape.extend(sample_shape);
    let values = out.into_shape_with_order(IxDyn(&shape))?;
    let coefficients = TimeSeries::with_support(
        frame.times().to_vec(),
        values,
        Arc::clone(frame.time_support()),
    )?;
    Ok(WaveletTransform {
        coefficients,
        freqs: freqs.as_slice().to_vec(),
    })
}

/// Row ranges of each support interval, a shared boundary row going to the
/// earlier interval.
fn epoch_rows(frame: &TsdFrame) -> Vec<Range<usize>> {
    let mut epochs = Vec::new();
    let mut floor = 0;
    for iv in frame.time_support().iter() {
        let rows = frame.row_range(iv.start, iv.end);
        let start = rows.start.max(floor);
        if rows.end > start {
            epochs.push(start..rows.end);
            floor = rows.end;
        }
    }
    epochs
}

/// "Same"-aligned convolution of every column with every kernel.
///
/// Returns `rows × kernels × columns`.
fn convolve_epoch(block: ArrayView2<'_, f64>, kernels: &[Vec<Complex64>]) -> Array3<Complex64> {
    let (n, n_cols) = block.dim();
    let mut out = Array3::<Complex64>::zeros((n, kernels.len(), n_cols));
    let mut planner = FftPlanner::new();

    for (k, kernel) in kernels.iter().enumerate() {
        let m = kernel.len();
        let centre = m / 2;
        let nfft = (n + m - 1).next_power_of_two();
        let forward = planner.plan_fft_forward(nfft);
        let inverse = planner.plan_fft_inverse(nfft);

        let mut kernel_fft: Vec<Complex64> = kernel
            .iter()
            .copied()
            .chain(std::iter::repeat_n(Complex64::new(0.0, 0.0), nfft - m))
            .collect();
        forward.process(&mut kernel_fft);

        for c in 0..n_cols {
            let mut buffer: Vec<Complex64> = block
                .column(c)
                .iter()
                .map(|&x| Complex64::new(x, 0.0))
                .chain(std::iter::repeat_n(Complex64::new(0.0, 0.0), nfft - n))
                .collect();
            forward.process(&mut buffer);
            for (b, h) in buffer.iter_mut().zip(&kernel_fft) {
                *b *= *h;
            }
            inverse.process(&mut buffer);

            // rustfft is unnormalised
            let scale = 1.0 / nfft as f64;
            for (i, value) in buffer[centre..centre + n].iter().enumerate() {
                out[[i, k, c]] = *value * scale;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use epocha_intervals::IntervalSet;
    use ndarray::{Array1, Array2};

    /// Direct "same" convolution for cross-checking.
    fn direct_same(signal: &[f64], kernel: &[Complex64]) -> Vec<Complex64> {
        let centre = kernel.len() / 2;
        (0..signal.len())
            .map(|i| {
                let mut acc = Complex64::new(0.0, 0.0);
                for (j, h) in kernel.iter().enumerate() {
                    let idx = i as isize + centre as isize - j as isize;
                    if idx >= 0 && (idx as usize) < signal.len() {
                        acc += *h * signal[idx as usize];
                    }
                }
                acc
            })
            .collect()
    }

    #[test]
    fn fft_convolution_matches_direct() {
        let signal: Vec<f64> = (0..50).map(|i| ((i * 7) % 11) as f64 - 5.0).collect();
        let kernel: Vec<Complex64> = (0..9)
            .map(|j| Complex64::new(j as f64 * 0.3 - 1.0, (j % 3) as f64))
            .collect();
        let block = Array2::from_shape_vec((50, 1), signal.clone()).unwrap();
        let out = convolve_epoch(block.view(), &[kernel.clone()]);
        let expected = direct_same(&signal, &kernel);
        for i in 0..50 {
            assert_relative_eq!(out[[i, 0, 0]].re, expected[i].re, epsilon = 1e-9);
            assert_relative_eq!(out[[i, 0, 0]].im, expected[i].im, epsilon = 1e-9);
        }
    }

    #[test]
    fn kernel_longer_than_epoch() {
        let signal = vec![1.0, 2.0, 3.0];
        let kernel: Vec<Complex64> = (0..11).map(|j| Complex64::new(j as f64, 0.0)).collect();
        let block = Array2::from_shape_vec((3, 1), signal.clone()).unwrap();
        let out = convolve_epoch(block.view(), &[kernel.clone()]);
        let expected = direct_same(&signal, &kernel);
        for i in 0..3 {
            assert_relative_eq!(out[[i, 0, 0]].re, expected[i].re, epsilon = 1e-9);
        }
    }

    #[test]
    fn epoch_rows_follow_support() {
        let times: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let support = IntervalSet::new(&[0.0, 5.0], &[3.0, 9.0]).unwrap();
        let frame = TsdFrame::with_support(times, Array2::zeros((10, 1)), support).unwrap();
        assert_eq!(epoch_rows(&frame), vec![0..4, 4..9]);
    }

    #[test]
    fn point_interval_does_not_split_an_epoch() {
        let times: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let support = IntervalSet::single(0.0, 0.0)
            .unwrap()
            .union(&IntervalSet::single(0.0, 9.0).unwrap());
        let frame = TsdFrame::with_support(times, Array2::zeros((10, 1)), support).unwrap();
        assert_eq!(epoch_rows(&frame), vec![0..10]);
    }

    #[test]
    fn empty_signal() {
        let tsd = epocha_series::Tsd::new(vec![], Array1::zeros(0)).unwrap();
        let freqs = Frequencies::explicit(vec![10.0]).unwrap();
        let config = WaveletConfig::new().with_fs(100.0);
        let out = compute_wavelet_transform(&tsd, &freqs, &config).unwrap();
        assert_eq!(out.shape(), &[0, 1]);
    }
}
