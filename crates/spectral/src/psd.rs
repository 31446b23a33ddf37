//! Single-epoch and epoch-averaged power spectral density.

use ndarray::{Array2, ArrayView2, Axis, s};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use tracing::debug;

use crate::config::PsdConfig;
use crate::error::SpectralError;
use crate::signal::{SignalView, SpectralSignal};
use crate::spectrum::Spectrum;

const PSD_OP: &str = "compute_power_spectral_density";
const MEAN_PSD_OP: &str = "compute_mean_power_spectral_density";

/// Computes the FFT of a signal over one contiguous epoch.
///
/// The epoch is `config.ep()` or, when unset, the signal's time support. It
/// must hold exactly one interval: a single unwindowed transform assumes the
/// samples are contiguous. Bins are labelled like `fftfreq(n, 1 / fs)` and
/// sorted ascending; only non-negative frequencies are kept unless
/// `full_range` is set, giving `n / 2` rows (even `n`) or `n` rows.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SpectralError::UnsupportedSignal`] | a `Series` that is not `Tsd`/`TsdFrame` |
/// | [`SpectralError::EpochNotSingle`] | epoch has zero or several intervals, or spans a support gap |
/// | [`SpectralError::InvalidSamplingRate`] | `fs` is not positive and finite |
/// | [`SpectralError::EmptySignal`] | no sample falls in the epoch |
#[tracing::instrument(
    skip(signal, config),
    fields(full_range = config.full_range(), norm = config.norm())
)]
pub fn compute_power_spectral_density<S>(
    signal: &S,
    config: &PsdConfig,
) -> Result<Spectrum<Complex64>, SpectralError>
where
    S: SpectralSignal + ?Sized,
{
    let view = signal.as_signal(PSD_OP)?;
    let ep = config.ep().unwrap_or_else(|| view.time_support());
    if ep.len() != 1 {
        return Err(SpectralError::EpochNotSingle);
    }
    let fs = sampling_rate(config, &view)?;

    let frame = view.frame_within(ep)?;
    if frame.time_support().len() > 1 {
        return Err(SpectralError::EpochNotSingle);
    }
    let n = frame.len();
    if n == 0 {
        return Err(SpectralError::EmptySignal);
    }
    debug!(n, channels = frame.n_columns(), fs, "transforming epoch");

    let fft = FftPlanner::new().plan_fft_forward(n);
    let bins = transform_columns(frame.values().view(), config.norm(), fft.as_ref());
    let (freqs, order) = sorted_bins(n, fs, config.full_range());
    let values =
        Array2::from_shape_fn((order.len(), bins.ncols()), |(i, j)| bins[[order[i], j]]);
    Ok(Spectrum::new(freqs, values))
}

/// Averages spectra over consecutive windows of `interval_size` seconds.
///
/// The epoch (`config.ep()` or the signal's support) may hold several
/// intervals. Each is split into windows; a window contributes the FFT of
/// its first `round(interval_size * fs)` samples and is discarded when it
/// holds fewer. Magnitudes are averaged across contributing windows, so no
/// transform ever spans a gap.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SpectralError::UnsupportedSignal`] | a `Series` that is not `Tsd`/`TsdFrame` |
/// | [`SpectralError::InvalidIntervalSize`] | `interval_size` is not positive and finite |
/// | [`SpectralError::InvalidSamplingRate`] | `fs` is not positive and finite |
/// | [`SpectralError::NoCompleteWindow`] | no window holds enough samples |
#[tracing::instrument(skip(signal, config), fields(norm = config.norm()))]
pub fn compute_mean_power_spectral_density<S>(
    signal: &S,
    interval_size: f64,
    config: &PsdConfig,
) -> Result<Spectrum<f64>, SpectralError>
where
    S: SpectralSignal + ?Sized,
{
    let view = signal.as_signal(MEAN_PSD_OP)?;
    if !(interval_size.is_finite() && interval_size > 0.0) {
        return Err(SpectralError::InvalidIntervalSize(interval_size));
    }
    let ep = config.ep().unwrap_or_else(|| view.time_support());
    let fs = sampling_rate(config, &view)?;

    let samples = (interval_size * fs).round() as usize;
    let no_window = SpectralError::NoCompleteWindow {
        interval_size,
        samples,
    };
    if samples == 0 {
        return Err(no_window);
    }

    let frame = view.frame_within(ep)?;
    let windows = ep.split(interval_size)?;
    let fft = FftPlanner::new().plan_fft_forward(samples);

    let mut sum = Array2::<f64>::zeros((samples, frame.n_columns()));
    let mut used = 0usize;
    for window in windows.iter() {
        let rows = frame.row_range(window.start, window.end);
        if rows.len() < samples {
            continue;
        }
        let block = frame.values().slice(s![rows.start..rows.start + samples, ..]);
        let bins = transform_columns(block, config.norm(), fft.as_ref());
        sum.zip_mut_with(&bins, |acc, c| *acc += c.norm());
        used += 1;
    }
    debug!(
        windows = windows.len(),
        used,
        discarded = windows.len() - used,
        samples,
        "averaged epoch windows"
    );
    if used == 0 {
        return Err(no_window);
    }

    let (freqs, order) = sorted_bins(samples, fs, config.full_range());
    let scale = 1.0 / used as f64;
    let values = Array2::from_shape_fn((order.len(), sum.ncols()), |(i, j)| {
        sum[[order[i], j]] * scale
    });
    Ok(Spectrum::new(freqs, values))
}

/// Explicit rate, or the signal's own.
fn sampling_rate(config: &PsdConfig, view: &SignalView<'_>) -> Result<f64, SpectralError> {
    let fs = config.fs().unwrap_or_else(|| view.rate());
    if fs.is_finite() && fs > 0.0 {
        Ok(fs)
    } else {
        Err(SpectralError::InvalidSamplingRate(fs))
    }
}

/// FFT of every column, optionally z-scored first. Bins in FFT order.
fn transform_columns(
    block: ArrayView2<'_, f64>,
    norm: bool,
    fft: &dyn Fft<f64>,
) -> Array2<Complex64> {
    let mut out = Array2::<Complex64>::zeros(block.dim());
    for (column, mut target) in block.axis_iter(Axis(1)).zip(out.axis_iter_mut(Axis(1))) {
        let samples: Vec<f64> = if norm {
            epocha_stats::standardize(&column.to_vec())
        } else {
            column.to_vec()
        };
        let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        fft.process(&mut buffer);
        for (dst, src) in target.iter_mut().zip(buffer) {
            *dst = src;
        }
    }
    out
}

/// Bin frequencies sorted ascending, with the FFT-order index of each.
///
/// Bin `k` sits at `k * fs / n` for `k <= (n - 1) / 2` and at
/// `(k - n) * fs / n` above.
fn sorted_bins(n: usize, fs: f64, full_range: bool) -> (Vec<f64>, Vec<usize>) {
    let half = (n - 1) / 2;
    let df = fs / n as f64;
    let order: Vec<usize> = if full_range {
        (half + 1..n).chain(0..=half).collect()
    } else {
        (0..=half).collect()
    };
    let freqs = order
        .iter()
        .map(|&k| {
            if k <= half {
                k as f64 * df
            } else {
                (k as f64 - n as f64) * df
            }
        })
        .collect();
    (freqs, order)
}
