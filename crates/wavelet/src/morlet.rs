//! Complex Morlet filter bank.

use std::f64::consts::PI;

use ndarray::Array1;
use num_complex::Complex64;

use crate::config::WaveletConfig;
use crate::error::WaveletError;
use crate::frequencies::Frequencies;

/// Half-width of the mother wavelet in dimensionless time.
const MORLET_SUPPORT: f64 = 8.0;

/// Samples one Morlet kernel per centre frequency.
///
/// The kernel for frequency `f` is
/// `(π·gw)^(-1/4) · exp(-x²/gw) · exp(i·2π·wl·x)` with `x = t·f/wl`, sampled
/// at `t = k/fs` for `|x| <= 8`, so it has `2·floor(8·wl·fs/f) + 1` taps
/// centred on tap `floor(8·wl·fs/f)`. The configured norm is already applied.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidGaussianWidth`] | `gaussian_width <= 0` |
/// | [`WaveletError::InvalidWindowLength`] | `window_length <= 0` |
/// | [`WaveletError::InvalidSamplingRate`] | `fs` is not positive and finite |
pub fn generate_morlet_filterbank(
    freqs: &Frequencies,
    fs: f64,
    config: &WaveletConfig,
) -> Result<Vec<Array1<Complex64>>, WaveletError> {
    config.validate()?;
    check_sampling_rate(fs)?;
    Ok(freqs
        .as_slice()
        .iter()
        .map(|&freq| Array1::from(morlet_kernel(freq, fs, config)))
        .collect())
}

pub(crate) fn check_sampling_rate(fs: f64) -> Result<(), WaveletError> {
    if fs.is_finite() && fs > 0.0 {
        Ok(())
    } else {
        Err(WaveletError::InvalidSamplingRate(fs))
    }
}

pub(crate) fn morlet_kernel(freq: f64, fs: f64, config: &WaveletConfig) -> Vec<Complex64> {
    let gw = config.gaussian_width();
    let wl = config.window_length();
    let half = (MORLET_SUPPORT * wl * fs / freq).floor() as usize;
    let amplitude = (PI * gw).powf(-0.25)
        / config.norm().map_or(1.0, |norm| norm.divisor(freq, fs));

    (0..=2 * half)
        .map(|tap| {
            let t = (tap as f64 - half as f64) / fs;
            let x = t * freq / wl;
            Complex64::from_polar(amplitude * (-x * x / gw).exp(), 2.0 * PI * wl * x)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaveletNorm;
    use approx::assert_relative_eq;

    #[test]
    fn kernel_length_and_centre() {
        let config = WaveletConfig::new().with_norm(None);
        let kernel = morlet_kernel(10.0, 1000.0, &config);
        assert_eq!(kernel.len(), 1601);
        let peak = (PI * 1.5_f64).powf(-0.25);
        assert_relative_eq!(kernel[800].re, peak, epsilon = 1e-12);
        assert_relative_eq!(kernel[800].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn kernel_is_hermitian_symmetric() {
        let kernel = morlet_kernel(25.0, 500.0, &WaveletConfig::new());
        let n = kernel.len();
        for i in 0..n / 2 {
            let mirrored = kernel[n - 1 - i].conj();
            assert_relative_eq!(kernel[i].re, mirrored.re, epsilon = 1e-12);
            assert_relative_eq!(kernel[i].im, mirrored.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn norms_scale_amplitude_only() {
        let raw = morlet_kernel(40.0, 1000.0, &WaveletConfig::new().with_norm(None));
        let l1 = morlet_kernel(40.0, 1000.0, &WaveletConfig::new());
        let l2 = morlet_kernel(
            40.0,
            1000.0,
            &WaveletConfig::new().with_norm(Some(WaveletNorm::L2)),
        );
        assert_eq!(raw.len(), l1.len());
        for i in [0, 57, 200, raw.len() - 1] {
            assert_relative_eq!(l1[i].re * 25.0, raw[i].re, epsilon = 1e-12);
            assert_relative_eq!(l2[i].im * 1000.0 / 40f64.sqrt(), raw[i].im, epsilon = 1e-12);
        }
    }

    #[test]
    fn filterbank_validates() {
        let freqs = Frequencies::linear(5.0, 50.0, 4).unwrap();
        let bank = generate_morlet_filterbank(&freqs, 250.0, &WaveletConfig::new()).unwrap();
        assert_eq!(bank.len(), 4);
        assert!(bank[0].len() > bank[3].len());

        let err = generate_morlet_filterbank(&freqs, 0.0, &WaveletConfig::new()).unwrap_err();
        assert!(matches!(err, WaveletError::InvalidSamplingRate(_)));
        let err = generate_morlet_filterbank(
            &freqs,
            250.0,
            &WaveletConfig::new().with_gaussian_width(0.0),
        )
        .unwrap_err();
        assert!(matches!(err, WaveletError::InvalidGaussianWidth(_)));
    }
}
