//! Centre frequencies of the wavelet filter bank.

use crate::error::WaveletError;

/// Centre frequencies in Hz, in the order given.
///
/// Every entry is a positive finite number and the list is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Frequencies(Vec<f64>);

impl Frequencies {
    /// Uses the given frequencies as they are.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::EmptyFrequencies`] | `freqs` is empty |
    /// | [`WaveletError::InvalidFrequency`] | an entry is not positive and finite |
    pub fn explicit(freqs: Vec<f64>) -> Result<Self, WaveletError> {
        if freqs.is_empty() {
            return Err(WaveletError::EmptyFrequencies);
        }
        if let Some(&bad) = freqs.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
            return Err(WaveletError::InvalidFrequency(bad));
        }
        Ok(Self(freqs))
    }

    /// `start, start + step, ...` up to and including `stop`.
    ///
    /// `range(1.0, 51.0, 10.0)` gives `[1, 11, 21, 31, 41, 51]`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidRange`] for a non-positive step or
    /// `stop < start`, and the errors of [`Frequencies::explicit`].
    pub fn range(start: f64, stop: f64, step: f64) -> Result<Self, WaveletError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(WaveletError::InvalidRange(format!("step must be positive, got {step}")));
        }
        if stop < start {
            return Err(WaveletError::InvalidRange(format!(
                "stop {stop} is below start {start}"
            )));
        }
        let count = ((stop - start) / step + 1e-9).floor() as usize + 1;
        Self::explicit((0..count).map(|i| start + i as f64 * step).collect())
    }

    /// `count` evenly spaced frequencies from `start` to `stop` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidRange`] for a zero count, and the
    /// errors of [`Frequencies::explicit`].
    pub fn linear(start: f64, stop: f64, count: usize) -> Result<Self, WaveletError> {
        match count {
            0 => Err(WaveletError::InvalidRange("count must be at least 1".to_string())),
            1 => Self::explicit(vec![start]),
            _ => {
                let step = (stop - start) / (count - 1) as f64;
                Self::explicit((0..count).map(|i| start + i as f64 * step).collect())
            }
        }
    }

    /// `count` log-spaced frequencies from `start` to `stop` inclusive.
    ///
    /// # Errors
    ///
    /// Same as [`Frequencies::linear`]; both bounds must be positive.
    pub fn geometric(start: f64, stop: f64, count: usize) -> Result<Self, WaveletError> {
        for bound in [start, stop] {
            if !(bound.is_finite() && bound > 0.0) {
                return Err(WaveletError::InvalidFrequency(bound));
            }
        }
        if count == 0 {
            return Err(WaveletError::InvalidRange("count must be at least 1".to_string()));
        }
        let (lo, hi) = (start.ln(), stop.ln());
        let step = if count > 1 { (hi - lo) / (count - 1) as f64 } else { 0.0 };
        Self::explicit((0..count).map(|i| (lo + i as f64 * step).exp()).collect())
    }

    /// Returns the frequencies.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of frequencies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there is no frequency.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
