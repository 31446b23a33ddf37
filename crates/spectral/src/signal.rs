//! Containers accepted by the spectral estimators.

use epocha_intervals::IntervalSet;
use epocha_series::{Series, Tsd, TsdFrame};

use crate::error::SpectralError;

/// Borrowed signal the estimators can work on.
#[derive(Clone, Copy, Debug)]
pub enum SignalView<'a> {
    /// Single channel.
    Tsd(&'a Tsd),
    /// Channels as columns.
    Frame(&'a TsdFrame),
}

impl SignalView<'_> {
    /// Time support of the underlying signal.
    pub fn time_support(&self) -> &IntervalSet {
        match self {
            SignalView::Tsd(tsd) => tsd.time_support().as_ref(),
            SignalView::Frame(frame) => frame.time_support().as_ref(),
        }
    }

    /// Samples per second over the signal's support.
    pub fn rate(&self) -> f64 {
        match self {
            SignalView::Tsd(tsd) => tsd.rate(),
            SignalView::Frame(frame) => frame.rate(),
        }
    }

    /// The signal restricted to `ep`, one column per channel.
    pub(crate) fn frame_within(&self, ep: &IntervalSet) -> Result<TsdFrame, SpectralError> {
        match self {
            SignalView::Tsd(tsd) => Ok(tsd.restrict(ep).to_frame()?),
            SignalView::Frame(frame) => Ok(frame.restrict(ep)),
        }
    }
}

/// A container the spectral estimators accept.
///
/// Statically typed signals always qualify; a [`Series`] qualifies only when
/// it holds a `Tsd` or a `TsdFrame`.
pub trait SpectralSignal {
    /// Borrows the signal, or names `op` in the type error.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::UnsupportedSignal`] for any other container.
    fn as_signal(&self, op: &'static str) -> Result<SignalView<'_>, SpectralError>;
}

impl SpectralSignal for Tsd {
    fn as_signal(&self, _op: &'static str) -> Result<SignalView<'_>, SpectralError> {
        Ok(SignalView::Tsd(self))
    }
}

impl SpectralSignal for TsdFrame {
    fn as_signal(&self, _op: &'static str) -> Result<SignalView<'_>, SpectralError> {
        Ok(SignalView::Frame(self))
    }
}

impl SpectralSignal for Series {
    fn as_signal(&self, op: &'static str) -> Result<SignalView<'_>, SpectralError> {
        match self {
            Series::Tsd(tsd) => Ok(SignalView::Tsd(tsd)),
            Series::TsdFrame(frame) => Ok(SignalView::Frame(frame)),
            _ => Err(SpectralError::UnsupportedSignal { op }),
        }
    }
}
