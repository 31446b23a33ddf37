//! Shift, jitter and resample surrogates for point processes.

use std::collections::BTreeMap;
use std::sync::Arc;

use epocha_intervals::IntervalSet;
use epocha_series::{Series, SupportPolicy, Ts, TsGroup};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::config::{JitterConfig, ShiftConfig};
use crate::error::RandomizeError;

/// A point-process container that surrogate data can be generated from.
///
/// Implemented for [`Ts`], [`TsGroup`] and [`Series`]; each method returns a
/// new value of the same kind and leaves the input untouched.
pub trait Surrogate: Sized {
    /// Circularly rotates each series within its support.
    ///
    /// # Errors
    ///
    /// See [`shift_timestamps`].
    fn shift<R: Rng + ?Sized>(
        &self,
        config: &ShiftConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError>;

    /// Perturbs every timestamp independently.
    ///
    /// # Errors
    ///
    /// See [`jitter_timestamps`].
    fn jitter<R: Rng + ?Sized>(
        &self,
        config: &JitterConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError>;

    /// Redraws every timestamp uniformly within the support.
    ///
    /// # Errors
    ///
    /// See [`resample_timestamps`].
    fn resample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, RandomizeError>;
}

/// Rotates each series by a random offset, wrapping past the end of the
/// support back to its start.
///
/// One offset is drawn from `[min_shift, max_shift)` per series (per member
/// for a group); `max_shift` defaults to the total support duration. The
/// rotation runs in support time, so timestamps never land in a gap. Count,
/// spacing (modulo the wrap) and support are preserved.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`RandomizeError::InvalidInputType`] | a `Series` that is neither `Ts` nor `TsGroup` |
/// | [`RandomizeError::InvalidBounds`] | `min_shift > max_shift` |
/// | [`RandomizeError::NonFiniteBound`] | a bound is NaN or infinite |
#[tracing::instrument(skip(input, config, rng))]
pub fn shift_timestamps<P, R>(
    input: &P,
    config: &ShiftConfig,
    rng: &mut R,
) -> Result<P, RandomizeError>
where
    P: Surrogate,
    R: Rng + ?Sized,
{
    input.shift(config, rng)
}

/// Adds an independent offset from `[min_jitter, max_jitter)` to every
/// timestamp.
///
/// With `keep_tsupport` the input support is kept and jittered timestamps
/// falling outside it are dropped. Otherwise the support is inferred from the
/// jittered extent (the union of members for a group) and counts are
/// conserved.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`RandomizeError::InvalidInputType`] | a `Series` that is neither `Ts` nor `TsGroup` |
/// | [`RandomizeError::MissingArgument`] | `max_jitter` is unset |
/// | [`RandomizeError::InvalidBounds`] | `min_jitter > max_jitter` |
/// | [`RandomizeError::NonFiniteBound`] | a bound is NaN or infinite |
#[tracing::instrument(skip(input, config, rng))]
pub fn jitter_timestamps<P, R>(
    input: &P,
    config: &JitterConfig,
    rng: &mut R,
) -> Result<P, RandomizeError>
where
    P: Surrogate,
    R: Rng + ?Sized,
{
    input.jitter(config, rng)
}

/// Replaces each series by as many timestamps drawn uniformly over the
/// support (the group support for a group). Support is unchanged.
///
/// # Errors
///
/// Returns [`RandomizeError::InvalidInputType`] for a `Series` that is
/// neither `Ts` nor `TsGroup`.
#[tracing::instrument(skip(input, rng))]
pub fn resample_timestamps<P, R>(input: &P, rng: &mut R) -> Result<P, RandomizeError>
where
    P: Surrogate,
    R: Rng + ?Sized,
{
    input.resample(rng)
}

impl Surrogate for Ts {
    fn shift<R: Rng + ?Sized>(
        &self,
        config: &ShiftConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError> {
        let max = config.max_shift().unwrap_or_else(|| self.time_support().clock().total());
        check_bounds("shift", config.min_shift(), max)?;
        let offset = uniform(rng, config.min_shift(), max);
        rotate(self, offset)
    }

    fn jitter<R: Rng + ?Sized>(
        &self,
        config: &JitterConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError> {
        let (min, max) = jitter_bounds(config)?;
        let times = jittered(self, min, max, rng);
        if config.keep_tsupport() {
            keep_support(times, self.time_support())
        } else {
            Ok(Ts::new(times)?)
        }
    }

    fn resample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, RandomizeError> {
        redraw(self.len(), self.time_support(), rng)
    }
}

impl Surrogate for TsGroup {
    fn shift<R: Rng + ?Sized>(
        &self,
        config: &ShiftConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError> {
        let max = config.max_shift().unwrap_or_else(|| self.time_support().clock().total());
        check_bounds("shift", config.min_shift(), max)?;
        let min = config.min_shift();
        let members = per_member(self, rng, |ts, rng| rotate(ts, uniform(rng, min, max)))?;
        Ok(TsGroup::with_support(members, Arc::clone(self.time_support())))
    }

    fn jitter<R: Rng + ?Sized>(
        &self,
        config: &JitterConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError> {
        let (min, max) = jitter_bounds(config)?;
        let members =
            per_member(self, rng, |ts, rng| Ok(Ts::new(jittered(ts, min, max, rng))?))?;
        if config.keep_tsupport() {
            let before: usize = members.values().map(Ts::len).sum();
            let group = TsGroup::with_support(members, Arc::clone(self.time_support()));
            log_dropped(before - group.count());
            Ok(group)
        } else {
            Ok(TsGroup::new(members, SupportPolicy::Union))
        }
    }

    fn resample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, RandomizeError> {
        let support = self.time_support();
        let members = per_member(self, rng, |ts, rng| redraw(ts.len(), support, rng))?;
        Ok(TsGroup::with_support(members, Arc::clone(support)))
    }
}

impl Surrogate for Series {
    fn shift<R: Rng + ?Sized>(
        &self,
        config: &ShiftConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError> {
        match self {
            Series::Ts(ts) => Ok(Series::Ts(ts.shift(config, rng)?)),
            Series::Group(group) => Ok(Series::Group(group.shift(config, rng)?)),
            _ => Err(RandomizeError::InvalidInputType),
        }
    }

    fn jitter<R: Rng + ?Sized>(
        &self,
        config: &JitterConfig,
        rng: &mut R,
    ) -> Result<Self, RandomizeError> {
        match self {
            Series::Ts(ts) => Ok(Series::Ts(ts.jitter(config, rng)?)),
            Series::Group(group) => Ok(Series::Group(group.jitter(config, rng)?)),
            _ => Err(RandomizeError::InvalidInputType),
        }
    }

    fn resample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, RandomizeError> {
        match self {
            Series::Ts(ts) => Ok(Series::Ts(ts.resample(rng)?)),
            Series::Group(group) => Ok(Series::Group(group.resample(rng)?)),
            _ => Err(RandomizeError::InvalidInputType),
        }
    }
}

/// Runs `op` on every member in parallel.
///
/// Each member gets its own generator, seeded from `rng` in key order, so a
/// seeded caller gets the same group back whatever the thread scheduling.
fn per_member<R, F>(
    group: &TsGroup,
    rng: &mut R,
    op: F,
) -> Result<BTreeMap<usize, Ts>, RandomizeError>
where
    R: Rng + ?Sized,
    F: Fn(&Ts, &mut StdRng) -> Result<Ts, RandomizeError> + Sync,
{
    let jobs: Vec<(usize, &Ts, u64)> = group
        .iter()
        .map(|(key, ts)| (key, ts, rng.random::<u64>()))
        .collect();
    jobs.into_par_iter()
        .map(|(key, ts, seed)| {
            let mut member_rng = StdRng::seed_from_u64(seed);
            op(ts, &mut member_rng).map(|out| (key, out))
        })
        .collect()
}

/// Rotation by `offset` seconds of support time.
fn rotate(ts: &Ts, offset: f64) -> Result<Ts, RandomizeError> {
    let support = ts.time_support();
    let clock = support.clock();
    let total = clock.total();
    if total <= 0.0 {
        return Ok(ts.clone());
    }
    let mut times: Vec<f64> = ts
        .times()
        .iter()
        .filter_map(|&t| {
            let elapsed = clock.elapsed_at(t)?;
            clock.time_at_elapsed((elapsed + offset).rem_euclid(total))
        })
        .collect();
    times.sort_by(f64::total_cmp);
    Ok(Ts::with_support(times, Arc::clone(support))?)
}

/// Sorted timestamps, each moved by its own draw from `[min, max)`.
fn jittered<R: Rng + ?Sized>(ts: &Ts, min: f64, max: f64, rng: &mut R) -> Vec<f64> {
    let mut times: Vec<f64> = ts.times().iter().map(|&t| t + uniform(rng, min, max)).collect();
    times.sort_by(f64::total_cmp);
    times
}

/// `count` sorted timestamps uniform in support time.
fn redraw<R: Rng + ?Sized>(
    count: usize,
    support: &Arc<IntervalSet>,
    rng: &mut R,
) -> Result<Ts, RandomizeError> {
    let clock = support.clock();
    let total = clock.total();
    let mut times: Vec<f64> = (0..count)
        .filter_map(|_| clock.time_at_elapsed(uniform(rng, 0.0, total)))
        .collect();
    times.sort_by(f64::total_cmp);
    Ok(Ts::with_support(times, Arc::clone(support))?)
}

fn keep_support(times: Vec<f64>, support: &Arc<IntervalSet>) -> Result<Ts, RandomizeError> {
    let before = times.len();
    let ts = Ts::with_support(times, Arc::clone(support))?;
    log_dropped(before - ts.len());
    Ok(ts)
}

fn log_dropped(dropped: usize) {
    if dropped > 0 {
        debug!(dropped, "jittered timestamps outside the kept support");
    }
}

fn jitter_bounds(config: &JitterConfig) -> Result<(f64, f64), RandomizeError> {
    let max = config
        .max_jitter()
        .ok_or(RandomizeError::MissingArgument("max_jitter"))?;
    check_bounds("jitter", config.min_jitter(), max)?;
    Ok((config.min_jitter(), max))
}

fn check_bounds(name: &'static str, min: f64, max: f64) -> Result<(), RandomizeError> {
    for value in [min, max] {
        if !value.is_finite() {
            return Err(RandomizeError::NonFiniteBound { name, value });
        }
    }
    if min > max {
        return Err(RandomizeError::InvalidBounds { name, min, max });
    }
    Ok(())
}

/// Uniform draw from `[lo, hi)`, or `lo` for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
