//! Surrogate generators on single series, groups and dynamic inputs.

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use epocha_intervals::IntervalSet;
use epocha_randomize::{
    JitterConfig, RandomizeError, ShiftConfig, jitter_timestamps, resample_timestamps,
    shift_timestamps,
};
use epocha_series::{Series, SupportPolicy, Ts, TsGroup, Tsd};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn spikes(n: usize, end: f64) -> Ts {
    let times = (0..n).map(|i| end * (i as f64 + 0.5) / n as f64).collect();
    Ts::with_support(times, IntervalSet::single(0.0, end).unwrap()).unwrap()
}

fn three_points() -> Ts {
    Ts::with_support(vec![0.0, 5.0, 10.0], IntervalSet::single(0.0, 10.0).unwrap()).unwrap()
}

fn group() -> TsGroup {
    let members: BTreeMap<usize, Ts> = [
        (0, spikes(50, 100.0)),
        (3, spikes(120, 100.0)),
        (7, spikes(10, 100.0)),
    ]
    .into_iter()
    .collect();
    TsGroup::new(members, SupportPolicy::Union)
}

#[test]
fn shift_preserves_count_and_support() {
    let ts = spikes(200, 50.0);
    let shifted = shift_timestamps(&ts, &ShiftConfig::new(), &mut rng()).unwrap();
    assert_eq!(shifted.len(), ts.len());
    assert_eq!(shifted.time_support(), ts.time_support());
    assert!(shifted.times().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn fixed_shift_is_modulo_the_support_end() {
    let ts = spikes(40, 20.0);
    let config = ShiftConfig::new().with_min_shift(7.25).with_max_shift(7.25);
    let shifted = shift_timestamps(&ts, &config, &mut rng()).unwrap();
    let mut expected: Vec<f64> = ts.times().iter().map(|&t| (t + 7.25) % 20.0).collect();
    expected.sort_by(f64::total_cmp);
    for (got, want) in shifted.times().iter().zip(&expected) {
        assert_relative_eq!(*got, *want, epsilon = 1e-9);
    }
}

#[test]
fn shift_group_keeps_keys_counts_and_support() {
    let g = group();
    let shifted = shift_timestamps(&g, &ShiftConfig::new(), &mut rng()).unwrap();
    assert_eq!(shifted.keys().collect::<Vec<_>>(), vec![0, 3, 7]);
    for (key, ts) in g.iter() {
        assert_eq!(shifted.get(key).unwrap().len(), ts.len());
    }
    assert_eq!(shifted.time_support(), g.time_support());
}

#[test]
fn shift_rejects_inverted_bounds() {
    let config = ShiftConfig::new().with_min_shift(5.0).with_max_shift(1.0);
    let err = shift_timestamps(&spikes(10, 10.0), &config, &mut rng()).unwrap_err();
    assert!(matches!(err, RandomizeError::InvalidBounds { name: "shift", .. }));
    assert_eq!(err.to_string(), "min_shift (5) must not exceed max_shift (1)");
}

#[test]
fn jitter_requires_max_jitter() {
    let err = jitter_timestamps(&spikes(10, 10.0), &JitterConfig::new(), &mut rng()).unwrap_err();
    assert_eq!(err.to_string(), "missing required argument: max_jitter");
}

#[test]
fn jitter_stays_within_bounds() {
    let ts = spikes(100, 100.0);
    let config = JitterConfig::new().with_min_jitter(-0.1).with_max_jitter(0.1);
    let jittered = jitter_timestamps(&ts, &config, &mut rng()).unwrap();
    assert_eq!(jittered.len(), ts.len());
    // Points are 1 s apart, so sorting cannot reorder them.
    for (a, b) in jittered.times().iter().zip(ts.times()) {
        assert!((a - b).abs() <= 0.1);
    }
}

#[test]
fn jitter_without_keep_infers_new_support() {
    let ts = three_points();
    let config = JitterConfig::new().with_min_jitter(1.0).with_max_jitter(2.0);
    let jittered = jitter_timestamps(&ts, &config, &mut rng()).unwrap();
    assert_eq!(jittered.len(), 3);
    let support = jittered.time_support();
    assert_eq!(support.start_time(), jittered.start_time());
    assert_eq!(support.end_time(), jittered.end_time());
    assert!(jittered.end_time().unwrap() > 10.0);
}

#[test]
fn jitter_with_keep_drops_points_outside_support() {
    let ts = three_points();
    let config = JitterConfig::new()
        .with_min_jitter(1.0)
        .with_max_jitter(2.0)
        .with_keep_tsupport(true);
    let jittered = jitter_timestamps(&ts, &config, &mut rng()).unwrap();
    assert_eq!(jittered.time_support(), ts.time_support());
    assert_eq!(jittered.len(), 2);
}

#[test]
fn jitter_group_modes() {
    let g = group();
    let loose = JitterConfig::new().with_min_jitter(-1.0).with_max_jitter(1.0);
    let kept = loose.clone().with_keep_tsupport(true);

    let out = jitter_timestamps(&g, &loose, &mut rng()).unwrap();
    assert_eq!(out.count(), g.count());
    assert_eq!(out.keys().collect::<Vec<_>>(), vec![0, 3, 7]);

    let out = jitter_timestamps(&g, &kept, &mut rng()).unwrap();
    assert_eq!(out.time_support(), g.time_support());
    assert!(out.count() <= g.count());
}

#[test]
fn resample_is_uniform_over_the_support() {
    let ts = spikes(2000, 100.0);
    let resampled = resample_timestamps(&ts, &mut rng()).unwrap();
    assert_eq!(resampled.len(), 2000);
    assert_eq!(resampled.time_support(), ts.time_support());
    let distance = epocha_stats::ks_uniform(resampled.times(), 0.0, 100.0);
    assert!(distance < 0.05, "KS distance {distance}");
}

#[test]
fn resample_never_lands_in_gaps() {
    let support = IntervalSet::new(&[0.0, 10.0, 30.0], &[2.0, 11.0, 35.0]).unwrap();
    let ts = Ts::with_support(vec![0.5, 1.0, 10.5, 31.0, 32.0, 34.0], support.clone()).unwrap();
    let members = [(1, ts.clone()), (2, ts.clone())].into_iter().collect();
    let g = TsGroup::with_support(members, support.clone());

    let resampled = resample_timestamps(&ts, &mut rng()).unwrap();
    assert!(resampled.times().iter().all(|&t| support.contains(t)));

    let resampled = resample_timestamps(&g, &mut rng()).unwrap();
    for (_, member) in resampled.iter() {
        assert_eq!(member.len(), 6);
        assert!(member.times().iter().all(|&t| support.contains(t)));
    }
}

#[test]
fn seeded_generators_reproduce() {
    let g = group();
    let config = JitterConfig::new().with_min_jitter(-0.5).with_max_jitter(0.5);
    let a = jitter_timestamps(&g, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = jitter_timestamps(&g, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
        assert_eq!(x.times(), y.times());
    }
    let c = jitter_timestamps(&g, &config, &mut StdRng::seed_from_u64(10)).unwrap();
    assert_ne!(a.get(3).unwrap().times(), c.get(3).unwrap().times());
}

#[test]
fn series_dispatch() {
    let ts = Series::from(spikes(20, 10.0));
    assert!(matches!(
        shift_timestamps(&ts, &ShiftConfig::new(), &mut rng()).unwrap(),
        Series::Ts(_)
    ));
    let g = Series::from(group());
    assert!(matches!(resample_timestamps(&g, &mut rng()).unwrap(), Series::Group(_)));

    let tsd = Series::from(Tsd::new(vec![0.0, 1.0], Array1::zeros(2)).unwrap());
    // Input type is checked before the jitter bounds.
    let err = jitter_timestamps(&tsd, &JitterConfig::new(), &mut rng()).unwrap_err();
    assert!(matches!(err, RandomizeError::InvalidInputType));
    assert_eq!(err.to_string(), "Invalid input type, should be Ts or TsGroup");
    let intervals = Series::from(IntervalSet::single(0.0, 1.0).unwrap());
    let err = resample_timestamps(&intervals, &mut rng()).unwrap_err();
    assert!(matches!(err, RandomizeError::InvalidInputType));
}
