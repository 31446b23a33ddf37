//! Restriction contracts across container kinds.

use std::sync::Arc;

use epocha_intervals::IntervalSet;
use epocha_series::{Ts, TsGroup, Tsd, TsdTensor};
use ndarray::{Array1, ArrayD, IxDyn};

fn uniform_times(n: usize, dt: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dt).collect()
}

#[test]
fn restricted_timestamps_lie_in_support() {
    let ts = Ts::new(uniform_times(1000, 0.013)).unwrap();
    let ep = IntervalSet::new(&[0.5, 3.0, 7.25], &[1.75, 3.0, 9.0]).unwrap();
    let r = ts.restrict(&ep);
    assert_eq!(**r.time_support(), ts.time_support().intersect(&ep));
    for &t in r.times() {
        assert!(r.time_support().contains(t), "{t} escaped the support");
    }
    let expected = ts.times().iter().filter(|&&t| ep.contains(t)).count();
    assert_eq!(r.len(), expected);
}

#[test]
fn restrict_twice_equals_restrict_once_on_intersection() {
    let tsd = Tsd::new(uniform_times(500, 0.01), Array1::linspace(0.0, 1.0, 500)).unwrap();
    let a = IntervalSet::new(&[0.0, 2.0], &[1.5, 4.0]).unwrap();
    let b = IntervalSet::new(&[1.0], &[3.0]).unwrap();
    let twice = tsd.restrict(&a).restrict(&b);
    let once = tsd.restrict(&a.intersect(&b));
    assert_eq!(twice.times(), once.times());
    assert_eq!(twice.values(), once.values());
    assert_eq!(**twice.time_support(), **once.time_support());
}

#[test]
fn restrict_preserves_trailing_dimensions() {
    let values = ArrayD::from_shape_fn(IxDyn(&[200, 3, 2]), |ix| ix[0] as f64);
    let tensor = TsdTensor::new(uniform_times(200, 0.1), values).unwrap();
    let r = tensor.restrict(&IntervalSet::new(&[1.0, 10.0], &[2.0, 12.0]).unwrap());
    assert_eq!(&r.shape()[1..], &[3, 2]);
    assert_eq!(r.shape()[0], r.len());
}

#[test]
fn restrict_to_disjoint_epoch_is_empty() {
    let tsd = Tsd::new(uniform_times(10, 1.0), Array1::zeros(10)).unwrap();
    let r = tsd.restrict(&IntervalSet::single(100.0, 200.0).unwrap());
    assert!(r.is_empty());
    assert!(r.time_support().is_empty());
}

#[test]
fn group_restrict_keeps_keys_and_shared_support() {
    let group: TsGroup = (0..5)
        .map(|k| (k * 10, Ts::new(uniform_times(100, 0.1 + k as f64 * 0.01)).unwrap()))
        .collect();
    let r = group.restrict(&IntervalSet::new(&[1.0, 5.0], &[2.0, 6.0]).unwrap());
    assert_eq!(r.keys().collect::<Vec<_>>(), group.keys().collect::<Vec<_>>());
    for (_, ts) in r.iter() {
        assert!(Arc::ptr_eq(ts.time_support(), r.time_support()));
        assert!(ts.times().iter().all(|&t| r.time_support().contains(t)));
    }
}
