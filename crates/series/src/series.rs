//! Dynamically typed container.

use epocha_intervals::IntervalSet;

use crate::group::TsGroup;
use crate::time_series::{Tsd, TsdFrame, TsdTensor};
use crate::ts::Ts;

/// Any epocha container, for callers that only learn the kind at runtime
/// (e.g. a loader returning whatever a file holds).
///
/// Operations accepting `Series` check the variant and report a type error
/// naming the kinds they support.
#[derive(Clone, Debug)]
pub enum Series {
    /// Point process.
    Ts(Ts),
    /// Scalar signal.
    Tsd(Tsd),
    /// Multi-channel signal.
    TsdFrame(TsdFrame),
    /// N-D signal.
    TsdTensor(TsdTensor),
    /// Group of point processes.
    Group(TsGroup),
    /// Bare interval set.
    Intervals(IntervalSet),
}

impl Series {
    /// Name of the variant, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Series::Ts(_) => "Ts",
            Series::Tsd(_) => "Tsd",
            Series::TsdFrame(_) => "TsdFrame",
            Series::TsdTensor(_) => "TsdTensor",
            Series::Group(_) => "TsGroup",
            Series::Intervals(_) => "IntervalSet",
        }
    }

    /// Time support of the container; an interval set is its own support.
    pub fn time_support(&self) -> &IntervalSet {
        match self {
            Series::Ts(ts) => ts.time_support().as_ref(),
            Series::Tsd(tsd) => tsd.time_support().as_ref(),
            Series::TsdFrame(frame) => frame.time_support().as_ref(),
            Series::TsdTensor(tensor) => tensor.time_support().as_ref(),
            Series::Group(group) => group.time_support().as_ref(),
            Series::Intervals(set) => set,
        }
    }

    /// Restricts any variant to `ep`.
    pub fn restrict(&self, ep: &IntervalSet) -> Series {
        match self {
            Series::Ts(ts) => Series::Ts(ts.restrict(ep)),
            Series::Tsd(tsd) => Series::Tsd(tsd.restrict(ep)),
            Series::TsdFrame(frame) => Series::TsdFrame(frame.restrict(ep)),
            Series::TsdTensor(tensor) => Series::TsdTensor(tensor.restrict(ep)),
            Series::Group(group) => Series::Group(group.restrict(ep)),
            Series::Intervals(set) => Series::Intervals(set.intersect(ep)),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Series {
                fn from(value: $ty) -> Self {
                    Series::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    Ts(Ts),
    Tsd(Tsd),
    TsdFrame(TsdFrame),
    TsdTensor(TsdTensor),
    Group(TsGroup),
    Intervals(IntervalSet),
);

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn kind_names() {
        let ts = Ts::new(vec![0.0, 1.0]).unwrap();
        let tsd = Tsd::new(vec![0.0, 1.0], array![1.0, 2.0]).unwrap();
        assert_eq!(Series::from(ts.clone()).kind(), "Ts");
        assert_eq!(Series::from(tsd).kind(), "Tsd");
        assert_eq!(Series::from(IntervalSet::empty()).kind(), "IntervalSet");
        let group: TsGroup = [(0, ts)].into_iter().collect();
        assert_eq!(Series::from(group).kind(), "TsGroup");
    }

    #[test]
    fn restrict_dispatches() {
        let series = Series::from(Ts::new(vec![0.0, 1.0, 2.0]).unwrap());
        let ep = IntervalSet::single(0.5, 2.0).unwrap();
        match series.restrict(&ep) {
            Series::Ts(ts) => assert_eq!(ts.times(), &[1.0, 2.0]),
            other => panic!("unexpected kind {}", other.kind()),
        }
    }

    #[test]
    fn intervals_are_their_own_support() {
        let set = IntervalSet::new(&[0.0, 3.0], &[1.0, 4.0]).unwrap();
        let series = Series::from(set.clone());
        assert_eq!(series.time_support(), &set);
    }
}
