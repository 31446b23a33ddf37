//! Keyed collection of point processes sharing one time support.

use std::collections::BTreeMap;
use std::sync::Arc;

use epocha_intervals::IntervalSet;

use crate::ts::Ts;

/// How a group derives its shared support from its members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupportPolicy {
    /// Epochs covered by any member.
    #[default]
    Union,
    /// Epochs covered by every member; members are restricted to it.
    Intersection,
}

/// Point processes keyed by unit id, all on the same time support.
///
/// Every member holds a clone of the group's [`Arc`], so
/// `Arc::ptr_eq(member.time_support(), group.time_support())` always holds.
#[derive(Clone, Debug)]
pub struct TsGroup {
    members: BTreeMap<usize, Ts>,
    support: Arc<IntervalSet>,
}

impl TsGroup {
    /// Builds a group whose support follows `policy`.
    pub fn new(members: BTreeMap<usize, Ts>, policy: SupportPolicy) -> Self {
        let mut supports = members.values().map(|ts| ts.time_support().as_ref());
        let support = match supports.next() {
            None => IntervalSet::empty(),
            Some(first) => supports.fold(first.clone(), |acc, s| match policy {
                SupportPolicy::Union => acc.union(s),
                SupportPolicy::Intersection => acc.intersect(s),
            }),
        };
        Self::with_support(members, support)
    }

    /// Builds a group on an explicit support, restricting every member to it.
    pub fn with_support(
        members: BTreeMap<usize, Ts>,
        support: impl Into<Arc<IntervalSet>>,
    ) -> Self {
        let support = support.into();
        let members = members
            .into_iter()
            .map(|(key, ts)| {
                let ts = Ts::restricted_to(ts.times(), Arc::clone(&support));
                (key, ts)
            })
            .collect();
        Self { members, support }
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member keys in ascending order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.members.keys().copied()
    }

    /// Returns the member stored under `key`.
    pub fn get(&self, key: usize) -> Option<&Ts> {
        self.members.get(&key)
    }

    /// Iterates over `(key, member)` in key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &Ts)> + '_ {
        self.members.iter().map(|(&k, ts)| (k, ts))
    }

    /// Returns the shared time support.
    pub fn time_support(&self) -> &Arc<IntervalSet> {
        &self.support
    }

    /// Restricts every member to `ep`; the shared support becomes the
    /// intersection of the current support and `ep`.
    pub fn restrict(&self, ep: &IntervalSet) -> TsGroup {
        let support = Arc::new(self.support.intersect(ep));
        let members = self
            .members
            .iter()
            .map(|(&key, ts)| (key, Ts::restricted_to(ts.times(), Arc::clone(&support))))
            .collect();
        Self { members, support }
    }

    /// Event rate of each member over the shared support.
    pub fn rates(&self) -> BTreeMap<usize, f64> {
        self.iter().map(|(k, ts)| (k, ts.rate())).collect()
    }

    /// Total number of events across members.
    pub fn count(&self) -> usize {
        self.members.values().map(Ts::len).sum()
    }

    /// Consumes the group, returning its members.
    pub fn into_members(self) -> BTreeMap<usize, Ts> {
        self.members
    }
}

impl FromIterator<(usize, Ts)> for TsGroup {
    /// Collects members under [`SupportPolicy::Union`].
    fn from_iter<I: IntoIterator<Item = (usize, Ts)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), SupportPolicy::Union)
    }
}
