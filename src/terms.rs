use std::fmt::Debug;

pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::membership::MembershipFunction;

/// A linguistic label, e.g. `N`/`Z`/`P`. Implemented for any fieldless enum deriving [`Key`].
pub trait Term: Key + Copy + PartialEq + Debug {}

impl<K: Key + Copy + PartialEq + Debug> Term for K {}

/// The labelled fuzzy sets of one variable, at most one per label.
pub struct Terms<K: Term>(pub(crate) FixedMap<K, MembershipFunction>);

impl<K: Term> Terms<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    /// Returns the membership function previously registered under `key`, if any.
    pub fn insert(&mut self, key: K, value: MembershipFunction) -> Option<MembershipFunction> {
        self.0.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Term> Default for Terms<K> {
    fn default() -> Self {
        Self::new()
    }
}
