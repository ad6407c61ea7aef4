//! Capability trait shared by the set algorithms.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

/// The operations the set algorithms need from a collection.
///
/// Implemented for the standard hashed and ordered sets, [`IndexSet`], and
/// the counted [`Multiset`](super::Multiset). Binary operations produce a
/// new value of the same type.
pub trait SetLike: Sized {
    /// Element type.
    type Item;

    /// Size of the set. For multisets this is the sum of multiplicities.
    fn len(&self) -> usize;

    /// Returns true if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test.
    fn contains(&self, item: &Self::Item) -> bool;

    fn intersection(&self, other: &Self) -> Self;

    fn union(&self, other: &Self) -> Self;

    /// Elements of `self` that are not in `other`.
    fn difference(&self, other: &Self) -> Self;

    /// Non-strict subset test.
    fn is_subset(&self, other: &Self) -> bool;

    /// Non-strict superset test.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Set equality, expressed through the subset relation.
    fn same_as(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }
}

impl<T, H> SetLike for HashSet<T, H>
where
    T: Eq + Hash + Clone,
    H: BuildHasher + Default,
{
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn intersection(&self, other: &Self) -> Self {
        HashSet::intersection(self, other).cloned().collect()
    }

    fn union(&self, other: &Self) -> Self {
        HashSet::union(self, other).cloned().collect()
    }

    fn difference(&self, other: &Self) -> Self {
        HashSet::difference(self, other).cloned().collect()
    }

    fn is_subset(&self, other: &Self) -> bool {
        HashSet::is_subset(self, other)
    }
}

impl<T> SetLike for BTreeSet<T>
where
    T: Ord + Clone,
{
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn intersection(&self, other: &Self) -> Self {
        BTreeSet::intersection(self, other).cloned().collect()
    }

    fn union(&self, other: &Self) -> Self {
        BTreeSet::union(self, other).cloned().collect()
    }

    fn difference(&self, other: &Self) -> Self {
        BTreeSet::difference(self, other).cloned().collect()
    }

    fn is_subset(&self, other: &Self) -> bool {
        BTreeSet::is_subset(self, other)
    }
}

impl<T, H> SetLike for IndexSet<T, H>
where
    T: Eq + Hash + Clone,
    H: BuildHasher + Default,
{
    type Item = T;

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        IndexSet::contains(self, item)
    }

    fn intersection(&self, other: &Self) -> Self {
        IndexSet::intersection(self, other).cloned().collect()
    }

    fn union(&self, other: &Self) -> Self {
        IndexSet::union(self, other).cloned().collect()
    }

    fn difference(&self, other: &Self) -> Self {
        IndexSet::difference(self, other).cloned().collect()
    }

    fn is_subset(&self, other: &Self) -> bool {
        IndexSet::is_subset(self, other)
    }
}
