//! Counted multiset.

use std::hash::Hash;

use indexmap::IndexMap;

use super::traits::SetLike;

/// A bag of values with multiplicities, in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<T: Eq + Hash> {
    counts: IndexMap<T, usize>,
}

impl<T: Eq + Hash> Multiset<T> {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Add one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        self.insert_many(value, 1);
    }

    /// Add `count` occurrences of `value`.
    pub fn insert_many(&mut self, value: T, count: usize) {
        if count > 0 {
            *self.counts.entry(value).or_insert(0) += count;
        }
    }

    /// Multiplicity of `value` (0 when absent).
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over `(value, multiplicity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }

    fn combine(&self, other: &Self, merge: impl Fn(usize, usize) -> usize) -> Self
    where
        T: Clone,
    {
        let mut result = Self::new();
        for value in self.counts.keys().chain(other.counts.keys()) {
            if result.counts.contains_key(value) {
                continue;
            }
            let count = merge(self.count(value), other.count(value));
            if count > 0 {
                result.counts.insert(value.clone(), count);
            }
        }
        result
    }
}

impl<T: Eq + Hash> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        for value in iter {
            multiset.insert(value);
        }
        multiset
    }
}

impl<T: Eq + Hash + Clone> SetLike for Multiset<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.counts.values().sum()
    }

    fn contains(&self, item: &T) -> bool {
        self.count(item) > 0
    }

    fn intersection(&self, other: &Self) -> Self {
        self.combine(other, usize::min)
    }

    fn union(&self, other: &Self) -> Self {
        self.combine(other, usize::max)
    }

    fn difference(&self, other: &Self) -> Self {
        self.combine(other, usize::saturating_sub)
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .all(|(value, &count)| count <= other.count(value))
    }
}
