//! Subset enumeration and subset/superset filtering.

use std::collections::BTreeSet;

use itertools::Itertools;

use super::traits::SetLike;

/// Lazily enumerate the power set of `set`.
///
/// Subsets come out by size (starting with the empty set), and within a size
/// in lexicographic order of the elements. The sequence is exponential in
/// `set.len()`; call again to restart it.
pub fn enumerate_subsets<T>(set: &BTreeSet<T>) -> impl Iterator<Item = BTreeSet<T>> + '_
where
    T: Ord + Clone,
{
    (0..=set.len()).flat_map(move |size| {
        set.iter()
            .cloned()
            .combinations(size)
            .map(BTreeSet::from_iter)
    })
}

/// The subset of `set` with the highest `key`.
///
/// Ties go to the subset enumerated first by [`enumerate_subsets`].
pub fn best_subset<T, W, F>(set: &BTreeSet<T>, key: F) -> BTreeSet<T>
where
    T: Ord + Clone,
    W: PartialOrd,
    F: Fn(&BTreeSet<T>) -> W,
{
    let mut best: Option<(W, BTreeSet<T>)> = None;

    for subset in enumerate_subsets(set) {
        let score = key(&subset);
        if best.as_ref().is_none_or(|(top, _)| score > *top) {
            best = Some((score, subset));
        }
    }

    best.map(|(_, subset)| subset).unwrap_or_default()
}

/// Drop every set that is a (non-strict) subset of `reference`.
pub fn drop_subsets_of<'a, S, I>(sets: I, reference: &'a S) -> impl Iterator<Item = S> + 'a
where
    S: SetLike + 'a,
    I: IntoIterator<Item = S>,
    I::IntoIter: 'a,
{
    sets.into_iter().filter(move |s| !s.is_subset(reference))
}

/// Drop every set that is a (non-strict) superset of `reference`.
pub fn drop_supersets_of<'a, S, I>(sets: I, reference: &'a S) -> impl Iterator<Item = S> + 'a
where
    S: SetLike + 'a,
    I: IntoIterator<Item = S>,
    I::IntoIter: 'a,
{
    sets.into_iter().filter(move |s| !s.is_superset(reference))
}

/// Keep only the sets that are not contained in another set of the collection.
///
/// Survivors keep their input order. Of several equal sets only the first
/// survives.
pub fn drop_subsets<S, I>(sets: I) -> Vec<S>
where
    S: SetLike,
    I: IntoIterator<Item = S>,
{
    retain_undominated(sets.into_iter().collect(), |x, y| x.is_subset(y))
}

/// Keep only the sets that do not contain another set of the collection.
///
/// Survivors keep their input order. Of several equal sets only the first
/// survives.
pub fn drop_supersets<S, I>(sets: I) -> Vec<S>
where
    S: SetLike,
    I: IntoIterator<Item = S>,
{
    retain_undominated(sets.into_iter().collect(), |x, y| x.is_superset(y))
}

/// Pairwise O(n²) filter: `x` is dropped when `dominated(x, y)` holds for
/// some other `y`, except that an equal `y` only counts when it comes first.
fn retain_undominated<S, F>(sets: Vec<S>, dominated: F) -> Vec<S>
where
    S: SetLike,
    F: Fn(&S, &S) -> bool,
{
    let keep: Vec<bool> = sets
        .iter()
        .enumerate()
        .map(|(i, x)| {
            !sets.iter().enumerate().any(|(j, y)| {
                i != j && dominated(x, y) && (j < i || !x.same_as(y))
            })
        })
        .collect();

    sets.into_iter()
        .zip(keep)
        .filter_map(|(set, keep)| keep.then_some(set))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn bset(values: &[u8]) -> BTreeSet<u8> {
        values.iter().copied().collect()
    }

    fn hset(values: &[u8]) -> HashSet<u8> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_enumerate_subsets() {
        let subsets: Vec<BTreeSet<u8>> = enumerate_subsets(&bset(&[1, 2, 3])).collect();

        assert_eq!(subsets.len(), 8);
        assert_eq!(subsets[0], bset(&[]));
        assert_eq!(subsets[1], bset(&[1]));
        assert_eq!(subsets[4], bset(&[1, 2]));
        assert_eq!(subsets[7], bset(&[1, 2, 3]));
    }

    #[test]
    fn test_enumerate_subsets_of_empty() {
        let subsets: Vec<BTreeSet<u8>> = enumerate_subsets(&BTreeSet::new()).collect();
        assert_eq!(subsets, vec![BTreeSet::new()]);
    }

    #[test]
    fn test_best_subset() {
        // Largest sum not exceeding 5.
        let best = best_subset(&bset(&[1, 2, 4]), |s| {
            let total: u8 = s.iter().sum();
            if total <= 5 { total as i32 } else { -1 }
        });
        assert_eq!(best, bset(&[1, 4]));
    }

    #[test]
    fn test_best_subset_tie_goes_to_first() {
        let best = best_subset(&bset(&[1, 2, 3]), |s| s.len().min(1));
        assert_eq!(best, bset(&[1]));
    }

    #[test]
    fn test_drop_subsets_of() {
        let reference = hset(&[1, 2]);
        let kept: Vec<_> =
            drop_subsets_of(vec![hset(&[1]), hset(&[1, 2]), hset(&[3])], &reference).collect();
        assert_eq!(kept, vec![hset(&[3])]);
    }

    #[test]
    fn test_drop_supersets_of() {
        let reference = hset(&[1]);
        let kept: Vec<_> =
            drop_supersets_of(vec![hset(&[1]), hset(&[1, 2]), hset(&[3])], &reference).collect();
        assert_eq!(kept, vec![hset(&[3])]);
    }

    #[test]
    fn test_drop_subsets() {
        let kept = drop_subsets(vec![hset(&[1]), hset(&[1, 2]), hset(&[2, 3]), hset(&[3])]);
        assert_eq!(kept, vec![hset(&[1, 2]), hset(&[2, 3])]);
    }

    #[test]
    fn test_drop_supersets() {
        let kept = drop_supersets(vec![bset(&[0, 1]), bset(&[1]), bset(&[0, 2]), bset(&[2])]);
        assert_eq!(kept, vec![bset(&[1]), bset(&[2])]);
    }

    #[test]
    fn test_equal_sets_keep_first() {
        let kept = drop_subsets(vec![bset(&[1, 2]), bset(&[2, 1]), bset(&[1])]);
        assert_eq!(kept, vec![bset(&[1, 2])]);
    }
}
