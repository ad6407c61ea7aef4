//! Jaccard-style similarity between sets.

use std::hash::Hash;

use super::multiset::Multiset;
use super::traits::SetLike;

/// Divide, returning `0.0` when the denominator is zero.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `key(a ∩ b) / (key(a) + key(b) - key(a ∩ b))`, with safe division.
pub fn weighted_jaccard<S, F>(a: &S, b: &S, key: F) -> f64
where
    S: SetLike,
    F: Fn(&S) -> f64,
{
    let shared = key(&a.intersection(b));
    safe_div(shared, key(a) + key(b) - shared)
}

/// Jaccard index over element counts. Two empty sets score `0.0`.
pub fn jaccard<S: SetLike>(a: &S, b: &S) -> f64 {
    weighted_jaccard(a, b, |s| s.len() as f64)
}

/// Jaccard index over multiplicities.
pub fn multiset_jaccard<T>(a: &Multiset<T>, b: &Multiset<T>) -> f64
where
    T: Eq + Hash + Clone,
{
    weighted_jaccard(a, b, |m| m.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(values: &[u32]) -> HashSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(safe_div(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_jaccard_basic() {
        assert_eq!(jaccard(&set(&[1, 2, 3]), &set(&[2, 3, 4])), 0.5);
        assert_eq!(jaccard(&set(&[1, 2]), &set(&[1, 2])), 1.0);
        assert_eq!(jaccard(&set(&[1, 2]), &set(&[])), 0.0);
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn test_weighted_jaccard_by_sum() {
        let a = set(&[1, 10]);
        let b = set(&[10, 100]);
        let score = weighted_jaccard(&a, &b, |s| s.iter().sum::<u32>() as f64);

        assert!((score - 10.0 / 111.0).abs() < 1e-12);
    }

    #[test]
    fn test_multiset_jaccard() {
        let a: Multiset<char> = "aab".chars().collect();
        let b: Multiset<char> = "ab".chars().collect();

        // |a ∩ b| = 2, |a| + |b| - 2 = 3
        assert!((multiset_jaccard(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
    }
}
