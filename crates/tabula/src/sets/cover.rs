//! Greedy set cover.

use super::traits::SetLike;

/// Lazy greedy cover of a universe. Created by [`set_cover`] and
/// [`set_cover_by`].
///
/// Each step yields the candidate whose overlap with the still-uncovered
/// part of the universe scores highest under `key`. Ties go to the candidate
/// that came first in the input. The sequence ends once the universe is
/// covered or no remaining candidate overlaps it, so it yields at most one
/// item per distinct candidate.
#[derive(Debug, Clone)]
pub struct SetCover<S, F> {
    uncovered: S,
    candidates: Vec<S>,
    key: F,
}

/// Greedy cover scoring overlaps by size.
pub fn set_cover<S, I>(universe: S, candidates: I) -> SetCover<S, fn(&S) -> usize>
where
    S: SetLike,
    I: IntoIterator<Item = S>,
{
    set_cover_by(universe, candidates, <S as SetLike>::len as fn(&S) -> usize)
}

/// Greedy cover scoring overlaps with `key`.
pub fn set_cover_by<S, I, F, W>(universe: S, candidates: I, key: F) -> SetCover<S, F>
where
    S: SetLike,
    I: IntoIterator<Item = S>,
    F: Fn(&S) -> W,
    W: PartialOrd,
{
    let mut distinct: Vec<S> = Vec::new();
    for candidate in candidates {
        if !distinct.iter().any(|seen| seen.same_as(&candidate)) {
            distinct.push(candidate);
        }
    }

    SetCover {
        uncovered: universe,
        candidates: distinct,
        key,
    }
}

impl<S, F> SetCover<S, F> {
    /// The part of the universe not covered by anything yielded so far.
    pub fn uncovered(&self) -> &S {
        &self.uncovered
    }
}

impl<S, F, W> Iterator for SetCover<S, F>
where
    S: SetLike,
    F: Fn(&S) -> W,
    W: PartialOrd,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.uncovered.is_empty() {
            return None;
        }

        let mut best: Option<(W, usize)> = None;
        for (index, candidate) in self.candidates.iter().enumerate() {
            let overlap = candidate.intersection(&self.uncovered);
            if overlap.is_empty() {
                continue;
            }
            let score = (self.key)(&overlap);
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, index));
            }
        }

        let Some((_, index)) = best else {
            self.candidates.clear();
            return None;
        };

        let chosen = self.candidates.remove(index);
        self.uncovered = self.uncovered.difference(&chosen);
        Some(chosen)
    }
}
