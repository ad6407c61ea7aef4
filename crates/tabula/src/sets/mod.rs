//! Generic set algebra: subset search, filtering, similarity, and cover.

mod cover;
mod multiset;
mod ops;
mod similarity;
mod traits;

pub use cover::{SetCover, set_cover, set_cover_by};
pub use multiset::Multiset;
pub use ops::{
    best_subset, drop_subsets, drop_subsets_of, drop_supersets, drop_supersets_of,
    enumerate_subsets,
};
pub use similarity::{jaccard, multiset_jaccard, safe_div, weighted_jaccard};
pub use traits::SetLike;
