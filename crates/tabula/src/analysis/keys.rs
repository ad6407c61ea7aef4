//! Candidate and foreign key discovery.
//!
//! Both searches are combinatorial in the column count: candidate keys test
//! `C(columns, k)` combinations per size and foreign keys test every
//! ordered `k`-permutation. Callers must keep `max_columns` and key arity
//! small for wide tables.

use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::Result;
use crate::table::Table;

/// Minimal column combinations whose values are unique per row.
///
/// Combinations of 1 to `max_columns` columns are tested in size order. A
/// combination containing an already found key is not minimal and is
/// skipped. Each key is returned as ascending column indices, in discovery
/// order.
pub fn candidate_keys(table: &Table, max_columns: usize) -> Result<Vec<Vec<usize>>> {
    let columns = table.columns()?;
    let width = columns.len();
    let mut keys: Vec<BTreeSet<usize>> = Vec::new();

    for size in 1..=max_columns.min(width) {
        for combination in (0..width).combinations(size) {
            let candidate: BTreeSet<usize> = combination.iter().copied().collect();
            if keys.iter().any(|key| candidate.is_superset(key)) {
                continue;
            }

            if is_distinct(&columns, &combination, table.row_count()) {
                trace!("Columns {:?} are unique", combination);
                keys.push(candidate);
            }
        }
    }

    debug!(
        "Found {} candidate keys over {} columns (max size {})",
        keys.len(),
        width,
        max_columns
    );
    Ok(keys.into_iter().map(|key| key.into_iter().collect()).collect())
}

/// Column mappings in `foreign` that reference `primary_key` in `primary`.
///
/// Every ordered selection of `primary_key.len()` foreign columns is tested;
/// it is returned when each foreign row's projected values occur among the
/// primary table's key values. Column order matters: position `i` of a
/// mapping lines up with `primary_key[i]`.
pub fn foreign_keys(
    primary: &Table,
    primary_key: &[usize],
    foreign: &Table,
) -> Result<Vec<Vec<usize>>> {
    let mappings: Vec<Vec<usize>> = iter_foreign_keys(primary, primary_key, foreign)?.collect();

    debug!(
        "Found {} foreign key mappings for primary key {:?}",
        mappings.len(),
        primary_key
    );
    Ok(mappings)
}

/// Lazy form of [`foreign_keys`], yielding mappings in the same order.
///
/// The primary key values and the foreign columns are collected up front, so
/// shape and index errors surface here. The permutation search itself runs
/// as the iterator is consumed and stops when the caller does.
pub fn iter_foreign_keys<'a>(
    primary: &'a Table,
    primary_key: &[usize],
    foreign: &'a Table,
) -> Result<impl Iterator<Item = Vec<usize>> + use<'a>> {
    let mut referenced: HashSet<Vec<Option<&'a str>>> = HashSet::new();
    for row in 0..primary.row_count() {
        referenced.insert(primary.project(row, primary_key)?);
    }

    let columns = foreign.columns()?;
    let rows = foreign.row_count();
    trace!(
        "Searching {} foreign columns against {} distinct key values",
        columns.len(),
        referenced.len()
    );

    Ok((0..columns.len())
        .permutations(primary_key.len())
        .filter(move |mapping| {
            (0..rows).all(|row| {
                let values: Vec<Option<&str>> = mapping.iter().map(|&c| columns[c][row]).collect();
                referenced.contains(&values)
            })
        }))
}

fn is_distinct(columns: &[Vec<Option<&str>>], combination: &[usize], rows: usize) -> bool {
    let mut seen = HashSet::with_capacity(rows);
    (0..rows).all(|row| {
        let tuple: Vec<Option<&str>> = combination.iter().map(|&c| columns[c][row]).collect();
        seen.insert(tuple)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabulaError;

    #[test]
    fn test_single_column_key() {
        let table = Table::from_strings([["a", "1"], ["b", "2"], ["a", "3"]]);
        assert_eq!(candidate_keys(&table, 2).unwrap(), vec![vec![1]]);
    }

    #[test]
    fn test_composite_key() {
        let table = Table::from_strings([
            ["2024", "jan", "10"],
            ["2024", "feb", "10"],
            ["2025", "jan", "12"],
        ]);

        assert!(candidate_keys(&table, 1).unwrap().is_empty());
        assert_eq!(candidate_keys(&table, 2).unwrap(), vec![vec![0, 1], vec![1, 2]]);
    }

    #[test]
    fn test_several_single_keys() {
        let table = Table::from_strings([["1", "x", "same"], ["2", "y", "same"]]);
        assert_eq!(candidate_keys(&table, 3).unwrap(), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_nulls_take_part_in_uniqueness() {
        let table = Table::new(vec![vec![None], vec![None]]);
        assert!(candidate_keys(&table, 1).unwrap().is_empty());
    }

    #[test]
    fn test_max_columns_zero() {
        let table = Table::from_strings([["1"], ["2"]]);
        assert!(candidate_keys(&table, 0).unwrap().is_empty());
    }

    #[test]
    fn test_foreign_keys() {
        let customers = Table::from_strings([["c1", "Alice"], ["c2", "Bob"]]);
        let orders = Table::from_strings([["o1", "c2", "5"], ["o2", "c1", "7"], ["o3", "c2", "1"]]);

        assert_eq!(foreign_keys(&customers, &[0], &orders).unwrap(), vec![vec![1]]);
    }

    #[test]
    fn test_iter_foreign_keys_stops_early() {
        let primary = Table::from_strings([["1"], ["2"]]);
        let foreign = Table::from_strings([["1", "2", "x", "1"], ["2", "1", "y", "2"]]);

        let mut mappings = iter_foreign_keys(&primary, &[0], &foreign).unwrap();
        assert_eq!(mappings.next(), Some(vec![0]));
        assert_eq!(mappings.next(), Some(vec![1]));

        let all = foreign_keys(&primary, &[0], &foreign).unwrap();
        assert_eq!(all, vec![vec![0], vec![1], vec![3]]);
    }

    #[test]
    fn test_iter_foreign_keys_reports_shape_up_front() {
        let primary = Table::from_strings([["1"]]);
        let foreign = Table::from_strings(vec![vec!["1", "2"], vec!["1"]]);

        assert!(matches!(
            iter_foreign_keys(&primary, &[0], &foreign).map(|_| ()),
            Err(TabulaError::Shape { .. })
        ));
    }

    #[test]
    fn test_foreign_keys_respect_order() {
        let primary = Table::from_strings([["1", "a"], ["2", "b"]]);
        let foreign = Table::from_strings([["a", "1", "x"], ["b", "2", "y"]]);

        assert_eq!(foreign_keys(&primary, &[0, 1], &foreign).unwrap(), vec![vec![1, 0]]);
    }

    #[test]
    fn test_foreign_keys_primary_key_out_of_range() {
        let primary = Table::from_strings([["1"]]);
        let foreign = Table::from_strings([["1"]]);

        assert!(matches!(
            foreign_keys(&primary, &[4], &foreign),
            Err(TabulaError::ColumnOutOfRange { column: 4, .. })
        ));
    }
}
