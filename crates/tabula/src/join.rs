//! Equi-join of two tables on column-index keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TabulaError};
use crate::table::{Cell, Row, Table};

/// Which unmatched rows a join keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    /// Matched pairs only.
    #[default]
    Inner,
    /// Also unmatched left rows, padded with `None` on the right.
    Left,
    /// Also unmatched right rows, padded with `None` on the left.
    Right,
    /// Unmatched rows from both sides.
    Full,
}

impl JoinType {
    /// Build from outer-join flags: `left_outer` keeps unmatched left rows,
    /// `right_outer` keeps unmatched right rows.
    pub fn from_flags(left_outer: bool, right_outer: bool) -> Self {
        match (left_outer, right_outer) {
            (false, false) => JoinType::Inner,
            (true, false) => JoinType::Left,
            (false, true) => JoinType::Right,
            (true, true) => JoinType::Full,
        }
    }

    /// Returns true if unmatched left rows are kept.
    pub fn keeps_left(&self) -> bool {
        matches!(self, JoinType::Left | JoinType::Full)
    }

    /// Returns true if unmatched right rows are kept.
    pub fn keeps_right(&self) -> bool {
        matches!(self, JoinType::Right | JoinType::Full)
    }
}

/// Join `left` and `right` where `left_key` columns equal `right_key` columns.
///
/// Each output row is the left row followed by the right row. Left rows come
/// out in input order, each followed by its matches in right-table order;
/// with a right outer join the unmatched right rows follow at the end.
/// Padding has the width of the first row of the padded side. The two
/// tables may have different column counts, but every row must contain its
/// key columns. `None` key cells match each other.
pub fn join(
    left: &Table,
    right: &Table,
    left_key: &[usize],
    right_key: &[usize],
    join_type: JoinType,
) -> Result<Table> {
    if left_key.len() != right_key.len() {
        return Err(TabulaError::KeyArity {
            left: left_key.len(),
            right: right_key.len(),
        });
    }

    let mut index: HashMap<Vec<Option<&str>>, Vec<usize>> = HashMap::new();
    for row in 0..right.row_count() {
        index.entry(right.project(row, right_key)?).or_default().push(row);
    }

    let left_padding: Row = vec![None; left.column_count()];
    let right_padding: Row = vec![None; right.column_count()];
    let mut matched = vec![false; right.row_count()];
    let mut joined = Table::default();

    for (row, cells) in left.iter().enumerate() {
        match index.get(&left.project(row, left_key)?) {
            Some(partners) => {
                for &partner in partners {
                    matched[partner] = true;
                    joined.push(concat(cells, &right.rows[partner]));
                }
            }
            None if join_type.keeps_left() => joined.push(concat(cells, &right_padding)),
            None => {}
        }
    }

    if join_type.keeps_right() {
        for (row, cells) in right.iter().enumerate() {
            if !matched[row] {
                joined.push(concat(&left_padding, cells));
            }
        }
    }

    debug!(
        "{:?} join of {} x {} rows produced {} rows",
        join_type,
        left.row_count(),
        right.row_count(),
        joined.row_count()
    );
    Ok(joined)
}

fn concat(left: &[Cell], right: &[Cell]) -> Row {
    left.iter().chain(right).cloned().collect()
}
