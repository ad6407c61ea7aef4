//! Whole-table transformations.

use super::model::{Cell, Row, Table, is_blank};
use crate::error::Result;

/// Swap rows and columns.
///
/// Fails with a shape error on ragged input rather than truncating to the
/// shortest row.
pub fn transpose(table: &Table) -> Result<Table> {
    let width = table.width()?;

    Ok((0..width)
        .map(|col| table.iter().map(|row| row[col].clone()).collect::<Row>())
        .collect())
}

/// Drop blank rows and columns.
///
/// A row is dropped when every cell is blank; a column is dropped when it is
/// blank in every row. `blank` lists the characters stripped before the
/// emptiness test (whitespace when `None`). The column decision is made over
/// the whole table first, so the input is fully materialized. Ragged rows are
/// accepted: cells missing from a short row count as blank.
pub fn trim(table: &Table, blank: Option<&str>) -> Table {
    let width = table.iter().map(Vec::len).max().unwrap_or(0);

    let keep: Vec<bool> = (0..width)
        .map(|col| table.column(col).any(|cell| !is_blank(cell, blank)))
        .collect();

    table
        .iter()
        .filter(|row| !row.iter().all(|cell| is_blank(cell.as_deref(), blank)))
        .map(|row| {
            row.iter()
                .zip(&keep)
                .filter_map(|(cell, &kept)| kept.then(|| cell.clone()))
                .collect::<Row>()
        })
        .collect()
}

/// Merge columns position by position, taking the first non-blank cell.
///
/// Positions where every column is blank get `default`. The result is as
/// long as the longest column.
pub fn merge_columns(columns: &[Row], default: Cell, blank: Option<&str>) -> Row {
    let length = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..length)
        .map(|i| {
            columns
                .iter()
                .filter_map(|column| column.get(i))
                .find(|cell| !is_blank(cell.as_deref(), blank))
                .cloned()
                .unwrap_or_else(|| default.clone())
        })
        .collect()
}

/// Reorder columns by a key computed over each column's cells.
///
/// The sort is stable.
pub fn sorted_by_column<K, F>(table: &Table, mut key: F) -> Result<Table>
where
    K: Ord,
    F: FnMut(&Row) -> K,
{
    let mut columns = transpose(table)?.into_rows();
    columns.sort_by_key(|column| key(column));
    restore_rows(table, columns)
}

/// Keep the columns whose cells satisfy `predicate`.
pub fn filter_by_column<F>(table: &Table, mut predicate: F) -> Result<Table>
where
    F: FnMut(&Row) -> bool,
{
    let mut columns = transpose(table)?.into_rows();
    columns.retain(|column| predicate(column));
    restore_rows(table, columns)
}

/// Transpose columns back into rows, keeping the source row count even
/// when no column survives.
fn restore_rows(source: &Table, columns: Vec<Row>) -> Result<Table> {
    if columns.is_empty() {
        return Ok(Table::new(vec![Vec::new(); source.row_count()]));
    }
    transpose(&Table::new(columns))
}
