//! In-memory table representation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabulaError};

/// A single value. `None` is the null marker.
pub type Cell = Option<String>;

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// Check if a cell is blank: `None`, or empty once `blank` characters are
/// stripped from both ends (whitespace when `blank` is `None`).
pub fn is_blank(cell: Option<&str>, blank: Option<&str>) -> bool {
    match (cell, blank) {
        (None, _) => true,
        (Some(value), None) => value.trim().is_empty(),
        (Some(value), Some(chars)) => value.trim_matches(|c: char| chars.contains(c)).is_empty(),
    }
}

/// Row-major tabular data.
///
/// Rows may differ in length. Operations that need a rectangular table
/// (transposition, column views, schema analysis) check the shape and fail
/// with [`TabulaError::Shape`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    /// Row data (row-major order).
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Create a table where every cell is present.
    pub fn from_strings<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        rows.into_iter()
            .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect::<Row>())
            .collect()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns, taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        self.width().is_ok()
    }

    /// Column count of a rectangular table.
    pub fn width(&self) -> Result<usize> {
        let expected = self.column_count();
        match self.rows.iter().position(|row| row.len() != expected) {
            Some(row) => Err(TabulaError::Shape {
                row,
                expected,
                found: self.rows[row].len(),
            }),
            None => Ok(expected),
        }
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|cell| cell.as_deref())
    }

    /// Values of one column. Cells missing from short rows read as `None`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|cell| cell.as_deref()))
    }

    /// All columns of a rectangular table.
    pub fn columns(&self) -> Result<Vec<Vec<Option<&str>>>> {
        let width = self.width()?;
        Ok((0..width).map(|c| self.column(c).collect()).collect())
    }

    /// Project one row onto the given column indices, in order.
    pub fn project(&self, row: usize, columns: &[usize]) -> Result<Vec<Option<&str>>> {
        let cells = self.rows.get(row).ok_or(TabulaError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })?;
        columns
            .iter()
            .map(|&column| {
                cells
                    .get(column)
                    .map(|cell| cell.as_deref())
                    .ok_or(TabulaError::ColumnOutOfRange {
                        row,
                        column,
                        width: cells.len(),
                    })
            })
            .collect()
    }

    /// Append a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Consume the table, returning its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
