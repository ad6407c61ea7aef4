//! Error types for the Tabula library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tabula operations.
#[derive(Debug, Error)]
pub enum TabulaError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row does not have the column count the operation assumes.
    #[error("Shape error at row {row}: expected {expected} columns, found {found}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row index past the end of the table.
    #[error("Row {row} out of range (table has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// A key or projection refers to a column the row does not have.
    #[error("Column {column} out of range at row {row} (row has {width} columns)")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },

    /// Join keys of different lengths.
    #[error("Join key arity mismatch: left has {left} columns, right has {right}")]
    KeyArity { left: usize, right: usize },

    /// A required regex match failed on an input line.
    #[error("Line {line} does not match /{pattern}/ from offset {position}")]
    NoMatch {
        line: usize,
        pattern: String,
        position: usize,
    },

    /// The operation needs at least one row or column.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for Tabula operations.
pub type Result<T> = std::result::Result<T, TabulaError>;
