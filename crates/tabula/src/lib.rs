//! Tabula: table inference and set algebra helpers for tabular datasets.
//!
//! Tabula is a library of stateless functions over in-memory tables and
//! sets. It parses delimited, Markdown, and regex-segmented text into tables,
//! infers column types from ordered value patterns, scores header rows,
//! discovers candidate and foreign keys, and joins tables on column keys.
//!
//! # Core Principles
//!
//! - **Stateless**: Every call is a pure transformation of its inputs
//! - **Explicit shape**: Operations that need rectangular tables say so and
//!   fail with [`TabulaError::Shape`] instead of truncating
//! - **Deterministic**: Tie-breaks follow input order
//!
//! # Example
//!
//! ```
//! use tabula::{Table, candidate_keys, has_header, infer_schema};
//!
//! let table = Table::from_strings([["id", "name"], ["1", "Alice"], ["2", "Bob"]]);
//!
//! assert_eq!(has_header(&table).unwrap(), 0.5);
//!
//! let body = Table::new(table.rows[1..].to_vec());
//! assert_eq!(infer_schema(&body).unwrap(), vec!["integer", "text"]);
//! assert_eq!(candidate_keys(&body, 2).unwrap(), vec![vec![0], vec![1]]);
//! ```

pub mod analysis;
pub mod error;
pub mod join;
pub mod pattern;
pub mod sets;
pub mod table;

pub use analysis::{
    SchemaAnalyzer, candidate_keys, foreign_keys, has_header, infer_schema, iter_foreign_keys,
};
pub use error::{Result, TabulaError};
pub use join::{JoinType, join};
pub use pattern::{Pattern, PatternOrder};
pub use table::{Cell, CsvConfig, LineParser, ParserConfig, Row, Separator, Table};
