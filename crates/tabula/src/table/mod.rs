//! Table model, text parsers, and whole-table transformations.

mod csv_io;
mod model;
mod ops;
mod parser;

pub use csv_io::{CsvConfig, dump_csv, load_csv, read_csv, write_csv};
pub use model::{Cell, Row, Table, is_blank};
pub use ops::{filter_by_column, merge_columns, sorted_by_column, transpose, trim};
pub use parser::{
    LineParser, MismatchPolicy, ParserConfig, Separator, parse_by_regex, parse_by_regexes,
    parse_lines, parse_markdown,
};
