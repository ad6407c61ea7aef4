//! Delimited file input and output.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use super::model::{Row, Table};
use crate::error::{Result, TabulaError};

/// CSV reader/writer configuration.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Accept (and write) rows with differing field counts.
    pub flexible: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            flexible: true,
        }
    }
}

impl CsvConfig {
    /// Tab-separated configuration.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Load a delimited file. Every record, including the first, becomes a row.
pub fn load_csv(path: impl AsRef<Path>, config: &CsvConfig) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TabulaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_csv(file, config)
}

/// Read delimited records from any reader.
pub fn read_csv<R: Read>(reader: R, config: &CsvConfig) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .has_headers(false)
        .flexible(config.flexible)
        .from_reader(reader);

    let mut table = Table::default();
    for result in reader.records() {
        let record = result?;
        table.push(record.iter().map(|s| Some(s.to_string())).collect::<Row>());
    }

    Ok(table)
}

/// Write a table to a delimited file, replacing its contents. `None` cells
/// are written as empty fields.
pub fn dump_csv(path: impl AsRef<Path>, table: &Table, config: &CsvConfig) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TabulaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    write_csv(file, table, config).map_err(|e| match e {
        TabulaError::Csv(err) if err.is_io_error() => TabulaError::Io {
            path: path.to_path_buf(),
            source: io::Error::from(err),
        },
        other => other,
    })
}

/// Write a table to any writer.
pub fn write_csv<W: Write>(writer: W, table: &Table, config: &CsvConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .flexible(config.flexible)
        .from_writer(writer);

    for row in table {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}
