//! Column type inference and header detection.

use tracing::debug;

use crate::error::{Result, TabulaError};
use crate::pattern::PatternOrder;
use crate::table::Table;

/// Infers column types against a [`PatternOrder`].
pub struct SchemaAnalyzer {
    patterns: PatternOrder,
}

impl SchemaAnalyzer {
    /// Create an analyzer using the standard pattern order.
    pub fn new() -> Self {
        Self {
            patterns: PatternOrder::default(),
        }
    }

    /// Create an analyzer with a custom pattern order.
    pub fn with_patterns(patterns: PatternOrder) -> Self {
        Self { patterns }
    }

    /// The pattern order in use.
    pub fn patterns(&self) -> &PatternOrder {
        &self.patterns
    }

    /// Name of the inferred pattern for each column.
    ///
    /// Requires a rectangular table. A table without rows has no columns.
    pub fn infer_schema(&self, table: &Table) -> Result<Vec<String>> {
        let schema: Vec<String> = table
            .columns()?
            .iter()
            .map(|column| {
                let rank = self.patterns.match_all(column);
                self.patterns.name_of(rank).to_string()
            })
            .collect();

        debug!("Inferred schema {:?}", schema);
        Ok(schema)
    }

    /// Score how header-like the first row is, in `[0, 1]`.
    ///
    /// Each column is typed from rows 2..N; it counts as header-like when its
    /// first cell does not fit that type and pushes the column to a more
    /// general pattern. The score is the fraction of such columns. The whole
    /// table is materialized; callers choose the threshold.
    pub fn has_header(&self, table: &Table) -> Result<f64> {
        let columns = table.columns()?;
        if columns.is_empty() {
            return Err(TabulaError::EmptyInput(
                "header detection needs at least one column".to_string(),
            ));
        }

        let divergent = columns
            .iter()
            .filter(|column| {
                let (first, rest) = (column[0], &column[1..]);
                let body = self.patterns.match_all(rest);
                self.patterns.match_value(first, body) != body
            })
            .count();

        let score = divergent as f64 / columns.len() as f64;
        debug!(
            "Header score {:.3} ({} of {} columns diverge)",
            score,
            divergent,
            columns.len()
        );
        Ok(score)
    }
}

impl Default for SchemaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer column types with the standard pattern order.
pub fn infer_schema(table: &Table) -> Result<Vec<String>> {
    SchemaAnalyzer::new().infer_schema(table)
}

/// Header score with the standard pattern order.
pub fn has_header(table: &Table) -> Result<f64> {
    SchemaAnalyzer::new().has_header(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Pattern, names};

    #[test]
    fn test_infer_schema() {
        let table = Table::from_strings([
            ["id", "score", "joined", "active"],
            ["1", "2.5", "2024-01-01", "true"],
            ["2", "3", "2024-02-01", "false"],
        ]);

        let body = Table::new(table.rows[1..].to_vec());
        assert_eq!(
            infer_schema(&body).unwrap(),
            vec![names::INTEGER, names::DECIMAL, names::DATE, names::BOOLEAN]
        );
        assert_eq!(infer_schema(&table).unwrap(), vec![names::TEXT; 4]);
    }

    #[test]
    fn test_infer_schema_empty_table() {
        assert!(infer_schema(&Table::default()).unwrap().is_empty());
    }

    #[test]
    fn test_infer_schema_rejects_ragged() {
        let table = Table::from_strings(vec![vec!["1", "2"], vec!["3"]]);
        assert!(matches!(infer_schema(&table), Err(TabulaError::Shape { .. })));
    }

    #[test]
    fn test_has_header() {
        let table = Table::from_strings([["id", "name"], ["1", "Alice"], ["2", "Bob"]]);
        assert_eq!(has_header(&table).unwrap(), 0.5);
    }

    #[test]
    fn test_no_header() {
        let table = Table::from_strings([["1", "x"], ["2", "y"], ["3", "z"]]);
        assert_eq!(has_header(&table).unwrap(), 0.0);
    }

    #[test]
    fn test_full_header() {
        let table = Table::from_strings([["count", "when"], ["10", "2024-03-01"], ["12", "2024-03-02"]]);
        assert_eq!(has_header(&table).unwrap(), 1.0);
    }

    #[test]
    fn test_has_header_needs_columns() {
        assert!(matches!(has_header(&Table::default()), Err(TabulaError::EmptyInput(_))));
    }

    #[test]
    fn test_custom_patterns() {
        let analyzer = SchemaAnalyzer::with_patterns(PatternOrder::new(
            vec![Pattern::regex("code", r"[A-Z]{3}").unwrap()],
            "free",
        ));
        let table = Table::from_strings([["ABC", "abc"], ["XYZ", "ABC"]]);

        assert_eq!(analyzer.infer_schema(&table).unwrap(), vec!["code", "free"]);
    }
}
