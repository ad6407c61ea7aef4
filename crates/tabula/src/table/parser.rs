//! Line-oriented text parsers producing tables.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{Row, Table};
use super::ops::trim;
use crate::error::{Result, TabulaError};

/// Characters treated as blank when trimming a Markdown table. Covers the
/// `|---|:-:|` alignment row and the empty edge cells around outer pipes.
const MARKDOWN_BLANK: &str = " \t-:";

/// How a line is split into cells by [`parse_lines`].
#[derive(Debug, Clone)]
pub enum Separator {
    /// Runs of whitespace; leading and trailing whitespace yields no cells.
    Whitespace,
    /// A literal, non-empty delimiter.
    Literal(String),
    /// A regex matching the delimiter.
    Pattern(Regex),
}

/// What the regex parsers do with a line that does not match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Abort the parse with [`TabulaError::NoMatch`].
    #[default]
    Fail,
    /// Emit an all-`None` "unparsed" row of the expected arity.
    Placeholder,
}

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Handling of lines the patterns do not match.
    pub mismatch: MismatchPolicy,
}

/// Regex-driven line parser.
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse each line with a full-line match of `pattern`; capture groups
    /// become cells, with unmatched optional groups as `""`.
    ///
    /// `pattern` is compiled here with anchors around it, so a full match is
    /// tried even where an unanchored leftmost match would stop early. Use
    /// inline flags such as `(?i)` for matching options.
    pub fn parse_by_regex<I, L>(&self, lines: I, pattern: &str) -> Result<Table>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let anchored = Regex::new(&format!(r"\A(?:{})\z", pattern))?;
        let arity = anchored.captures_len() - 1;

        let mut table = Table::default();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let row: Row = match anchored.captures(line) {
                Some(caps) => (1..caps.len())
                    .map(|group| Some(caps.get(group).map_or("", |m| m.as_str()).to_string()))
                    .collect(),
                None => self.on_mismatch(index + 1, pattern, 0, arity)?,
            };
            table.push(row);
        }

        Ok(table)
    }

    /// Extract one cell per pattern from each line.
    ///
    /// Each pattern is searched from where the previous match ended, so the
    /// patterns pick fields off the line in order.
    pub fn parse_by_regexes<I, L>(&self, lines: I, patterns: &[Regex]) -> Result<Table>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut table = Table::default();

        'lines: for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let mut row = Vec::with_capacity(patterns.len());
            let mut cursor = 0;

            for pattern in patterns {
                match pattern.find_at(line, cursor) {
                    Some(found) => {
                        row.push(Some(found.as_str().to_string()));
                        cursor = found.end();
                    }
                    None => {
                        table.push(self.on_mismatch(
                            index + 1,
                            pattern.as_str(),
                            cursor,
                            patterns.len(),
                        )?);
                        continue 'lines;
                    }
                }
            }

            table.push(row);
        }

        Ok(table)
    }

    fn on_mismatch(&self, line: usize, pattern: &str, position: usize, arity: usize) -> Result<Row> {
        match self.config.mismatch {
            MismatchPolicy::Fail => Err(TabulaError::NoMatch {
                line,
                pattern: pattern.to_string(),
                position,
            }),
            MismatchPolicy::Placeholder => {
                debug!(
                    "Line {} does not match /{}/ from offset {}, emitting placeholder row",
                    line, pattern, position
                );
                Ok(vec![None; arity])
            }
        }
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split each line into a row. A line with no separator yields a one-cell row.
pub fn parse_lines<I, L>(lines: I, separator: &Separator) -> Result<Table>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    if let Separator::Literal(sep) = separator {
        if sep.is_empty() {
            return Err(TabulaError::EmptyInput("literal separator".to_string()));
        }
    }

    Ok(lines
        .into_iter()
        .map(|line| {
            let line = line.as_ref();
            let cells: Vec<&str> = match separator {
                Separator::Whitespace => line.split_whitespace().collect(),
                Separator::Literal(sep) => line.split(sep.as_str()).collect(),
                Separator::Pattern(re) => re.split(line).collect(),
            };
            cells.into_iter().map(|cell| Some(cell.to_string())).collect::<Row>()
        })
        .collect())
}

/// Parse the cells of a Markdown table.
///
/// Blank lines are skipped, lines are split on pipes not preceded by a
/// backslash (`\|` becomes a literal `|`), the alignment row and empty edge
/// columns are trimmed, and surrounding whitespace is stripped per cell.
pub fn parse_markdown(text: &str) -> Table {
    let raw: Table = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(split_unescaped_pipes)
        .collect();

    trim(&raw, Some(MARKDOWN_BLANK))
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(|value| value.trim().to_string()))
                .collect::<Row>()
        })
        .collect()
}

/// Full-line regex parse that fails on the first unmatched line.
pub fn parse_by_regex<I, L>(lines: I, pattern: &str) -> Result<Table>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    LineParser::new().parse_by_regex(lines, pattern)
}

/// Sequential multi-pattern parse that fails on the first unmatched line.
pub fn parse_by_regexes<I, L>(lines: I, patterns: &[Regex]) -> Result<Table>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    LineParser::new().parse_by_regexes(lines, patterns)
}

fn split_unescaped_pipes(line: &str) -> Row {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(Some(std::mem::take(&mut current))),
            c => current.push(c),
        }
    }
    cells.push(Some(current));

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        let table = parse_lines(["a,b,c", "1,2", "x"], &Separator::Literal(",".into())).unwrap();

        assert_eq!(
            table,
            Table::from_strings(vec![vec!["a", "b", "c"], vec!["1", "2"], vec!["x"]])
        );
    }

    #[test]
    fn test_parse_whitespace() {
        let table = parse_lines(["  a  b\tc "], &Separator::Whitespace).unwrap();
        assert_eq!(table, Table::from_strings([["a", "b", "c"]]));
    }

    #[test]
    fn test_parse_regex_separator() {
        let sep = Separator::Pattern(Regex::new(r"\s*;\s*").unwrap());
        let table = parse_lines(["a ; b;c"], &sep).unwrap();
        assert_eq!(table, Table::from_strings([["a", "b", "c"]]));
    }

    #[test]
    fn test_parse_rejects_empty_literal() {
        let result = parse_lines(["abc"], &Separator::Literal(String::new()));
        assert!(matches!(result, Err(TabulaError::EmptyInput(_))));
    }

    #[test]
    fn test_parse_markdown() {
        let text = "| name | note |\n|------|:----:|\n| a | b\\|c |\n\n| d | e |\n";
        let table = parse_markdown(text);

        assert_eq!(
            table,
            Table::from_strings([["name", "note"], ["a", "b|c"], ["d", "e"]])
        );
    }

    #[test]
    fn test_split_keeps_other_backslashes() {
        assert_eq!(
            split_unescaped_pipes(r"a\n|b"),
            vec![Some(r"a\n".to_string()), Some("b".to_string())]
        );
    }

    #[test]
    fn test_parse_by_regex() {
        let table = parse_by_regex(["x=1;tag", "y=2"], r"(\w+)=(\d+)(?:;(\w+))?").unwrap();

        assert_eq!(table, Table::from_strings([["x", "1", "tag"], ["y", "2", ""]]));
    }

    #[test]
    fn test_parse_by_regex_requires_full_match() {
        let result = parse_by_regex(["12", "12abc"], r"(\d+)");

        match result {
            Err(TabulaError::NoMatch { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected no-match error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_by_regex_inline_flags() {
        let table = parse_by_regex(["ABC", "abc"], "(?i)(abc)").unwrap();
        assert_eq!(table, Table::from_strings([["ABC"], ["abc"]]));
    }

    #[test]
    fn test_parse_by_regex_prefers_full_match_over_leftmost() {
        let table = parse_by_regex(["ab"], "(a|ab)").unwrap();
        assert_eq!(table, Table::from_strings([["ab"]]));
    }

    #[test]
    fn test_parse_by_regex_invalid_pattern() {
        assert!(matches!(parse_by_regex(["x"], "(unclosed"), Err(TabulaError::Regex(_))));
    }

    #[test]
    fn test_parse_by_regex_placeholder() {
        let parser = LineParser::with_config(ParserConfig {
            mismatch: MismatchPolicy::Placeholder,
        });
        let table = parser.parse_by_regex(["1-2", "oops"], r"(\d+)-(\d+)").unwrap();

        assert_eq!(table.rows[1], vec![None, None]);
        assert_eq!(table.get(0, 1), Some("2"));
    }

    #[test]
    fn test_mismatch_policy_serialization() {
        let json = serde_json::to_string(&MismatchPolicy::Placeholder).unwrap();
        assert_eq!(json, r#""placeholder""#);

        let parsed: MismatchPolicy = serde_json::from_str(r#""fail""#).unwrap();
        assert_eq!(parsed, MismatchPolicy::default());
    }

    #[test]
    fn test_parse_by_regexes() {
        let patterns = vec![
            Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap(),
            Regex::new(r"[A-Z]+").unwrap(),
            Regex::new(r"\d+").unwrap(),
        ];
        let table = parse_by_regexes(["on 2024-01-05 level WARN code 42"], &patterns).unwrap();

        assert_eq!(table, Table::from_strings([["2024-01-05", "WARN", "42"]]));
    }

    #[test]
    fn test_parse_by_regexes_searches_after_previous_match() {
        let patterns = vec![Regex::new(r"\d+").unwrap(), Regex::new(r"[a-z]+").unwrap()];
        let result = parse_by_regexes(["abc 123"], &patterns);

        match result {
            Err(TabulaError::NoMatch { line, position, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(position, 7);
            }
            other => panic!("Expected no-match error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_by_regexes_placeholder() {
        let parser = LineParser::with_config(ParserConfig {
            mismatch: MismatchPolicy::Placeholder,
        });
        let patterns = vec![Regex::new(r"\d+").unwrap(), Regex::new(r"[a-z]+").unwrap()];
        let table = parser.parse_by_regexes(["7 up", "abc 123"], &patterns).unwrap();

        assert_eq!(table.rows[0], vec![Some("7".to_string()), Some("up".to_string())]);
        assert_eq!(table.rows[1], vec![None, None]);
    }
}
