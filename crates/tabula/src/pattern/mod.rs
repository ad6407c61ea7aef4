//! Ordered value-shape patterns for column type inference.
//!
//! A [`PatternOrder`] lists patterns from most to least specific and always
//! ends in a catch-all fallback. A column's type is the name of the earliest
//! pattern that matches every one of its non-blank values.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::table::is_blank;

/// Names used by the standard pattern order.
pub mod names {
    pub const BOOLEAN: &str = "boolean";
    pub const INTEGER: &str = "integer";
    pub const DECIMAL: &str = "decimal";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const DATETIME: &str = "datetime";
    pub const TEXT: &str = "text";
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // ISO date
    "%Y/%m/%d", // Alt ISO
    "%m/%d/%Y", // US date
    "%d-%m-%Y", // European date
    "%d.%m.%Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

static STANDARD_ORDER: Lazy<PatternOrder> = Lazy::new(|| {
    PatternOrder::new(
        vec![
            Pattern::regex(names::BOOLEAN, r"(?i:true|false|yes|no)").unwrap(),
            Pattern::regex(names::INTEGER, r"[+-]?\d+").unwrap(),
            Pattern::regex(names::DECIMAL, r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap(),
            Pattern::predicate(names::DATE, looks_like_date),
            Pattern::predicate(names::TIME, looks_like_time),
            Pattern::predicate(names::DATETIME, looks_like_datetime),
        ],
        names::TEXT,
    )
});

fn looks_like_date(value: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}

fn looks_like_time(value: &str) -> bool {
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
}

fn looks_like_datetime(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

#[derive(Clone)]
enum Matcher {
    Regex(Regex),
    Predicate(fn(&str) -> bool),
    Any,
}

/// A named value-shape classifier.
#[derive(Clone)]
pub struct Pattern {
    name: String,
    matcher: Matcher,
}

impl Pattern {
    /// A pattern that must match the whole (trimmed) value.
    pub fn regex(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let anchored = Regex::new(&format!(r"\A(?:{})\z", pattern))?;
        Ok(Self {
            name: name.into(),
            matcher: Matcher::Regex(anchored),
        })
    }

    /// A pattern decided by a function of the (trimmed) value.
    pub fn predicate(name: impl Into<String>, test: fn(&str) -> bool) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Predicate(test),
        }
    }

    /// A pattern matching every value.
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Any,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check a single value. Surrounding whitespace is ignored.
    pub fn matches(&self, value: &str) -> bool {
        let value = value.trim();
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(value),
            Matcher::Predicate(test) => test(value),
            Matcher::Any => true,
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.matcher {
            Matcher::Regex(re) => re.as_str().to_string(),
            Matcher::Predicate(_) => "<predicate>".to_string(),
            Matcher::Any => "<any>".to_string(),
        };
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("matcher", &kind)
            .finish()
    }
}

/// Patterns ordered from most to least specific, ending in a fallback.
#[derive(Debug, Clone)]
pub struct PatternOrder {
    patterns: Vec<Pattern>,
}

impl PatternOrder {
    /// Build an order from `patterns` followed by a catch-all named `fallback`.
    pub fn new(patterns: Vec<Pattern>, fallback: impl Into<String>) -> Self {
        let mut patterns = patterns;
        patterns.push(Pattern::any(fallback));
        Self { patterns }
    }

    /// The built-in order: boolean, integer, decimal, date, time, datetime,
    /// then text.
    pub fn standard() -> &'static PatternOrder {
        &STANDARD_ORDER
    }

    /// All patterns, fallback last.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Get a pattern by rank.
    pub fn get(&self, rank: usize) -> Option<&Pattern> {
        self.patterns.get(rank)
    }

    /// Rank of the pattern called `name`.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.name == name)
    }

    /// Rank of the earliest pattern, at or after `start`, that matches
    /// `value`. Blank values match anything and return `start`.
    pub fn match_value(&self, value: Option<&str>, start: usize) -> usize {
        let last = self.patterns.len() - 1;
        let start = start.min(last);

        match value {
            Some(v) if !is_blank(Some(v), None) => (start..last)
                .find(|&rank| self.patterns[rank].matches(v))
                .unwrap_or(last),
            _ => start,
        }
    }

    /// Rank of the earliest pattern that matches every non-blank value.
    ///
    /// With no non-blank values this is the most specific pattern.
    pub fn match_all(&self, values: &[Option<&str>]) -> usize {
        let present: Vec<&str> = values
            .iter()
            .copied()
            .flatten()
            .filter(|v| !v.trim().is_empty())
            .collect();

        let last = self.patterns.len() - 1;
        (0..last)
            .find(|&rank| present.iter().all(|v| self.patterns[rank].matches(v)))
            .unwrap_or(last)
    }

    /// Name of the pattern at `rank`, clamped to the fallback.
    pub fn name_of(&self, rank: usize) -> &str {
        let last = self.patterns.len() - 1;
        self.patterns[rank.min(last)].name()
    }
}

impl Default for PatternOrder {
    fn default() -> Self {
        Self::standard().clone()
    }
}
