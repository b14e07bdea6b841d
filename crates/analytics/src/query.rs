//! Query parameters
//!
//! A [`Query`] is an immutable description of what the caller wants to see:
//! search text, conditions, date range, sort, page and summaries. It is built
//! fresh from UI state for every pipeline run.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::sort::{Direction, Sort};
use crate::timerange::DateRange;

/// Sentinel value that disables an equality condition
pub const ALL: &str = "all";

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum allowed page size
pub const MAX_PAGE_SIZE: usize = 10_000;

/// A single filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// Field equals value; inactive when value is `"all"`
    ///
    /// Text is compared exactly (case-sensitive). On numeric fields a value
    /// that parses as a number is compared numerically.
    Eq {
        /// Field name
        field: String,
        /// Expected value
        value: String,
    },
    /// Field is strictly greater than threshold; inactive when not finite
    Gt {
        /// Field name
        field: String,
        /// Threshold
        threshold: f64,
    },
}

impl Condition {
    /// Create an equality condition
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a greater-than condition
    pub fn gt(field: impl Into<String>, threshold: f64) -> Self {
        Self::Gt {
            field: field.into(),
            threshold,
        }
    }

    /// Field this condition applies to
    pub fn field(&self) -> &str {
        match self {
            Self::Eq { field, .. } | Self::Gt { field, .. } => field,
        }
    }

    /// Check if this condition participates in filtering
    pub fn is_active(&self) -> bool {
        match self {
            Self::Eq { value, .. } => value != ALL,
            Self::Gt { threshold, .. } => threshold.is_finite(),
        }
    }

    /// Parse a condition expression
    ///
    /// Supported forms:
    /// - `field=value` (equality)
    /// - `field>number` (strictly greater than)
    pub fn parse(s: &str) -> Result<Self> {
        // The first operator character splits field from value, so values may
        // themselves contain '=' or '>'.
        let Some(pos) = s.find(['=', '>']) else {
            return Err(PipelineError::InvalidFilter(format!(
                "expected field=value or field>number: {}",
                s
            )));
        };

        let field = parse_field(&s[..pos], s)?;
        let value = s[pos + 1..].trim();

        if s[pos..].starts_with('>') {
            let threshold: f64 = value.parse().map_err(|_| {
                PipelineError::InvalidFilter(format!("threshold is not a number: {}", s))
            })?;
            Ok(Self::gt(field, threshold))
        } else {
            Ok(Self::eq(field, value))
        }
    }
}

fn parse_field<'a>(field: &'a str, expr: &str) -> Result<&'a str> {
    let field = field.trim();
    if field.is_empty() {
        return Err(PipelineError::InvalidFilter(format!("missing field name: {}", expr)));
    }
    Ok(field)
}

/// Complete query parameters for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Free-text search (case-insensitive substring); empty matches all
    pub search: String,
    /// Conditions, AND'd together
    pub conditions: Vec<Condition>,
    /// When false, records whose toggle field is false are hidden
    pub include_disabled: bool,
    /// Date range on the date field
    pub date_range: DateRange,
    /// Overrides the schema's default date field
    pub date_field: Option<String>,
    /// Sort order (None = input order)
    pub sort: Option<Sort>,
    /// 1-based page number
    pub page: i64,
    /// Records per page
    pub page_size: usize,
    /// Fields to build distributions for
    pub group_by: Vec<String>,
    /// Numeric fields to summarize
    pub summarize: Vec<String>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            conditions: Vec::new(),
            include_disabled: true,
            date_range: DateRange::unbounded(),
            date_field: None,
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            group_by: Vec::new(),
            summarize: Vec::new(),
        }
    }
}

impl Query {
    /// Create a query that matches everything, first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Add a condition
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Set whether disabled records are included
    pub fn with_include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = include;
        self
    }

    /// Set the date range
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Apply the date range to a field other than the schema default
    pub fn with_date_field(mut self, field: impl Into<String>) -> Self {
        self.date_field = Some(field.into());
        self
    }

    /// Set the sort order
    pub fn with_sort(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort = Some(Sort::new(field, direction));
        self
    }

    /// Set the page number (1-based)
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Add a distribution field
    pub fn with_group_by(mut self, field: impl Into<String>) -> Self {
        self.group_by.push(field.into());
        self
    }

    /// Add a numeric summary field
    pub fn with_summary(mut self, field: impl Into<String>) -> Self {
        self.summarize.push(field.into());
        self
    }

    /// Conditions that participate in filtering
    pub fn active_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter().filter(|c| c.is_active())
    }
}
