//! Stable sorting by schema field

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::schema::Record;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl Direction {
    /// Parse direction from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(PipelineError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Sort field and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Field name
    pub field: String,
    /// Direction
    #[serde(default)]
    pub direction: Direction,
}

impl Sort {
    /// Create a sort order
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Sort records by a schema field
///
/// The sort is stable in both directions: descending reverses the comparator,
/// not the output, so equal records keep their input order.
///
/// # Errors
///
/// Returns `InvalidSortField` if the field is not in the record schema, even
/// when there is nothing to sort.
pub fn sort<'r, R: Record>(
    mut records: Vec<&'r R>,
    field: &str,
    direction: Direction,
) -> Result<Vec<&'r R>> {
    let schema = R::schema();
    let field = schema
        .field(field)
        .ok_or_else(|| PipelineError::invalid_sort_field(field, schema.record))?;

    records.sort_by(|a, b| {
        let ord = field.get(*a).compare(&field.get(*b));
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });

    Ok(records)
}
