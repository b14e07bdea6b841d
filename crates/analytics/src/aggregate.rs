//! Distributions and numeric summaries
//!
//! Both operate on the filtered set, before pagination, so the dashboard
//! cards reflect the active filters but not the current page.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::schema::Record;
use crate::value::FieldKind;

/// One value of a distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Field value (string form)
    pub value: String,
    /// Number of records with this value
    pub count: usize,
    /// Share of the total in percent, one decimal, rounded half up
    pub percentage: f64,
}

/// Count of records per distinct field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Grouped field
    pub field: String,
    /// Number of records grouped
    pub total: usize,
    /// Groups by count descending; ties in order of first appearance
    pub groups: Vec<Group>,
}

impl Distribution {
    /// Look up a group by value
    pub fn get(&self, value: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.value == value)
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Statistics over a numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Summarized field
    pub field: String,
    /// Number of records
    pub count: usize,
    /// Sum of values
    pub sum: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Average value
    pub avg: f64,
}

/// Percentage of `count` in `total`, rounded half up to one decimal
///
/// Computed in integer tenths so that e.g. 1/8 = 12.5% exactly and
/// 1/16 = 6.25% rounds to 6.3%.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let (count, total) = (count as u128, total as u128);
    let tenths = (count * 2000 + total) / (2 * total);
    tenths as f64 / 10.0
}

/// Group records by a field and count each distinct value
///
/// # Errors
///
/// Returns `InvalidGroupField` if the field is not in the record schema.
pub fn aggregate<R: Record>(records: &[&R], field: &str) -> Result<Distribution> {
    let schema = R::schema();
    let accessor = schema
        .field(field)
        .ok_or_else(|| PipelineError::invalid_group_field(field, schema.record))?;

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        *counts.entry(accessor.get(*record).key().into_owned()).or_default() += 1;
    }

    let total = records.len();
    let mut groups: Vec<Group> = counts
        .into_iter()
        .map(|(value, count)| Group {
            value,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    // Stable: equal counts stay in first-appearance order
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(Distribution {
        field: field.to_string(),
        total,
        groups,
    })
}

/// Sum, min, max and average of a numeric field
///
/// Empty input yields all zeros.
///
/// # Errors
///
/// Returns `InvalidSummaryField` if the field is unknown or not numeric.
pub fn summarize<R: Record>(records: &[&R], field: &str) -> Result<Summary> {
    let schema = R::schema();
    let accessor = schema.field(field).ok_or_else(|| PipelineError::InvalidSummaryField {
        field: field.to_string(),
        record: schema.record,
        reason: "unknown field",
    })?;

    if accessor.kind() != FieldKind::Number {
        return Err(PipelineError::InvalidSummaryField {
            field: field.to_string(),
            record: schema.record,
            reason: "not a numeric field",
        });
    }

    let values: Vec<f64> = records
        .iter()
        .filter_map(|r| accessor.get(*r).as_number())
        .collect();

    if values.is_empty() {
        return Ok(Summary {
            field: field.to_string(),
            count: 0,
            sum: 0.0,
            min: 0.0,
            max: 0.0,
            avg: 0.0,
        });
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(Summary {
        field: field.to_string(),
        count: values.len(),
        sum,
        min,
        max,
        avg: sum / values.len() as f64,
    })
}
