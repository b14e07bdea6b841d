//! Pipeline error types

use thiserror::Error;

/// Pipeline errors
///
/// Only field lookups that have no sensible fallback are errors. Filters that
/// match nothing, empty inputs and out-of-range pages produce empty results.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// Sort field is not part of the record schema
    #[error("invalid sort field '{field}' for {record}")]
    InvalidSortField {
        /// Requested field
        field: String,
        /// Record type name
        record: &'static str,
    },

    /// Group-by field is not part of the record schema
    #[error("invalid group field '{field}' for {record}")]
    InvalidGroupField {
        /// Requested field
        field: String,
        /// Record type name
        record: &'static str,
    },

    /// Summary field is unknown or not numeric
    #[error("invalid summary field '{field}' for {record}: {reason}")]
    InvalidSummaryField {
        /// Requested field
        field: String,
        /// Record type name
        record: &'static str,
        /// Why the field was rejected
        reason: &'static str,
    },

    /// Unparseable time range expression
    #[error("invalid time range: {0}")]
    InvalidTimeRange(String),

    /// Unparseable sort direction
    #[error("invalid sort direction: {0}")]
    InvalidDirection(String),

    /// Unparseable filter condition
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

impl PipelineError {
    /// Create an InvalidSortField error
    pub fn invalid_sort_field(field: impl Into<String>, record: &'static str) -> Self {
        Self::InvalidSortField {
            field: field.into(),
            record,
        }
    }

    /// Create an InvalidGroupField error
    pub fn invalid_group_field(field: impl Into<String>, record: &'static str) -> Self {
        Self::InvalidGroupField {
            field: field.into(),
            record,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
