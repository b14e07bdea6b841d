//! Warden Analytics
//!
//! The record query pipeline behind every dashboard table.
//!
//! # Overview
//!
//! Given a collection of records and a [`Query`], the pipeline produces the
//! requested page plus summary statistics. It is a pure function: no I/O, no
//! shared state, same output for the same input.
//!
//! - **Filter**: free-text search, equality and threshold conditions, date
//!   range, enabled toggle (all AND'd)
//! - **Sort**: stable, by any schema field, ascending or descending
//! - **Paginate**: 1-based pages, out-of-range pages are empty
//! - **Aggregate**: distribution by a categorical field, numeric summaries
//!
//! Aggregates always see the whole filtered set, never just the current page.
//!
//! # Usage
//!
//! ```ignore
//! use warden_analytics::{Condition, Direction, Query, run};
//!
//! let query = Query::new()
//!     .with_condition(Condition::gt("localStorageGB", 5000.0))
//!     .with_include_disabled(false)
//!     .with_sort("name", Direction::Ascending)
//!     .with_group_by("enabled");
//!
//! let result = run(&customers, &query)?;
//! println!("{} of {} customers", result.items.len(), result.total_count);
//! ```
//!
//! # Record Types
//!
//! Each record type describes its fields once in a static [`Schema`]; the
//! pipeline itself is generic over [`Record`].

pub mod aggregate;
pub mod error;
pub mod fields;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod query;
pub mod schema;
pub mod sort;
pub mod timerange;
pub mod value;

#[cfg(test)]
mod filter_test;
#[cfg(test)]
mod test_util;

// Re-exports for convenience
pub use aggregate::{Distribution, Group, Summary, aggregate, percentage, summarize};
pub use error::{PipelineError, Result};
pub use filter::filter;
pub use paginate::{normalize_page_size, paginate, total_pages};
pub use pipeline::{QueryResult, run};
pub use query::{ALL, Condition, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Query};
pub use schema::{Field, Record, Schema};
pub use sort::{Direction, Sort, sort};
pub use timerange::DateRange;
pub use value::{FieldKind, Value};
