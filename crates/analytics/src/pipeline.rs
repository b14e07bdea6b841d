//! Pipeline composition
//!
//! `filter → sort → paginate`, with distributions and summaries computed on
//! the filtered set.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{Distribution, Summary, aggregate, summarize};
use crate::error::Result;
use crate::filter::filter;
use crate::paginate::{normalize_page_size, paginate};
use crate::query::Query;
use crate::schema::Record;
use crate::sort::sort;

/// Output of one pipeline run
#[derive(Debug, Serialize)]
pub struct QueryResult<'r, R> {
    /// Records on the requested page
    pub items: Vec<&'r R>,
    /// Matching records before pagination
    pub total_count: usize,
    /// Page count for the full match set (at least 1)
    pub total_pages: usize,
    /// Requested page, as given
    pub page: i64,
    /// Effective page size
    pub page_size: usize,
    /// One distribution per group-by field
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Distribution>,
    /// One summary per summarized field
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summaries: Vec<Summary>,
}

impl<R> QueryResult<'_, R> {
    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a distribution by field
    pub fn distribution(&self, field: &str) -> Option<&Distribution> {
        self.groups.iter().find(|d| d.field == field)
    }

    /// Look up a summary by field
    pub fn summary(&self, field: &str) -> Option<&Summary> {
        self.summaries.iter().find(|s| s.field == field)
    }
}

/// Run a query over a record collection
///
/// # Errors
///
/// Fails on an unknown sort, group-by or summary field. Everything else
/// degrades to empty results.
pub fn run<'r, R: Record>(records: &'r [R], query: &Query) -> Result<QueryResult<'r, R>> {
    let matched = filter(records, query);

    let groups = query
        .group_by
        .iter()
        .map(|field| aggregate(&matched, field))
        .collect::<Result<Vec<_>>>()?;

    let summaries = query
        .summarize
        .iter()
        .map(|field| summarize(&matched, field))
        .collect::<Result<Vec<_>>>()?;

    let total_count = matched.len();
    let ordered = match &query.sort {
        Some(order) => sort(matched, &order.field, order.direction)?,
        None => matched,
    };

    let page_size = normalize_page_size(query.page_size);
    let (page, total_pages) = paginate(&ordered, query.page, page_size);

    debug!(
        record = R::schema().record,
        input = records.len(),
        matched = total_count,
        page = query.page,
        page_size,
        returned = page.len(),
        "query complete"
    );

    Ok(QueryResult {
        items: page.to_vec(),
        total_count,
        total_pages,
        page: query.page,
        page_size,
        groups,
        summaries,
    })
}
