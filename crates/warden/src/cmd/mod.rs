//! Table commands
//!
//! Every subcommand is the same pipeline run over a different record
//! collection: fetch the full collection, apply the query, render the page.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};
use warden_analytics::{Condition, DateRange, Direction, Query, Record, run as run_pipeline};
use warden_config::PipelineConfig;
use warden_provider::DataProvider;

use crate::output::{OutputFormat, render};

/// Record collection behind a subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Customers,
    Alerts,
    Usage,
    Emails,
}

impl Collection {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Alerts => "alerts",
            Self::Usage => "usage",
            Self::Emails => "emails",
        }
    }
}

/// Query arguments shared by all table commands
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Free-text search (case-insensitive)
    #[arg(value_name = "SEARCH")]
    pub search: Option<String>,

    /// Filter condition, `field=value` or `field>number` (repeatable)
    #[arg(short = 'w', long = "where", value_name = "EXPR")]
    pub conditions: Vec<String>,

    /// Date range (7d, 24h, mtd, ytd, 2024-01-01,2024-01-31, all)
    #[arg(short, long)]
    pub range: Option<String>,

    /// Date field the range applies to (defaults to the record's date field)
    #[arg(long)]
    pub date_field: Option<String>,

    /// Sort field
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: i64,

    /// Rows per page (defaults to the config value)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show a distribution by this field (repeatable)
    #[arg(short, long)]
    pub group_by: Vec<String>,

    /// Summarize this numeric field (repeatable)
    #[arg(long)]
    pub summarize: Vec<String>,

    /// Include disabled customers and inactive services
    #[arg(long)]
    pub show_disabled: bool,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

impl QueryArgs {
    /// Build a pipeline query, filling gaps from the config defaults
    pub fn to_query(&self, defaults: &PipelineConfig) -> Result<Query> {
        let mut query = Query::new()
            .with_include_disabled(self.show_disabled || defaults.show_disabled)
            .with_page(self.page)
            .with_page_size(self.page_size.unwrap_or(defaults.page_size));

        if let Some(search) = &self.search {
            query = query.with_search(search.as_str());
        }

        for expr in &self.conditions {
            let condition =
                Condition::parse(expr).with_context(|| format!("invalid --where '{}'", expr))?;
            query = query.with_condition(condition);
        }

        if let Some(range) = &self.range {
            let range =
                DateRange::parse(range).with_context(|| format!("invalid --range '{}'", range))?;
            query = query.with_date_range(range);
        }

        if let Some(field) = &self.date_field {
            query = query.with_date_field(field.as_str());
        }

        if let Some(field) = &self.sort {
            let direction = if self.desc {
                Direction::Descending
            } else {
                Direction::Ascending
            };
            query = query.with_sort(field.as_str(), direction);
        }

        for field in &self.group_by {
            query = query.with_group_by(field.as_str());
        }
        for field in &self.summarize {
            query = query.with_summary(field.as_str());
        }

        Ok(query)
    }
}

/// Run a table command and print the result to stdout
pub async fn run(
    provider: &dyn DataProvider,
    collection: Collection,
    args: QueryArgs,
    defaults: &PipelineConfig,
) -> Result<()> {
    let format: OutputFormat = args
        .format
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid format: {}", e))?;
    let query = args.to_query(defaults)?;

    let fetch_context = || format!("failed to fetch {} from {}", collection.as_str(), provider.name());
    let rendered = match collection {
        Collection::Customers => {
            let records = provider.fetch_customers().await.with_context(fetch_context)?;
            execute(&records, &query, format)?
        }
        Collection::Alerts => {
            let records = provider.fetch_alerts().await.with_context(fetch_context)?;
            execute(&records, &query, format)?
        }
        Collection::Usage => {
            let records = provider.fetch_usage_details().await.with_context(fetch_context)?;
            execute(&records, &query, format)?
        }
        Collection::Emails => {
            let records = provider.fetch_alert_emails().await.with_context(fetch_context)?;
            execute(&records, &query, format)?
        }
    };

    print!("{}", rendered);
    Ok(())
}

/// Run the pipeline over one collection and render the result
fn execute<R: Record + Serialize>(records: &[R], query: &Query, format: OutputFormat) -> Result<String> {
    debug!(records = records.len(), "running query");
    let result = run_pipeline(records, query).context("query failed")?;
    info!(
        record = R::schema().record,
        matched = result.total_count,
        page = result.page,
        total_pages = result.total_pages,
        "query complete"
    );
    render(&result, format)
}
