//! Result rendering for table, JSON and CSV output

use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use warden_analytics::{QueryResult, Record};

/// Widest a table cell may get before it is cut off
const MAX_CELL_WIDTH: usize = 40;

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Table,
    /// Pretty-printed JSON of the whole result
    Json,
    /// Page rows as CSV
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("unknown format '{}' (use table, json, csv)", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render a query result in the given format
pub fn render<R: Record + Serialize>(result: &QueryResult<'_, R>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => render_table(result),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => render_csv(result),
    }
}

fn cells<R: Record>(record: &R) -> Vec<String> {
    R::schema()
        .fields
        .iter()
        .map(|field| field.get(record).key().into_owned())
        .collect()
}

fn render_table<R: Record>(result: &QueryResult<'_, R>) -> Result<String> {
    let mut out = String::new();

    if result.is_empty() {
        writeln!(out, "(no matching {} records)", R::schema().record)?;
    } else {
        let header: Vec<&str> = R::schema().fields.iter().map(|f| f.name()).collect();
        let rows: Vec<Vec<String>> = result.items.iter().map(|r| cells(*r)).collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        for width in &mut widths {
            *width = (*width).min(MAX_CELL_WIDTH);
        }

        let line: Vec<String> = header
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        writeln!(out, "{}", line.join(" | ").trim_end())?;

        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(out, "{}", sep.join("-+-"))?;

        for row in &rows {
            let line: Vec<String> = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
            writeln!(out, "{}", line.join(" | ").trim_end())?;
        }
    }

    writeln!(
        out,
        "\npage {} of {} ({} matching, {} per page)",
        result.page, result.total_pages, result.total_count, result.page_size
    )?;

    for distribution in &result.groups {
        writeln!(out, "\n{} ({} records)", distribution.field, distribution.total)?;
        for group in &distribution.groups {
            writeln!(
                out,
                "  {:<24} {:>6} {:>6.1}%",
                group.value, group.count, group.percentage
            )?;
        }
    }

    if !result.summaries.is_empty() {
        writeln!(out)?;
    }
    for summary in &result.summaries {
        writeln!(
            out,
            "{}: count={} sum={} min={} max={} avg={:.2}",
            summary.field, summary.count, summary.sum, summary.min, summary.max, summary.avg
        )?;
    }

    Ok(out)
}

/// Left-align to `width` characters, cutting long values with an ellipsis
fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len > width {
        let cut: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        format!("{:width$}", value, width = width)
    }
}

fn render_csv<R: Record>(result: &QueryResult<'_, R>) -> Result<String> {
    let mut out = String::new();

    let header: Vec<&str> = R::schema().fields.iter().map(|f| f.name()).collect();
    writeln!(out, "{}", header.join(","))?;

    for record in &result.items {
        let values: Vec<String> = cells(*record).iter().map(|c| csv_escape(c)).collect();
        writeln!(out, "{}", values.join(","))?;
    }

    Ok(out)
}

/// Escape value for CSV output
fn csv_escape(s: &str) -> String {
    // Quote if contains comma, newline, or quote
    if s.contains(',') || s.contains('\n') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_analytics::{Direction, Query, run};
    use warden_provider::sample;

    #[test]
    fn test_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("File Sync & Share"), "File Sync & Share");
    }

    #[test]
    fn test_pad_truncates_by_chars() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdefgh", 6), "abc...");
        assert_eq!(pad("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_csv_rows_follow_sort() {
        let customers = sample::customers();
        let query = Query::new()
            .with_sort("localStorageGB", Direction::Descending)
            .with_page_size(2);
        let result = run(&customers, &query).unwrap();

        let csv = render(&result, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,"));
        assert!(lines[1].contains("TechCorp Solutions"));
        assert!(lines[2].contains("LAITH EMC"));
    }

    #[test]
    fn test_table_includes_groups_and_summaries() {
        let alerts = sample::alerts();
        let query = Query::new().with_group_by("severity");
        let result = run(&alerts, &query).unwrap();

        let table = render(&result, OutputFormat::Table).unwrap();
        assert!(table.starts_with("id "));
        assert!(table.contains("page 1 of 1 (6 matching, 10 per page)"));
        assert!(table.contains("severity (6 records)"));
        assert!(table.contains("Critical"));
        assert!(table.contains("33.3%"));

        let customers = sample::customers();
        let query = Query::new().with_summary("localStorageGB");
        let table = render(&run(&customers, &query).unwrap(), OutputFormat::Table).unwrap();
        assert!(table.contains("localStorageGB: count=6"));
    }

    #[test]
    fn test_table_empty_page() {
        let alerts = sample::alerts();
        let query = Query::new().with_search("no such resource");
        let result = run(&alerts, &query).unwrap();

        let table = render(&result, OutputFormat::Table).unwrap();
        assert!(table.starts_with("(no matching alert records)"));
        assert!(table.contains("page 1 of 1 (0 matching"));
    }

    #[test]
    fn test_json_is_full_result() {
        let emails = sample::alert_emails();
        let query = Query::new().with_group_by("status");
        let result = run(&emails, &query).unwrap();

        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_count"], 5);
        assert_eq!(value["items"][0]["alertId"], "alert-001");
        assert_eq!(value["groups"][0]["field"], "status");
        assert_eq!(value["groups"][0]["groups"][0]["value"], "Sent");
    }
}
