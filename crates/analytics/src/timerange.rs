//! Date range filters
//!
//! A [`DateRange`] bounds a timestamp field inclusively on both ends. Either
//! bound may be open. An inverted range (`from > to`) is valid and simply
//! matches nothing.
//!
//! Ranges can be parsed from the same short expressions the dashboard date
//! picker offers: relative (`24h`, `7d`, `2w`, `3m`, `1y`), predefined
//! (`today`, `yesterday`, `wtd`, `mtd`, `qtd`, `ytd`) and custom
//! (`2024-01-01,2024-01-31`, either side may be left empty).

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// An inclusive, optionally open-ended date range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound (inclusive), None = unbounded below
    pub from: Option<DateTime<Utc>>,
    /// Upper bound (inclusive), None = unbounded above
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Create a range with both bounds set
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Unbounded range (matches everything)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Range with only a lower bound
    pub fn since(from: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Range with only an upper bound
    pub fn until(to: DateTime<Utc>) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// Check if neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Check if `from` is after `to`
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    /// Check if a timestamp falls inside the range
    #[inline]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }

    /// Parse a range expression relative to the current time
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_at(s, Utc::now())
    }

    /// Parse a range expression relative to `now`
    pub fn parse_at(s: &str, now: DateTime<Utc>) -> Result<Self> {
        let s = s.trim().to_lowercase();

        if s.is_empty() || s == "all" {
            return Ok(Self::unbounded());
        }

        if let Some(range) = parse_predefined(&s, now) {
            return Ok(range);
        }

        if let Some(range) = parse_relative(&s, now) {
            return Ok(range);
        }

        if s.contains(',') {
            return parse_custom(&s);
        }

        Err(PipelineError::InvalidTimeRange(format!(
            "unknown time range format: {}",
            s
        )))
    }
}

fn parse_predefined(s: &str, now: DateTime<Utc>) -> Option<DateRange> {
    let today = now.date_naive();
    let from = match s {
        "today" => today,
        "yesterday" => {
            let yesterday = today.pred_opt()?;
            return Some(DateRange::new(start_of_day(yesterday), end_of_day(yesterday)));
        }
        "wtd" => today - Duration::days(today.weekday().num_days_from_monday() as i64),
        "mtd" => today.with_day(1)?,
        "qtd" => {
            let month = ((today.month() - 1) / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(today.year(), month, 1)?
        }
        "ytd" => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
        _ => return None,
    };
    Some(DateRange::new(start_of_day(from), end_of_day(today)))
}

// 7d means today plus the 6 days before it; the range stays open above.
fn parse_relative(s: &str, now: DateTime<Utc>) -> Option<DateRange> {
    let unit = s.chars().last()?;
    let num: u32 = s[..s.len() - unit.len_utf8()].parse().ok()?;
    if num == 0 {
        return None;
    }

    let today = now.date_naive();
    let from = match unit {
        'h' => {
            let from = now.checked_sub_signed(Duration::try_hours(num as i64)?)?;
            return Some(DateRange::since(from));
        }
        'd' => today.checked_sub_days(Days::new(num as u64 - 1))?,
        'w' => today.checked_sub_days(Days::new(num as u64 * 7 - 1))?,
        'm' => today.checked_sub_months(Months::new(num))?,
        'y' => today.checked_sub_months(Months::new(num.checked_mul(12)?))?,
        _ => return None,
    };
    Some(DateRange::since(start_of_day(from)))
}

fn parse_custom(s: &str) -> Result<DateRange> {
    let (from, to) = s.split_once(',').ok_or_else(|| {
        PipelineError::InvalidTimeRange(format!("expected FROM,TO: {}", s))
    })?;

    let from = match from.trim() {
        "" => None,
        date => Some(start_of_day(parse_date(date)?)),
    };
    let to = match to.trim() {
        "" => None,
        date => Some(end_of_day(parse_date(date)?)),
    };

    Ok(DateRange { from, to })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        PipelineError::InvalidTimeRange(format!("invalid date format: {} (use YYYY-MM-DD)", s))
    })
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::days(1) - Duration::nanoseconds(1)
}
