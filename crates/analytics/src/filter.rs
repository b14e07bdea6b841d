//! Record filtering
//!
//! All active predicates are AND'd:
//!
//! | Predicate | Active when | Matches when |
//! |-----------|-------------|--------------|
//! | search | non-empty | any search field contains the text, ignoring case |
//! | `Eq` | value != `"all"` | field string equals value exactly |
//! | `Gt` | threshold is finite | numeric field > threshold |
//! | toggle | `include_disabled` is false | toggle field is true |
//! | date range | any bound set | from <= date field <= to |
//!
//! An inverted date range matches nothing. Conditions on fields the schema
//! doesn't know match nothing either; they are logged, not rejected.

use tracing::{debug, warn};

use crate::query::{Condition, Query};
use crate::schema::{Field, Record, Schema};
use crate::timerange::DateRange;
use crate::value::FieldKind;

/// Filter records, keeping input order
pub fn filter<'r, R: Record>(records: &'r [R], query: &Query) -> Vec<&'r R> {
    let schema = R::schema();

    if query.date_range.is_inverted() {
        debug!(
            record = schema.record,
            from = ?query.date_range.from,
            to = ?query.date_range.to,
            "date range is inverted, nothing matches"
        );
        return Vec::new();
    }

    let Some(matcher) = Matcher::compile(schema, query) else {
        return Vec::new();
    };

    let matched: Vec<&R> = records.iter().filter(|r| matcher.matches(r)).collect();

    debug!(
        record = schema.record,
        input = records.len(),
        matched = matched.len(),
        "filtered records"
    );

    matched
}

/// Query predicates resolved against a schema
struct Matcher<'q, R: 'static> {
    needle: Option<String>,
    search: Vec<&'static Field<R>>,
    equals: Vec<(&'static Field<R>, Expected<'q>)>,
    thresholds: Vec<(&'static Field<R>, f64)>,
    toggle: Option<&'static Field<R>>,
    date: Option<(&'static Field<R>, DateRange)>,
}

/// Right-hand side of an equality condition
#[derive(Clone, Copy)]
enum Expected<'q> {
    /// Numeric fields compare by value, so `9390.0` matches `9390`
    Number(f64),
    Text(&'q str),
}

impl<'q, R: Record> Matcher<'q, R> {
    /// Resolve field names; returns None if some predicate can never match
    fn compile(schema: &'static Schema<R>, query: &'q Query) -> Option<Self> {
        let needle = (!query.search.is_empty()).then(|| query.search.to_lowercase());

        let mut equals = Vec::new();
        let mut thresholds = Vec::new();
        for condition in query.active_conditions() {
            let field = resolve(schema, condition.field(), None)?;
            match condition {
                Condition::Eq { value, .. } => {
                    let expected = match value.trim().parse::<f64>() {
                        Ok(n) if field.kind() == FieldKind::Number => Expected::Number(n),
                        _ => Expected::Text(value.as_str()),
                    };
                    equals.push((field, expected));
                }
                Condition::Gt { threshold, .. } => {
                    if field.kind() != FieldKind::Number {
                        warn!(
                            record = schema.record,
                            field = field.name(),
                            kind = field.kind().as_str(),
                            "threshold on non-numeric field, nothing matches"
                        );
                        return None;
                    }
                    thresholds.push((field, *threshold));
                }
            }
        }

        let toggle = if query.include_disabled {
            None
        } else {
            schema.toggle_field.and_then(|name| schema.field(name))
        };

        let date = if query.date_range.is_unbounded() {
            None
        } else {
            match query.date_field.as_deref().or(schema.date_field) {
                Some(name) => Some((
                    resolve(schema, name, Some(FieldKind::Timestamp))?,
                    query.date_range,
                )),
                None => None,
            }
        };

        Some(Self {
            needle,
            search: schema.searchable(),
            equals,
            thresholds,
            toggle,
            date,
        })
    }

    #[inline]
    fn matches(&self, record: &R) -> bool {
        if let Some(field) = self.toggle
            && field.get(record).as_bool() == Some(false)
        {
            return false;
        }

        if let Some(ref needle) = self.needle
            && !self
                .search
                .iter()
                .any(|f| f.get(record).key().to_lowercase().contains(needle.as_str()))
        {
            return false;
        }

        if !self
            .equals
            .iter()
            .all(|(field, expected)| match *expected {
                Expected::Number(n) => field.get(record).as_number() == Some(n),
                Expected::Text(value) => field.get(record).key() == value,
            })
        {
            return false;
        }

        if !self.thresholds.iter().all(|(field, threshold)| {
            field
                .get(record)
                .as_number()
                .is_some_and(|n| n > *threshold)
        }) {
            return false;
        }

        if let Some((field, range)) = &self.date {
            return field
                .get(record)
                .as_timestamp()
                .is_some_and(|at| range.contains(at));
        }

        true
    }
}

fn resolve<R: 'static>(
    schema: &'static Schema<R>,
    name: &str,
    kind: Option<FieldKind>,
) -> Option<&'static Field<R>> {
    let Some(field) = schema.field(name) else {
        warn!(record = schema.record, field = name, "unknown filter field, nothing matches");
        return None;
    };

    if let Some(kind) = kind
        && field.kind() != kind
    {
        warn!(
            record = schema.record,
            field = name,
            expected = kind.as_str(),
            actual = field.kind().as_str(),
            "filter field has wrong kind, nothing matches"
        );
        return None;
    }

    Some(field)
}
