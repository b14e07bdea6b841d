//! Field values extracted from records

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, SecondsFormat, Utc};

/// Kind of a schema field, which fixes how it compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Case-sensitive text, code-point order
    Text,
    /// Numeric, missing values read as zero
    Number,
    /// Boolean, false before true
    Bool,
    /// Chronological
    Timestamp,
}

impl FieldKind {
    /// Lowercase name for messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Timestamp => "timestamp",
        }
    }
}

/// A borrowed field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text
    Text(&'a str),
    /// Number
    Number(f64),
    /// Boolean
    Bool(bool),
    /// Timestamp
    Timestamp(DateTime<Utc>),
}

impl<'a> Value<'a> {
    /// Kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Bool(_) => FieldKind::Bool,
            Self::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    /// Compare two values of the same kind
    ///
    /// Text compares by code point, so `"AL AYAAN" < "Al Mahtab"`.
    /// Values of different kinds compare equal.
    pub fn compare(&self, other: &Value<'_>) -> Ordering {
        match (self, other) {
            (Self::Text(a), Value::Text(b)) => a.cmp(b),
            (Self::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Self::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Self::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// String form used for equality filters and grouping
    pub fn key(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
            Self::Timestamp(t) => Cow::Owned(t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }

    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Timestamp value, if this is a timestamp
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Boolean value, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
