//! Declarative field schemas
//!
//! A schema maps field names to extractors. The pipeline never touches record
//! fields directly; everything goes through the schema of the record type.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::value::{FieldKind, Value};

/// A record type that can flow through the pipeline
pub trait Record: Sized + 'static {
    /// Static field schema for this record type
    fn schema() -> &'static Schema<Self>;
}

enum Accessor<R> {
    Text(fn(&R) -> &str),
    Number(fn(&R) -> f64),
    Bool(fn(&R) -> bool),
    Timestamp(fn(&R) -> DateTime<Utc>),
}

/// A named field with its extractor
pub struct Field<R> {
    name: &'static str,
    accessor: Accessor<R>,
}

impl<R> Field<R> {
    /// Text field
    pub const fn text(name: &'static str, get: fn(&R) -> &str) -> Self {
        Self {
            name,
            accessor: Accessor::Text(get),
        }
    }

    /// Numeric field; optional values should map missing to zero
    pub const fn number(name: &'static str, get: fn(&R) -> f64) -> Self {
        Self {
            name,
            accessor: Accessor::Number(get),
        }
    }

    /// Boolean field
    pub const fn bool(name: &'static str, get: fn(&R) -> bool) -> Self {
        Self {
            name,
            accessor: Accessor::Bool(get),
        }
    }

    /// Timestamp field
    pub const fn timestamp(name: &'static str, get: fn(&R) -> DateTime<Utc>) -> Self {
        Self {
            name,
            accessor: Accessor::Timestamp(get),
        }
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field kind
    pub fn kind(&self) -> FieldKind {
        match self.accessor {
            Accessor::Text(_) => FieldKind::Text,
            Accessor::Number(_) => FieldKind::Number,
            Accessor::Bool(_) => FieldKind::Bool,
            Accessor::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    /// Extract this field from a record
    #[inline]
    pub fn get<'r>(&self, record: &'r R) -> Value<'r> {
        match self.accessor {
            Accessor::Text(f) => Value::Text(f(record)),
            Accessor::Number(f) => Value::Number(f(record)),
            Accessor::Bool(f) => Value::Bool(f(record)),
            Accessor::Timestamp(f) => Value::Timestamp(f(record)),
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Field table for one record type
pub struct Schema<R: 'static> {
    /// Record type name (for error messages)
    pub record: &'static str,
    /// All fields, in display order
    pub fields: &'static [Field<R>],
    /// Fields matched by free-text search
    pub search_fields: &'static [&'static str],
    /// Timestamp field used by date ranges unless the query overrides it
    pub date_field: Option<&'static str>,
    /// Boolean field hidden by the "include disabled" toggle when false
    pub toggle_field: Option<&'static str>,
}

impl<R: 'static> Schema<R> {
    /// Look up a field by name (exact, case-sensitive)
    pub fn field(&self, name: &str) -> Option<&Field<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All field names, in display order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Resolved search fields (unknown names are skipped)
    pub fn searchable(&self) -> Vec<&Field<R>> {
        self.search_fields
            .iter()
            .filter_map(|name| self.field(name))
            .collect()
    }
}

impl<R: 'static> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("record", &self.record)
            .field("fields", &self.fields)
            .field("search_fields", &self.search_fields)
            .field("date_field", &self.date_field)
            .field("toggle_field", &self.toggle_field)
            .finish()
    }
}
