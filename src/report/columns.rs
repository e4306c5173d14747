//! Column derivation and per-column cell rendering.

use crate::report::input::Record;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Column whose values are shown as calendar dates.
pub const DATE_COLUMN: &str = "Datum";

/// Kind of value the table widget asks a renderer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Display,
    Filter,
    Sort,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// Value is shown as is.
    Raw,
    /// Value is shown as `YYYY-MM-DD` while sorting uses the raw value.
    CalendarDate,
}

impl CellRenderer {
    pub fn render(&self, value: &Value, kind: RenderKind) -> Value {
        match (self, kind) {
            (CellRenderer::Raw, _) => value.clone(),
            (CellRenderer::CalendarDate, RenderKind::Sort | RenderKind::Type) => value.clone(),
            (CellRenderer::CalendarDate, RenderKind::Display | RenderKind::Filter) => {
                match parse_date(value) {
                    Some(date) => Value::String(format_date(date)),
                    None => value.clone(),
                }
            }
        }
    }
}

/// A table column: the record field it reads and how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub renderer: CellRenderer,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let renderer = if name == DATE_COLUMN {
            CellRenderer::CalendarDate
        } else {
            CellRenderer::Raw
        };
        Self { name, renderer }
    }

    /// The raw value of this column in `record`, if the record has the field.
    pub fn cell<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        record.get(&self.name)
    }

    /// Rendered value, `None` when the record lacks the field.
    pub fn render(&self, record: &Record, kind: RenderKind) -> Option<Value> {
        let value = self.cell(record)?;
        Some(self.renderer.render(value, kind))
    }

    /// Display text for plain-text outputs; missing fields and nulls are empty.
    pub fn display_text(&self, record: &Record) -> String {
        match self.render(record, RenderKind::Display) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        }
    }
}

/// Derive the columns from the field order of the first record.
///
/// Later records never add columns: extra fields are ignored and missing ones
/// render as empty cells.
pub fn derive_columns(first: &Record) -> Vec<Column> {
    first.keys().map(Column::new).collect()
}

/// Parse a cell value as a date.
///
/// Strings are accepted as RFC 3339, ISO-8601 date or date-time, or RFC 2822.
/// Dates carrying an offset keep the calendar day of that offset. Numbers are
/// milliseconds since the Unix epoch.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(millis) => millis,
                None => n.as_f64()?.trunc() as i64,
            };
            let dt = DateTime::<Utc>::from_timestamp_millis(millis)?;
            Some(dt.date_naive())
        }
        _ => None,
    }
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }
    let dt = DateTime::parse_from_rfc2822(s).ok()?;
    Some(dt.date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
