//! Plain-text view of a report, ordered the way the widget first shows it.

use crate::report::columns::Column;
use crate::report::input::Record;
use serde_json::Value;
use std::cmp::Ordering;

/// Header texts and display cells of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Build display rows sorted by the first column, descending, on raw values.
    pub fn new(records: &[Record], columns: &[Column]) -> Self {
        let mut ordered: Vec<&Record> = records.iter().collect();
        if let Some(first) = columns.first() {
            ordered.sort_by(|a, b| compare_raw(first.cell(b), first.cell(a)));
        }

        let rows: Vec<Vec<String>> = ordered
            .into_iter()
            .map(|record| columns.iter().map(|c| c.display_text(record)).collect())
            .collect();

        Self {
            headers: columns.iter().map(|c| c.name.clone()).collect(),
            rows,
        }
    }
}

/// Missing and null values sort before everything else.
fn compare_raw(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
