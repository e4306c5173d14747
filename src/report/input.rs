//! Report input normalization.
//!
//! Turns whatever the caller supplies (nothing, serialized text, or an already
//! decoded JSON value) into a non-empty list of records, or the reason why no
//! table can be shown.

use crate::report::strings::Strings;
use serde_json::{Map, Value};
use thiserror::Error;

/// One row of the report: field name to value, in declaration order.
pub type Record = Map<String, Value>;

/// Older report generators wrapped the record list in an object under this key.
pub const LEGACY_KEY: &str = "Behandlungen";

/// Report data as handed over by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportSource {
    /// No report was provided.
    Absent,
    /// Serialized report that still needs parsing.
    Text(String),
    /// Already decoded report.
    Value(Value),
}

impl ReportSource {
    /// Interpret the contents of a report document.
    ///
    /// Blank documents count as absent. A document that decodes as JSON is
    /// passed on as that value (so a JSON string holding a serialized report
    /// takes the textual path), anything else is kept as text and will be
    /// reported as a parse error.
    pub fn from_document(contents: &str) -> Self {
        if contents.trim().is_empty() {
            return ReportSource::Absent;
        }
        match serde_json::from_str::<Value>(contents) {
            Ok(value) => ReportSource::Value(value),
            Err(_) => ReportSource::Text(contents.to_string()),
        }
    }
}

/// Why the report cannot be shown as a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fallback {
    #[error("no report data provided")]
    NoContent,
    #[error("report data could not be parsed")]
    ParseError,
    #[error("report data is not a non-empty list of records")]
    NoValidData,
}

impl Fallback {
    /// Message shown to the user in place of the table.
    pub fn message<'a>(&self, strings: &'a Strings) -> &'a str {
        match self {
            Fallback::NoContent => &strings.no_content,
            Fallback::ParseError => &strings.parse_error,
            Fallback::NoValidData => &strings.no_valid_data,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Fallback::NoContent => "text-lg text-yellow-600",
            Fallback::ParseError => "text-lg text-red-600",
            Fallback::NoValidData => "text-lg text-gray-600",
        }
    }
}

/// Validate and normalize report data into records.
///
/// Checks run in order and the first match wins: absent data, unparseable
/// text, legacy wrapper unwrapping, then the non-empty list check.
pub fn normalize(source: ReportSource) -> Result<Vec<Record>, Fallback> {
    let value = match source {
        ReportSource::Absent => None,
        ReportSource::Text(text) => Some(Value::String(text)),
        ReportSource::Value(value) => Some(value),
    };

    let value = match value {
        Some(value) if is_truthy(&value) => value,
        _ => {
            log::info!("No report data available");
            return Err(Fallback::NoContent);
        }
    };

    log::debug!("Report data type: {}", type_name(&value));
    log::debug!("Is array: {}", value.is_array());

    let value = match value {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => {
                log::debug!("Parsed report text to {}", type_name(&parsed));
                parsed
            }
            Err(e) => {
                log::error!("Failed to parse report data: {}", e);
                return Err(Fallback::ParseError);
            }
        },
        other => other,
    };

    let value = unwrap_legacy(value);

    let entries = match value {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => {
            log::info!("No valid report data found");
            return Err(Fallback::NoValidData);
        }
    };

    log::debug!("Report data entries: {}", entries.len());
    log::debug!("First entry: {}", entries[0]);

    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Value::Object(record) => record,
            other => {
                log::warn!("Skipping fields of non-record entry: {}", other);
                Record::new()
            }
        })
        .collect())
}

fn unwrap_legacy(value: Value) -> Value {
    match value {
        Value::Object(mut object) if object.get(LEGACY_KEY).is_some_and(is_truthy) => {
            log::debug!("Using legacy '{}' list", LEGACY_KEY);
            object.remove(LEGACY_KEY).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Mirrors how the hosting page treated missing values: null, false, zero
/// and the empty string all count as "nothing there".
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_data_is_no_content() {
        assert_eq!(normalize(ReportSource::Absent), Err(Fallback::NoContent));
        assert_eq!(
            normalize(ReportSource::Value(Value::Null)),
            Err(Fallback::NoContent)
        );
        assert_eq!(
            normalize(ReportSource::Text(String::new())),
            Err(Fallback::NoContent)
        );
        assert_eq!(
            normalize(ReportSource::Value(json!(false))),
            Err(Fallback::NoContent)
        );
    }

    #[test]
    fn unparseable_text_is_parse_error() {
        assert_eq!(
            normalize(ReportSource::Text("[{\"a\": 1".to_string())),
            Err(Fallback::ParseError)
        );
        assert_eq!(
            normalize(ReportSource::Value(json!("not json"))),
            Err(Fallback::ParseError)
        );
    }

    #[test]
    fn text_is_parsed_into_records() {
        let text = r#"[{"Datum": "2024-01-01", "Wert": 3}]"#;
        let records = normalize(ReportSource::Text(text.to_string())).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Wert"], json!(3));
    }

    #[test]
    fn legacy_wrapper_is_unwrapped() {
        let source = ReportSource::Value(json!({
            "Behandlungen": [{"Datum": "2024-01-01"}, {"Datum": "2024-01-02"}]
        }));
        let records = normalize(source).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["Datum"], json!("2024-01-02"));
    }

    #[test]
    fn legacy_wrapper_inside_text_is_unwrapped() {
        let text = r#"{"Behandlungen": [{"Leistung": "Beratung"}]}"#;
        let records = normalize(ReportSource::Text(text.to_string())).unwrap();
        assert_eq!(records[0]["Leistung"], json!("Beratung"));
    }

    #[test]
    fn empty_or_non_list_is_no_valid_data() {
        assert_eq!(
            normalize(ReportSource::Value(json!([]))),
            Err(Fallback::NoValidData)
        );
        assert_eq!(
            normalize(ReportSource::Value(json!({"other": [1]}))),
            Err(Fallback::NoValidData)
        );
        assert_eq!(
            normalize(ReportSource::Value(json!({"Behandlungen": []}))),
            Err(Fallback::NoValidData)
        );
        assert_eq!(
            normalize(ReportSource::Value(json!(42))),
            Err(Fallback::NoValidData)
        );
    }

    #[test]
    fn non_record_entries_become_empty_rows() {
        let records = normalize(ReportSource::Value(json!([1, 2]))).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn later_non_record_entries_become_empty_rows() {
        let source = ReportSource::Value(json!([{"a": 1}, "stray"]));
        let records = normalize(source).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].is_empty());
    }

    #[test]
    fn document_contents_pick_the_right_source() {
        assert_eq!(ReportSource::from_document("  \n"), ReportSource::Absent);
        assert_eq!(
            ReportSource::from_document("[1]"),
            ReportSource::Value(json!([1]))
        );
        assert_eq!(
            ReportSource::from_document("{oops"),
            ReportSource::Text("{oops".to_string())
        );
        assert_eq!(
            normalize(ReportSource::from_document("{oops")),
            Err(Fallback::ParseError)
        );
    }

    #[test]
    fn fallback_messages_come_from_strings() {
        let strings = Strings::default();
        assert_eq!(
            Fallback::ParseError.message(&strings),
            "Fehler beim Parsen der Report-Daten."
        );
        assert_eq!(Fallback::NoContent.css_class(), "text-lg text-yellow-600");
    }
}
