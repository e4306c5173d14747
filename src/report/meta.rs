//! Report metadata and the export names derived from it.

use crate::report::columns::format_date;
use crate::report::strings::Strings;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Optional display metadata supplied alongside the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    /// Name of the person the report is about.
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Creation date of the report, e.g. `2024-01-02`.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Resolved subject and date used to label the spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMeta {
    pub subject: String,
    pub created_at: String,
    prefix: String,
    title_for: String,
    title_from: String,
}

impl ExportMeta {
    /// Resolve export metadata, falling back to the placeholder subject and
    /// `today` for whatever the metadata leaves out.
    pub fn resolve(meta: Option<&ReportMeta>, strings: &Strings, today: NaiveDate) -> Self {
        let subject = meta
            .and_then(|m| non_empty(m.patient_name.as_deref()))
            .unwrap_or(strings.unknown_subject.as_str())
            .to_string();
        let created_at = meta
            .and_then(|m| non_empty(m.created_at.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format_date(today));

        Self {
            subject,
            created_at,
            prefix: strings.export_prefix.clone(),
            title_for: strings.title_for.clone(),
            title_from: strings.title_from.clone(),
        }
    }

    /// File name of the export, without extension.
    pub fn file_name(&self) -> String {
        format!("{}_{}_{}", self.prefix, self.subject, self.created_at)
    }

    /// Title written into the exported sheet.
    pub fn title(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.prefix, self.title_for, self.subject, self.title_from, self.created_at
        )
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
