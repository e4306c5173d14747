//! Display strings and fixed resources for the rendered report.
//!
//! All user-visible text lives in one table so a deployment can swap it out
//! with a JSON file instead of touching the rendering code.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const NO_CONTENT: &str =
    "Report-Inhalt ist leer. Bitte prüfen Sie, ob der Report korrekt generiert wurde.";
const NO_VALID_DATA: &str = "Keine Daten verfügbar oder Fehler beim Laden.";
const EXPORT_BUTTON_CLASS: &str =
    "bg-green-500 hover:bg-green-700 text-white font-bold py-2 px-4 rounded mt-4";
const LANGUAGE_URL: &str = "//cdn.datatables.net/plug-ins/1.10.24/i18n/German.json";

/// Locale table used by the adapter, the widget configuration and the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Strings {
    /// Shown when no report data was supplied.
    pub no_content: String,
    /// Shown when textual report data is not valid JSON.
    pub parse_error: String,
    /// Shown when the data is not a non-empty list of records.
    pub no_valid_data: String,
    /// Heading of the error panel shown when the table cannot be built.
    pub table_error_heading: String,
    /// Prefix placed before the widget's error message.
    pub table_error_prefix: String,
    /// Label of the spreadsheet export button.
    pub export_button: String,
    /// CSS classes applied to the export button.
    pub export_button_class: String,
    /// Subject used in export names when the metadata has none.
    pub unknown_subject: String,
    /// Leading word of export file names and titles.
    pub export_prefix: String,
    /// Joins the subject in the export title ("Report für ...").
    pub title_for: String,
    /// Joins the creation date in the export title ("... vom ...").
    pub title_from: String,
    /// Localization resource fetched by the widget.
    pub language_url: String,
    /// `lang` attribute of the generated page.
    pub page_lang: String,
    /// `<title>` and heading of the generated page.
    pub page_title: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            no_content: NO_CONTENT.to_string(),
            parse_error: "Fehler beim Parsen der Report-Daten.".to_string(),
            no_valid_data: NO_VALID_DATA.to_string(),
            table_error_heading: "Fehler beim Erstellen der Tabelle".to_string(),
            table_error_prefix: "DataTable Error: ".to_string(),
            export_button: "Als Excel herunterladen".to_string(),
            export_button_class: EXPORT_BUTTON_CLASS.to_string(),
            unknown_subject: "Unbekannt".to_string(),
            export_prefix: "Report".to_string(),
            title_for: "für".to_string(),
            title_from: "vom".to_string(),
            language_url: LANGUAGE_URL.to_string(),
            page_lang: "de".to_string(),
            page_title: "Report".to_string(),
        }
    }
}

impl Strings {
    /// Parse a (possibly partial) string table; missing keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve protocol-relative URLs against `https:`.
    ///
    /// A page opened from disk would otherwise look them up under `file:`.
    pub fn with_absolute_urls(mut self) -> Self {
        if self.language_url.starts_with("//") {
            self.language_url = format!("https:{}", self.language_url);
        }
        self
    }
}
