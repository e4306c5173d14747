//! Report table adapter: from report data to the markup of the table container.

use crate::report::columns::derive_columns;
use crate::report::input::{normalize, Fallback, ReportSource};
use crate::report::meta::{ExportMeta, ReportMeta};
use crate::report::page::html_escape;
use crate::report::strings::Strings;
use crate::report::widget::{TableConfig, Widget};
use chrono::NaiveDate;

/// Id of the element the rendered output is placed in.
pub const CONTAINER_ID: &str = "reportTable";

/// Everything the adapter needs for one rendering pass.
pub struct RenderRequest<'a> {
    pub source: ReportSource,
    pub meta: Option<&'a ReportMeta>,
    pub strings: &'a Strings,
    /// Date used when the metadata has no creation date.
    pub today: NaiveDate,
}

/// Terminal result of a rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The widget was initialized; holds its markup.
    Table(String),
    /// The widget failed to initialize; holds its error message.
    ErrorPanel(String),
    /// No table could be built from the input.
    Message(Fallback),
}

impl Outcome {
    /// Markup placed inside the container element.
    pub fn container_html(&self, strings: &Strings) -> String {
        match self {
            Outcome::Table(markup) => markup.clone(),
            Outcome::ErrorPanel(message) => format!(
                r#"<div class="bg-red-50 border border-red-200 rounded-lg p-4">
    <p class="text-lg text-red-600 font-bold">{heading}</p>
    <p class="text-sm text-red-500 mt-2">{prefix}{message}</p>
</div>"#,
                heading = html_escape(&strings.table_error_heading),
                prefix = html_escape(&strings.table_error_prefix),
                message = html_escape(message),
            ),
            Outcome::Message(fallback) => format!(
                r#"<p class="{}">{}</p>"#,
                fallback.css_class(),
                html_escape(fallback.message(strings))
            ),
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Outcome::Table(_))
    }
}

/// Validate the report, derive its columns and hand everything to `widget`.
///
/// Invalid input ends in [`Outcome::Message`] before the widget is touched;
/// a widget error is caught here and becomes [`Outcome::ErrorPanel`].
pub fn render_report(request: RenderRequest<'_>, widget: &dyn Widget) -> Outcome {
    let records = match normalize(request.source) {
        Ok(records) => records,
        Err(fallback) => return Outcome::Message(fallback),
    };

    let columns = derive_columns(&records[0]);
    log::debug!(
        "Column order taken from first record: {:?}",
        columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );

    let export = ExportMeta::resolve(request.meta, request.strings, request.today);
    log::debug!("Export file name: {}", export.file_name());

    let config = TableConfig::build(&records, &columns, &export, request.strings);
    log::info!("Creating table with {} columns", columns.len());

    match widget.initialize(CONTAINER_ID, &config) {
        Ok(markup) => {
            log::info!("Table initialized successfully");
            log::debug!("Column headers: {:?}", config.headers());
            Outcome::Table(markup)
        }
        Err(e) => {
            log::error!("Error creating table: {}", e);
            Outcome::ErrorPanel(e.to_string())
        }
    }
}
