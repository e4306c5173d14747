//! DataTables configuration and the widget that renders it.

use crate::report::columns::{CellRenderer, Column, RenderKind};
use crate::report::input::Record;
use crate::report::meta::ExportMeta;
use crate::report::strings::Strings;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while initializing the table widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("table configuration could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("the report has no columns to display")]
    NoColumns,
    #[error("{0}")]
    Other(String),
}

/// Something that turns a table configuration into markup for the container.
pub trait Widget {
    fn initialize(&self, container_id: &str, config: &TableConfig) -> Result<String, WidgetError>;
}

/// Options object handed to `$(..).DataTable(..)`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub data: Vec<Value>,
    pub columns: Vec<ColumnConfig>,
    pub column_defs: Vec<ColumnDefaults>,
    pub order: Vec<(usize, SortDirection)>,
    pub paging: bool,
    pub info: bool,
    pub scroll_x: bool,
    pub language: Language,
    pub dom: String,
    pub buttons: Vec<ExportButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnConfig {
    pub title: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<OrthogonalRender>,
}

/// Maps each widget request kind to a property of an orthogonal cell object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrthogonalRender {
    #[serde(rename = "_")]
    pub default: &'static str,
    pub filter: &'static str,
    pub sort: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl OrthogonalRender {
    fn cell_properties() -> Self {
        Self {
            default: "display",
            filter: "filter",
            sort: "sort",
            kind: "type",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefaults {
    pub targets: &'static str,
    pub orderable: bool,
    pub default_content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportButton {
    pub extend: &'static str,
    pub text: String,
    pub class_name: String,
    pub filename: String,
    pub title: String,
}

impl TableConfig {
    /// Build the widget options for `records` shown with `columns`.
    ///
    /// Cells of date columns are replaced by orthogonal objects so the widget
    /// displays the formatted date and sorts on the raw value.
    pub fn build(
        records: &[Record],
        columns: &[Column],
        export: &ExportMeta,
        strings: &Strings,
    ) -> Self {
        let data = records
            .iter()
            .map(|record| Value::Object(orthogonal_row(record, columns)))
            .collect();

        let columns = columns
            .iter()
            .map(|column| ColumnConfig {
                title: column.name.clone(),
                data: data_source(&column.name),
                render: match column.renderer {
                    CellRenderer::Raw => None,
                    CellRenderer::CalendarDate => Some(OrthogonalRender::cell_properties()),
                },
            })
            .collect();

        Self {
            data,
            columns,
            column_defs: vec![ColumnDefaults {
                targets: "_all",
                orderable: true,
                default_content: "",
            }],
            order: vec![(0, SortDirection::Desc)],
            paging: false,
            info: false,
            scroll_x: true,
            language: Language {
                url: strings.language_url.clone(),
            },
            dom: "Bfrt".to_string(),
            buttons: vec![ExportButton {
                extend: "excel",
                text: strings.export_button.clone(),
                class_name: strings.export_button_class.clone(),
                filename: export.file_name(),
                title: export.title(),
            }],
        }
    }

    /// Column header texts in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.title.as_str()).collect()
    }
}

fn orthogonal_row(record: &Record, columns: &[Column]) -> Map<String, Value> {
    let mut row = record.clone();
    for column in columns.iter().filter(|c| c.renderer != CellRenderer::Raw) {
        let mut cell = Map::new();
        for (property, kind) in [
            ("display", RenderKind::Display),
            ("filter", RenderKind::Filter),
            ("sort", RenderKind::Sort),
            ("type", RenderKind::Type),
        ] {
            let value = column.render(record, kind).unwrap_or(Value::Null);
            cell.insert(property.to_string(), value);
        }
        row.insert(column.name.clone(), Value::Object(cell));
    }
    row
}

/// DataTables reads dotted `data` strings as nested paths; escape the dots so
/// field names like `Nr.` address the flat property.
fn data_source(name: &str) -> String {
    name.replace('.', "\\.")
}

/// Renders the configuration as a DataTables table plus its init script.
///
/// Errors the widget raises in the browser are shown in the same panel the
/// adapter uses for initialization failures.
#[derive(Debug, Clone)]
pub struct DataTablesWidget {
    error_heading: String,
    error_prefix: String,
}

impl DataTablesWidget {
    pub fn new(strings: &Strings) -> Self {
        Self {
            error_heading: strings.table_error_heading.clone(),
            error_prefix: strings.table_error_prefix.clone(),
        }
    }
}

impl Widget for DataTablesWidget {
    fn initialize(&self, container_id: &str, config: &TableConfig) -> Result<String, WidgetError> {
        if config.columns.is_empty() {
            return Err(WidgetError::NoColumns);
        }
        let json = escape_json_for_script(&serde_json::to_string(config)?);
        let heading = escape_json_for_script(&serde_json::to_string(&self.error_heading)?);
        let prefix = escape_json_for_script(&serde_json::to_string(&self.error_prefix)?);
        let table_id = format!("{}-table", container_id);

        Ok(format!(
            r##"<table id="{table_id}" class="display nowrap" style="width:100%"></table>
<script>
$(function () {{
    var config = {json};
    config.initComplete = function () {{
        console.log("DataTable initialized successfully");
        var headers = $('#{table_id} thead th').map(function () {{
            return $(this).text();
        }}).get();
        console.log("Actual column headers:", headers);
    }};
    try {{
        $('#{table_id}').DataTable(config);
    }} catch (e) {{
        console.error("Error creating DataTable:", e);
        var panel = $('<div class="bg-red-50 border border-red-200 rounded-lg p-4"></div>');
        panel.append($('<p class="text-lg text-red-600 font-bold"></p>').text({heading}));
        panel.append($('<p class="text-sm text-red-500 mt-2"></p>').text({prefix} + e.message));
        $('#{container_id}').empty().append(panel);
    }}
}});
</script>"##
        ))
    }
}

/// serde_json already escapes quotes and backslashes; make sure nothing in
/// the payload can close the surrounding script element.
fn escape_json_for_script(s: &str) -> String {
    s.replace("</", "<\\/")
}
