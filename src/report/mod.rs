pub mod adapter;
pub mod columns;
pub mod input;
pub mod meta;
pub mod page;
pub mod strings;
pub mod view;
pub mod widget;

// Flat public surface for the rendering pipeline.
pub use adapter::{render_report, Outcome, RenderRequest, CONTAINER_ID};
pub use columns::{derive_columns, CellRenderer, Column, RenderKind, DATE_COLUMN};
pub use input::{normalize, Fallback, Record, ReportSource, LEGACY_KEY};
pub use meta::{ExportMeta, ReportMeta};
pub use page::{html_escape, render_page};
pub use strings::Strings;
pub use view::TableView;
pub use widget::{DataTablesWidget, TableConfig, Widget, WidgetError};
