//! Export command - write the report as a CSV file named like the spreadsheet export

use crate::cmd::ReportArgs;
use anyhow::Context;
use clap::Args;
use repview::report::{derive_columns, normalize, ExportMeta, TableView, WidgetError};
use repview::utils::{file_name_safe, write_csv};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[command(flatten)]
    input: ReportArgs,

    /// Directory the export file is written to
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let strings = self.input.read_strings()?;
        let meta = self.input.read_meta()?;

        let records = match normalize(self.input.read_source()?) {
            Ok(records) => records,
            Err(fallback) => anyhow::bail!("{}", fallback.message(&strings)),
        };
        let columns = derive_columns(&records[0]);
        if columns.is_empty() {
            anyhow::bail!("{}{}", strings.table_error_prefix, WidgetError::NoColumns);
        }
        let view = TableView::new(&records, &columns);

        let export = ExportMeta::resolve(meta.as_ref(), &strings, chrono::Utc::now().date_naive());
        let path = self
            .dir
            .join(format!("{}.csv", file_name_safe(&export.file_name())));
        log::info!("Exporting '{}' to {}", export.title(), path.display());

        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_csv(&view, file)?;

        println!("Report exported to: {}", path.display());
        Ok(())
    }
}
