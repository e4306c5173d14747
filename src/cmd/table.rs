//! Table command - print the report in the terminal

use crate::cmd::{load_strings, read_document};
use clap::Args;
use repview::report::{derive_columns, normalize, ReportSource, TableView, WidgetError};
use repview::utils::write_csv;
use std::io;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

#[derive(Args, Debug)]
pub struct TableCommand {
    /// JSON file containing the report records (or "-" for stdin)
    #[arg(short, long)]
    report: PathBuf,

    /// JSON file overriding the display strings
    #[arg(short, long)]
    strings: Option<PathBuf>,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl TableCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let strings = load_strings(self.strings.as_deref())?;
        let contents = read_document(&self.report)?;

        let records = match normalize(ReportSource::from_document(&contents)) {
            Ok(records) => records,
            Err(fallback) => {
                println!("{}", fallback.message(&strings));
                return Ok(());
            }
        };
        let columns = derive_columns(&records[0]);
        if columns.is_empty() {
            println!("{}", strings.table_error_heading);
            println!("{}{}", strings.table_error_prefix, WidgetError::NoColumns);
            return Ok(());
        }
        let view = TableView::new(&records, &columns);

        if self.csv {
            write_csv(&view, io::stdout())
        } else {
            print_table(&view);
            Ok(())
        }
    }
}

fn print_table(view: &TableView) {
    let mut builder = Builder::default();
    builder.push_record(view.headers.clone());
    for row in &view.rows {
        builder.push_record(row.clone());
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}
