use clap::{Parser, Subcommand};

use crate::cmd::export::ExportCommand;
use crate::cmd::html::HtmlCommand;
use crate::cmd::schema::SchemaCommand;
use crate::cmd::table::TableCommand;

mod cmd;

/// Render JSON reports as sortable, exportable tables
#[derive(Parser, Debug)]
#[command(name = "repview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the report as an interactive HTML table
    Html(HtmlCommand),
    /// Print the report as a table in the terminal
    Table(TableCommand),
    /// Write the report to a CSV file named after its metadata
    Export(ExportCommand),
    /// Print the expected input formats
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    match cli.command {
        Command::Html(html) => html.exec(),
        Command::Table(table) => table.exec(),
        Command::Export(export) => export.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
