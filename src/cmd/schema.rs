//! Schema command - print expected formats of the auxiliary input files

use clap::Args;
use repview::report::{ReportMeta, Strings};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which input to describe
    #[arg(value_enum, default_value = "meta")]
    target: SchemaTarget,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaTarget {
    /// JSON Schema for the report metadata file
    Meta,
    /// JSON Schema for the display strings file
    Strings,
    /// Description of the report file itself
    Report,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.target {
            SchemaTarget::Meta => {
                let schema = schema_for!(ReportMeta);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaTarget::Strings => {
                let schema = schema_for!(Strings);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaTarget::Report => self.print_report_format(),
        }
        Ok(())
    }

    fn print_report_format(&self) {
        println!("Report Input Format");
        println!("===================");
        println!();
        for (shape, description) in REPORT_SHAPES {
            println!("{:28}  {}", shape, description);
        }
        println!();
        println!("Columns follow the field order of the first record.");
        println!(
            "The \"{}\" column is displayed as YYYY-MM-DD and sorted on its raw value.",
            repview::report::DATE_COLUMN
        );
    }
}

const REPORT_SHAPES: &[(&str, &str)] = &[
    ("[{...}, {...}]", "List of records (field name to value)"),
    (
        "{\"Behandlungen\": [...]}",
        "Legacy wrapper holding the list of records",
    ),
    ("\"[...]\"", "JSON string containing either of the above"),
];
