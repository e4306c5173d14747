pub mod export;
pub mod html;
pub mod schema;
pub mod table;

use anyhow::Context;
use clap::Args;
use repview::report::{ReportMeta, ReportSource, Strings};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Inputs shared by every command that renders a report.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON file containing the report records (or "-" for stdin)
    #[arg(short, long)]
    pub report: PathBuf,

    /// JSON file with report metadata (patientName, createdAt)
    #[arg(short, long)]
    pub meta: Option<PathBuf>,

    /// JSON file overriding the display strings
    #[arg(short, long)]
    pub strings: Option<PathBuf>,
}

impl ReportArgs {
    /// Read the report document; blank input counts as no report.
    pub fn read_source(&self) -> anyhow::Result<ReportSource> {
        let contents = read_document(&self.report)?;
        Ok(ReportSource::from_document(&contents))
    }

    pub fn read_meta(&self) -> anyhow::Result<Option<ReportMeta>> {
        let Some(path) = &self.meta else {
            return Ok(None);
        };
        let contents = read_document(path)?;
        if contents.trim().is_empty() {
            log::debug!("Metadata file {} is empty", path.display());
            return Ok(None);
        }
        let meta = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid report metadata in {}", path.display()))?;
        Ok(Some(meta))
    }

    pub fn read_strings(&self) -> anyhow::Result<Strings> {
        load_strings(self.strings.as_deref())
    }
}

/// Load the string table, or the built-in one when no file is given.
pub fn load_strings(path: Option<&Path>) -> anyhow::Result<Strings> {
    match path {
        Some(path) => {
            let contents = read_document(path)?;
            Strings::from_json(&contents)
                .with_context(|| format!("Invalid strings file {}", path.display()))
        }
        None => Ok(Strings::default()),
    }
}

/// Read a file, or stdin with "-"
pub fn read_document(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
