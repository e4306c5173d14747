//! HTML command - render the report as an interactive table page

use crate::cmd::ReportArgs;
use clap::Args;
use repview::report::{render_page, render_report, DataTablesWidget, Outcome, RenderRequest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct HtmlCommand {
    #[command(flatten)]
    input: ReportArgs,

    /// Output file path (default: opens in browser).
    ///
    /// Protocol-relative resource URLs are written as `https:` so the page
    /// also works when opened straight from disk.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl HtmlCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let strings = self.input.read_strings()?.with_absolute_urls();
        let meta = self.input.read_meta()?;
        let source = self.input.read_source()?;

        let outcome = render_report(
            RenderRequest {
                source,
                meta: meta.as_ref(),
                strings: &strings,
                today: chrono::Utc::now().date_naive(),
            },
            &DataTablesWidget::new(&strings),
        );
        match &outcome {
            Outcome::Table(_) => {}
            Outcome::ErrorPanel(message) => log::warn!("Rendering error panel: {}", message),
            Outcome::Message(fallback) => log::warn!("Rendering fallback message: {}", fallback),
        }

        let html = render_page(&outcome.container_html(&strings), &strings);

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &html)?;
            println!("HTML report written to: {}", output_path.display());
        } else {
            // Write to temp file and open in browser
            let temp_path = std::env::temp_dir().join("repview-report.html");
            std::fs::write(&temp_path, &html)?;
            opener::open(&temp_path)?;
            println!("Opened HTML report in browser: {}", temp_path.display());
        }

        Ok(())
    }
}
