//! Report delivery: JSON to a file or stdout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::report::ProcessReport;

/// Serialize `report` to pretty-printed JSON with trailing newline.
pub fn render_report(report: &ProcessReport) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(report).context("serialize report")?;
    payload.push('\n');
    Ok(payload)
}

/// Deliver the report to its sink.
///
/// `Some(path)` writes the file; `None` prints to stdout. The report itself
/// is the only thing written to stdout, keeping it machine-readable.
pub fn write_report(path: Option<&Path>, report: &ProcessReport) -> Result<()> {
    let payload = render_report(report)?;
    match path {
        Some(path) => {
            debug!(path = %path.display(), "writing report file");
            fs::write(path, payload)
                .with_context(|| format!("write report {}", path.display()))?;
        }
        None => {
            debug!("no output path, printing report to stdout");
            print!("{payload}");
        }
    }
    Ok(())
}
