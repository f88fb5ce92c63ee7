//! Orchestration for the single processing pass.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::engine::Engine;
use crate::io::input::read_input;
use crate::io::output::write_report;

/// Options for one run, as resolved from the CLI surface.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Emit diagnostic narration to stderr.
    pub verbose: bool,
    /// Input file path; `None` means the built-in placeholder text.
    pub input: Option<PathBuf>,
    /// Output file path; `None` means stdout.
    pub output: Option<PathBuf>,
}

/// Acquire input, process it once, and deliver the report.
///
/// Single attempt at every stage: any failure propagates with stage context
/// and nothing is retried.
pub fn run(options: &RunOptions) -> Result<()> {
    debug!("starting processing pass");

    let input = read_input(options.input.as_deref())?;
    let mut engine = Engine::new(options.verbose);
    let report = engine.process(&input).context("process input")?;
    write_report(options.output.as_deref(), &report)?;

    info!(
        processed_count = engine.processed_count(),
        "processing pass complete"
    );
    Ok(())
}
