//! CLI surface for the liquidation input processor.
//!
//! One invocation performs one synchronous pass: read input (file or built-in
//! placeholder), process it, emit the JSON report (file or stdout). Exit code
//! 0 on success, 1 on any propagated error.

use std::path::PathBuf;

use clap::Parser;
use liquidator::run::{RunOptions, run};

#[derive(Parser)]
#[command(
    name = "liquidator",
    version,
    about = "Single-pass liquidation input processor"
)]
struct Cli {
    /// Enable verbose diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Input file path. Omit to process built-in sample text.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path for the JSON report. Omit to print to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    liquidator::logging::init(cli.verbose);

    let options = RunOptions {
        verbose: cli.verbose,
        input: cli.input,
        output: cli.output,
    };
    if let Err(err) = run(&options) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
