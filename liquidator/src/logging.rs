//! Development-time tracing for debugging the processor.
//!
//! Diagnostics go to stderr and are never part of the product output; the
//! report JSON on stdout stays clean for piping.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` raises the default filter
/// from `warn` to `liquidator=debug`.
/// Output: stderr, compact format.
pub fn init(verbose: bool) {
    let default = if verbose { "liquidator=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
