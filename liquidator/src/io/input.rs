//! Input acquisition: file contents or the built-in placeholder.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Placeholder text used when no input path is given.
pub const DEFAULT_INPUT: &str = "Sample data for processing";

/// Read the text to process.
///
/// `Some(path)` reads the file (decoded as UTF-8); `None` yields
/// [`DEFAULT_INPUT`]. Read failures carry the path in their context.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
        }
        None => {
            debug!("no input path, using default placeholder");
            Ok(DEFAULT_INPUT.to_string())
        }
    }
}
