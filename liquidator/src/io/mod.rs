//! I/O collaborators for the CLI command.

pub mod input;
pub mod output;
