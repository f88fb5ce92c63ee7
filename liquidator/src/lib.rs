//! Single-pass liquidation input processor.
//!
//! Reads one blob of text, runs it through the processing engine, and emits a
//! structured, timestamped report as JSON. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (evaluation, report construction,
//!   the invocation counter). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting collaborators (input acquisition, report
//!   delivery). The core only ever sees already-decoded text.
//!
//! The orchestration module ([`run`]) coordinates core logic with I/O to
//! implement the CLI command.

pub mod core;
pub mod io;
pub mod logging;
pub mod run;
