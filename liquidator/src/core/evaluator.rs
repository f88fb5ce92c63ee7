//! Pluggable evaluation strategy for the processing engine.
//!
//! The concrete liquidation decision rule is not fixed here: the engine
//! delegates "what makes input valid" to an [`Evaluator`] so the counter and
//! report contracts stay testable independent of the domain logic. The
//! default evaluator accepts everything and echoes basic input metrics.

use serde_json::{json, Value};
use thiserror::Error;

/// Rejection reported by an evaluator. Distinguishable from I/O errors so the
/// caller can tell "the strategy refused this input" from "the file was
/// unreadable".
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unprocessable input: {0}")]
    Unprocessable(String),
}

/// What an evaluator concluded about one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Human-readable description of what was processed.
    pub description: String,
    /// Optional structured detail for the report's `data` field.
    pub payload: Option<Value>,
}

/// Decision logic applied to each input.
///
/// Implementations must be deterministic and side-effect free: same input,
/// same outcome.
pub trait Evaluator {
    fn evaluate(&self, input: &str) -> Result<Evaluation, EvalError>;
}

/// Default evaluator: every input is valid, including the empty string.
/// Summarizes size and carries byte/line/word counts as payload.
#[derive(Debug, Default)]
pub struct MetricsEvaluator;

impl Evaluator for MetricsEvaluator {
    fn evaluate(&self, input: &str) -> Result<Evaluation, EvalError> {
        let bytes = input.len();
        let lines = input.lines().count();
        let words = input.split_whitespace().count();
        Ok(Evaluation {
            description: format!("processed {bytes} bytes of input"),
            payload: Some(json!({
                "bytes": bytes,
                "lines": lines,
                "words": words,
            })),
        })
    }
}
