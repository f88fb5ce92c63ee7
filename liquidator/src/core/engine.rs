//! Processing engine: one evaluation per call, with a running counter.

use tracing::debug;

use crate::core::evaluator::{EvalError, Evaluator, MetricsEvaluator};
use crate::core::report::ProcessReport;

/// Stateful processing engine.
///
/// Owns the invocation counter and the evaluation strategy. One engine per
/// logical run; the counter is unsynchronized, so concurrent callers must
/// serialize access themselves.
pub struct Engine {
    verbose: bool,
    processed_count: u64,
    evaluator: Box<dyn Evaluator>,
}

impl Engine {
    /// Engine with the default metrics evaluator.
    pub fn new(verbose: bool) -> Self {
        Self::with_evaluator(verbose, Box::new(MetricsEvaluator))
    }

    /// Engine with an injected evaluation strategy.
    pub fn with_evaluator(verbose: bool, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            verbose,
            processed_count: 0,
            evaluator,
        }
    }

    /// Evaluate `input` and produce a report.
    ///
    /// On success the counter advances by exactly 1. On rejection the counter
    /// is untouched and no report is constructed. Verbose narration goes to
    /// the tracing sink only and never affects the returned value.
    pub fn process(&mut self, input: &str) -> Result<ProcessReport, EvalError> {
        if self.verbose {
            debug!(bytes = input.len(), "evaluating input");
        }
        let evaluation = self.evaluator.evaluate(input)?;
        self.processed_count += 1;
        if self.verbose {
            debug!(
                processed_count = self.processed_count,
                "evaluation succeeded"
            );
        }
        Ok(ProcessReport::success(
            evaluation.description,
            evaluation.payload,
        ))
    }

    /// Number of successful invocations so far. Never decreases.
    pub fn processed_count(&self) -> u64 {
        self.processed_count
    }

    /// Verbosity chosen at construction.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
