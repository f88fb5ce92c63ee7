//! Report produced by one processing invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single processing invocation.
///
/// Immutable once built: the engine returns it by value and keeps no handle,
/// and no mutating accessors exist. An absent `data` field is omitted from the
/// serialized form entirely, never written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Whether processing completed without a domain-level failure.
    pub success: bool,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Auxiliary structured output, when the evaluator produced any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Construction time, assigned exactly once (RFC 3339 on the wire).
    pub timestamp: DateTime<Utc>,
}

impl ProcessReport {
    /// Build a successful report stamped with the current time.
    pub fn success(message: String, data: Option<Value>) -> Self {
        Self {
            success: true,
            message,
            data,
            timestamp: Utc::now(),
        }
    }
}
