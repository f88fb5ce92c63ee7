//! Pure, deterministic processing logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and return deterministic outputs suitable for tests (timestamps
//! excepted: reports record their construction time).

pub mod engine;
pub mod evaluator;
pub mod report;
