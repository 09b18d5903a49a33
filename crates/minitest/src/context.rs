//! Per-test failure context
//!
//! A fresh `TestContext` is handed to every test body by the runner.
//! Assertion macros record mismatches into it; the runner reads it back
//! immediately after the body returns to decide pass/fail. Because the
//! context is per-invocation rather than process-global, nothing here
//! would need to change to run tests concurrently later.

use std::fmt;

/// A single recorded assertion failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Source file of the failing check
    pub file: &'static str,
    /// Source line of the failing check
    pub line: u32,
    /// Human-readable mismatch description (e.g. "got 3, expected 4")
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

/// Failure accumulator for one test invocation
#[derive(Debug, Default)]
pub struct TestContext {
    failures: Vec<Failure>,
}

impl TestContext {
    /// Create a fresh, non-failed context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assertion failure at the given source location
    pub fn fail(&mut self, file: &'static str, line: u32, message: impl Into<String>) {
        self.failures.push(Failure {
            file,
            line,
            message: message.into(),
        });
    }

    /// Whether any check in this test has failed so far
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// All failures recorded so far, in check order
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }
}
