//! Test registry - suites, cases, and registration bookkeeping
//!
//! The registry is an explicit, owned object: the host program creates one,
//! registers suites and tests against it, hands it to a `TestRunner`, and
//! drops it when done. Dropping the registry releases every suite's case
//! storage; there is no separate teardown call to forget or misuse.

use crate::context::TestContext;
use thiserror::Error;

/// Errors reported by registry operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The suite handle does not refer to a suite owned by this registry
    #[error("unknown suite handle (index {0})")]
    UnknownSuite(usize),
}

/// A runnable test body.
///
/// Implemented for any `Fn(&mut TestContext)` closure, so plain functions
/// and capturing closures register uniformly. Custom implementations are
/// possible for bodies that carry their own state.
pub trait TestBody {
    /// Execute the body, recording any failures into `cx`
    fn execute(&self, cx: &mut TestContext);
}

impl<F> TestBody for F
where
    F: Fn(&mut TestContext),
{
    fn execute(&self, cx: &mut TestContext) {
        self(cx)
    }
}

/// Stable handle to a registered suite.
///
/// Handles are indices into the registry's suite list, so they stay valid
/// as more suites and tests are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteId(usize);

/// A named unit of user test logic
pub struct TestCase {
    name: String,
    body: Box<dyn TestBody>,
}

impl TestCase {
    /// Name of the test case
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the test body against the given context
    pub fn run(&self, cx: &mut TestContext) {
        self.body.execute(cx);
    }
}

/// A named, ordered group of test cases
pub struct Suite {
    name: String,
    cases: Vec<TestCase>,
}

impl Suite {
    /// Name of the suite
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test cases in registration order
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of test cases in this suite
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether this suite has no test cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Owning container of all suites for one test-program lifetime
#[derive(Default)]
pub struct TestRegistry {
    suites: Vec<Suite>,
    total_tests: usize,
    failed_tests: usize,
}

impl TestRegistry {
    /// Create an empty registry with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new, empty suite and return a handle to it.
    ///
    /// Suite names should be unique; the registry does not enforce this,
    /// and `TestRunner::run_suite` matches the first occurrence.
    pub fn register_suite(&mut self, name: impl Into<String>) -> SuiteId {
        let id = SuiteId(self.suites.len());
        self.suites.push(Suite {
            name: name.into(),
            cases: Vec::new(),
        });
        id
    }

    /// Append a test case to the given suite.
    ///
    /// Fails without changing any state if `id` does not belong to this
    /// registry.
    pub fn register_test(
        &mut self,
        id: SuiteId,
        name: impl Into<String>,
        body: impl TestBody + 'static,
    ) -> Result<(), RegistryError> {
        let suite = self
            .suites
            .get_mut(id.0)
            .ok_or(RegistryError::UnknownSuite(id.0))?;

        suite.cases.push(TestCase {
            name: name.into(),
            body: Box::new(body),
        });
        self.total_tests += 1;
        Ok(())
    }

    /// All suites in registration order
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Look up a suite by handle
    pub fn suite(&self, id: SuiteId) -> Option<&Suite> {
        self.suites.get(id.0)
    }

    /// Handle of the first suite with the given name, if any
    pub fn find_suite(&self, name: &str) -> Option<SuiteId> {
        self.suites
            .iter()
            .position(|s| s.name() == name)
            .map(SuiteId)
    }

    /// Total number of successfully registered tests
    pub fn total_tests(&self) -> usize {
        self.total_tests
    }

    /// Number of tests that have failed over this registry's lifetime.
    ///
    /// Accumulates across `run_all` and `run_suite` calls; it is never
    /// reset between runs.
    pub fn failed_tests(&self) -> usize {
        self.failed_tests
    }

    pub(crate) fn record_failure(&mut self) {
        self.failed_tests += 1;
    }
}
