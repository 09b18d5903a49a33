//! Test runner - execute registered suites
//!
//! Execution is single-threaded and strictly sequential: suites run in
//! registration order, tests run in registration order within their suite,
//! and a failing test never halts the run. There is no timeout machinery;
//! a body that never returns blocks the run.

use crate::context::TestContext;
use crate::registry::TestRegistry;
use crate::reporter::TestReporter;
use std::time::{Duration, Instant};

/// Aggregate outcome of one `run_all` or `run_suite` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of suites executed
    pub suites: usize,
    /// Number of tests executed
    pub tests: usize,
    /// Tests whose body recorded no failure
    pub passed: usize,
    /// Tests whose body recorded at least one failure
    pub failed: usize,
    /// Wall-clock time for the whole run
    pub duration: Duration,
}

impl RunSummary {
    fn new(suites: usize, tests: usize) -> Self {
        Self {
            suites,
            tests,
            passed: 0,
            failed: 0,
            duration: Duration::ZERO,
        }
    }

    /// Whether every executed test passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Test runner with output configuration
#[derive(Default)]
pub struct TestRunner {
    reporter: TestReporter,
}

impl TestRunner {
    /// Create a runner with the default (colored, printing) reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reporter (e.g. `TestReporter::new().with_no_color(true)`)
    pub fn with_reporter(mut self, reporter: TestReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Run every suite in registration order.
    ///
    /// Failures are aggregated into the returned summary and into the
    /// registry's lifetime `failed_tests` counter.
    pub fn run_all(&self, registry: &mut TestRegistry) -> RunSummary {
        self.reporter.begin();
        let mut summary = RunSummary::new(registry.suites().len(), registry.total_tests());
        self.reporter
            .print_header(registry.total_tests(), registry.suites().len());

        let start = Instant::now();
        for idx in 0..registry.suites().len() {
            self.run_suite_cases(registry, idx, &mut summary);
        }
        summary.duration = start.elapsed();

        self.reporter.print_footer(&summary);
        self.reporter.end();
        summary
    }

    /// Run exactly one suite, found by name.
    ///
    /// A linear scan in registration order; the first matching suite wins
    /// even if the name is duplicated. Returns `None` without printing
    /// anything when no suite has that name.
    pub fn run_suite(&self, registry: &mut TestRegistry, name: &str) -> Option<RunSummary> {
        let idx = registry.suites().iter().position(|s| s.name() == name)?;

        self.reporter.begin();
        let tests = registry.suites()[idx].len();
        let mut summary = RunSummary::new(1, tests);
        self.reporter.print_header(tests, 1);

        let start = Instant::now();
        self.run_suite_cases(registry, idx, &mut summary);
        summary.duration = start.elapsed();

        self.reporter.print_footer(&summary);
        self.reporter.end();
        Some(summary)
    }

    /// Execute one suite's cases in registration order, updating counters
    fn run_suite_cases(&self, registry: &mut TestRegistry, idx: usize, summary: &mut RunSummary) {
        let suite_name = registry.suites()[idx].name().to_string();
        let case_count = registry.suites()[idx].len();

        self.reporter.print_suite_start(&suite_name, case_count);
        let suite_start = Instant::now();

        for case_idx in 0..case_count {
            let (case_name, cx, elapsed) = {
                let case = &registry.suites()[idx].cases()[case_idx];
                self.reporter.print_test_start(&suite_name, case.name());

                let mut cx = TestContext::new();
                let start = Instant::now();
                case.run(&mut cx);
                (case.name().to_string(), cx, start.elapsed())
            };

            if cx.failed() {
                registry.record_failure();
                summary.failed += 1;
                self.reporter.print_test_fail(&suite_name, &case_name, elapsed);
                for failure in cx.failures() {
                    self.reporter.print_failure(failure);
                }
            } else {
                summary.passed += 1;
                self.reporter.print_test_pass(&suite_name, &case_name, elapsed);
            }
        }

        self.reporter
            .print_suite_end(&suite_name, case_count, suite_start.elapsed());
    }
}
