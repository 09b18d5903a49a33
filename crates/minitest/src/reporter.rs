//! Report formatting - googletest-style banner output
//!
//! All `format_*` methods are pure: they take `&self` and produce a
//! `String`, so the exact informational content (counts, names, pass/fail,
//! timings) is testable. The `print_*` wrappers are what the runner calls
//! while executing.

use crate::context::Failure;
use crate::runner::RunSummary;
use colored::Colorize;
use std::time::Duration;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Test reporter with output configuration
pub struct TestReporter {
    /// Disable colored output
    no_color: bool,
    /// Suppress all printing (formatting stays available)
    quiet: bool,
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReporter {
    /// Create a new reporter with colors enabled
    pub fn new() -> Self {
        Self {
            no_color: false,
            quiet: false,
        }
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Suppress printing entirely (e.g. when emitting JSON instead)
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run header: overall test and suite counts
    pub fn format_header(&self, tests: usize, suites: usize) -> String {
        format!(
            "{} Running {} test{} from {} suite{}.",
            "[==========]".green().bold(),
            tests,
            plural(tests),
            suites,
            plural(suites)
        )
    }

    /// Suite delimiter printed before a suite's tests
    pub fn format_suite_start(&self, name: &str, tests: usize) -> String {
        format!(
            "{} {} test{} from {}",
            "[----------]".green().bold(),
            tests,
            plural(tests),
            name
        )
    }

    /// Suite delimiter printed after a suite's tests, with elapsed time
    pub fn format_suite_end(&self, name: &str, tests: usize, elapsed: Duration) -> String {
        format!(
            "{} {} test{} from {} ({} ms total)\n",
            "[----------]".green().bold(),
            tests,
            plural(tests),
            name,
            elapsed.as_millis()
        )
    }

    /// Line announcing that a test is about to run
    pub fn format_test_start(&self, suite: &str, test: &str) -> String {
        format!("{} {}.{}", "[ RUN      ]".green().bold(), suite, test)
    }

    /// Line reporting a passed test
    pub fn format_test_pass(&self, suite: &str, test: &str, elapsed: Duration) -> String {
        format!(
            "{} {}.{} ({} ms)",
            "[       OK ]".green().bold(),
            suite,
            test,
            elapsed.as_millis()
        )
    }

    /// Line reporting a failed test
    pub fn format_test_fail(&self, suite: &str, test: &str, elapsed: Duration) -> String {
        format!(
            "{} {}.{} ({} ms)",
            "[  FAILED  ]".red().bold(),
            suite,
            test,
            elapsed.as_millis()
        )
    }

    /// Diagnostic line for one recorded assertion failure
    pub fn format_failure(&self, failure: &Failure) -> String {
        format!("{}", failure.to_string().dimmed())
    }

    /// Run footer: totals, elapsed time, passed and (when non-zero) failed
    pub fn format_footer(&self, summary: &RunSummary) -> String {
        let mut out = format!(
            "{} {} test{} from {} suite{} ran. ({} ms total)\n",
            "[==========]".green().bold(),
            summary.tests,
            plural(summary.tests),
            summary.suites,
            plural(summary.suites),
            summary.duration.as_millis()
        );
        out.push_str(&format!(
            "{} {} test{}.",
            "[  PASSED  ]".green().bold(),
            summary.passed,
            plural(summary.passed)
        ));
        if summary.failed > 0 {
            out.push_str(&format!(
                "\n{} {} test{}.",
                "[  FAILED  ]".red().bold(),
                summary.failed,
                plural(summary.failed)
            ));
        }
        out
    }

    pub(crate) fn begin(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }

    pub(crate) fn end(&self) {
        if self.no_color {
            colored::control::unset_override();
        }
    }

    pub(crate) fn print_header(&self, tests: usize, suites: usize) {
        self.print(self.format_header(tests, suites));
    }

    pub(crate) fn print_suite_start(&self, name: &str, tests: usize) {
        self.print(self.format_suite_start(name, tests));
    }

    pub(crate) fn print_suite_end(&self, name: &str, tests: usize, elapsed: Duration) {
        self.print(self.format_suite_end(name, tests, elapsed));
    }

    pub(crate) fn print_test_start(&self, suite: &str, test: &str) {
        self.print(self.format_test_start(suite, test));
    }

    pub(crate) fn print_test_pass(&self, suite: &str, test: &str, elapsed: Duration) {
        self.print(self.format_test_pass(suite, test, elapsed));
    }

    pub(crate) fn print_test_fail(&self, suite: &str, test: &str, elapsed: Duration) {
        self.print(self.format_test_fail(suite, test, elapsed));
    }

    pub(crate) fn print_failure(&self, failure: &Failure) {
        self.print(self.format_failure(failure));
    }

    pub(crate) fn print_footer(&self, summary: &RunSummary) {
        self.print(self.format_footer(summary));
    }

    fn print(&self, line: String) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}
