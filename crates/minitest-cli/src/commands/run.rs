//! Run command - execute the sample suites

use crate::demo;
use anyhow::Result;
use minitest::{TestReporter, TestRunner};

/// Arguments for the run command
pub struct RunArgs {
    /// Run only the suite with this name
    pub suite: Option<String>,
    /// Disable colored output
    pub no_color: bool,
    /// Print the summary as JSON instead of banner output
    pub json: bool,
    /// Also register the deliberately failing suite
    pub fail: bool,
}

/// Run the sample suites and exit non-zero if any test failed
pub fn run(args: RunArgs) -> Result<()> {
    let mut registry = demo::build_registry(args.fail);

    let reporter = TestReporter::new()
        .with_no_color(args.no_color)
        .with_quiet(args.json);
    let runner = TestRunner::new().with_reporter(reporter);

    let summary = match args.suite.as_deref() {
        Some(name) => match runner.run_suite(&mut registry, name) {
            Some(summary) => summary,
            // Unknown suite: a no-op, same as the harness itself
            None => return Ok(()),
        },
        None => runner.run_all(&mut registry),
    };

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "suites": summary.suites,
                "tests": summary.tests,
                "passed": summary.passed,
                "failed": summary.failed,
                "duration_ms": summary.duration.as_millis() as u64,
            })
        );
    }

    // Exit with code 1 if any tests failed
    if !summary.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
