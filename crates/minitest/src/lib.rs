//! Minitest - a registration-based unit-test harness
//!
//! This library provides the complete harness:
//! - Suite and test-case registration (`TestRegistry`)
//! - Per-test failure accumulation (`TestContext`)
//! - Sequential, registration-order execution (`TestRunner`)
//! - Googletest-style report output (`TestReporter`)
//! - An `expect_*`/`require_*` assertion macro family
//!
//! Tests are registered explicitly; there is no discovery, reflection,
//! or parallel execution.
//!
//! ```
//! use minitest::{TestRegistry, TestReporter, TestRunner};
//!
//! let mut registry = TestRegistry::new();
//! let math = registry.register_suite("Math");
//! registry
//!     .register_test(math, "add", |cx: &mut minitest::TestContext| {
//!         minitest::expect_eq!(cx, 2 + 2, 4);
//!     })
//!     .unwrap();
//!
//! let runner = TestRunner::new().with_reporter(TestReporter::new().with_quiet(true));
//! let summary = runner.run_all(&mut registry);
//! assert!(summary.all_passed());
//! ```

/// Minitest version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod assert;
pub mod context;
pub mod registry;
pub mod reporter;
pub mod runner;

// Re-export commonly used types
pub use context::{Failure, TestContext};
pub use registry::{RegistryError, Suite, SuiteId, TestBody, TestCase, TestRegistry};
pub use reporter::TestReporter;
pub use runner::{RunSummary, TestRunner};
