//! Built-in sample suites the demo driver registers

use minitest::{
    expect_eq, expect_f32_eq, expect_f64_eq, expect_true, require_true, TestContext, TestRegistry,
};

fn add(x: f32, y: f32) -> f32 {
    x + y
}

/// Build the demo registry.
///
/// Always registers the passing Math and Strings suites; with
/// `with_failing` also registers a Broken suite so the failure reporting
/// path is demonstrable.
pub fn build_registry(with_failing: bool) -> TestRegistry {
    let mut registry = TestRegistry::new();

    let math = registry.register_suite("Math");
    registry
        .register_test(math, "addf", |cx: &mut TestContext| {
            expect_f32_eq!(cx, add(3.0, 5.0), 8.0);
        })
        .expect("Math suite is registered");
    registry
        .register_test(math, "addd", |cx: &mut TestContext| {
            expect_f64_eq!(cx, 3.0 + 5.0, 8.0);
        })
        .expect("Math suite is registered");
    registry
        .register_test(math, "mul", |cx: &mut TestContext| {
            expect_eq!(cx, 6 * 7, 42);
        })
        .expect("Math suite is registered");

    let strings = registry.register_suite("Strings");
    registry
        .register_test(strings, "concat", |cx: &mut TestContext| {
            expect_eq!(cx, format!("{}{}", "mini", "test"), "minitest");
        })
        .expect("Strings suite is registered");
    registry
        .register_test(strings, "contains", |cx: &mut TestContext| {
            expect_true!(cx, "minitest".contains("test"));
        })
        .expect("Strings suite is registered");

    if with_failing {
        let broken = registry.register_suite("Broken");
        registry
            .register_test(broken, "bad_math", |cx: &mut TestContext| {
                expect_eq!(cx, 2 + 2, 5);
                expect_eq!(cx, 1, 1);
            })
            .expect("Broken suite is registered");
        registry
            .register_test(broken, "aborts_early", |cx: &mut TestContext| {
                require_true!(cx, false);
                expect_eq!(cx, 0, 1);
            })
            .expect("Broken suite is registered");
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitest::{TestReporter, TestRunner};

    fn quiet_runner() -> TestRunner {
        TestRunner::new().with_reporter(TestReporter::new().with_quiet(true))
    }

    #[test]
    fn passing_registry_has_two_suites() {
        let registry = build_registry(false);
        assert_eq!(registry.suites().len(), 2);
        assert_eq!(registry.total_tests(), 5);
    }

    #[test]
    fn passing_suites_all_pass() {
        let mut registry = build_registry(false);
        let summary = quiet_runner().run_all(&mut registry);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.tests, 5);
    }

    #[test]
    fn broken_suite_fails_both_tests() {
        let mut registry = build_registry(true);
        let summary = quiet_runner().run_all(&mut registry);
        assert_eq!(summary.tests, 7);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.passed, 5);
    }
}
