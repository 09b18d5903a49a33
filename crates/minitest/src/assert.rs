//! Assertion macro family
//!
//! Every macro takes the current `TestContext` as its first argument and
//! comes in two severities:
//!
//! - `expect_*` records the failure and lets the test body continue.
//! - `require_*` records the failure and returns from the enclosing test
//!   body immediately, aborting that one test only.
//!
//! On failure each macro records the invocation's source file and line plus
//! a "got X, expected Y" message; values are formatted with `Debug`.
//! Operands are evaluated exactly once.
//!
//! ```
//! use minitest::{expect_eq, TestContext};
//!
//! let mut cx = TestContext::new();
//! expect_eq!(cx, 1 + 1, 2);
//! assert!(!cx.failed());
//! ```

/// Absolute tolerance for `expect_f32_eq!`/`require_f32_eq!`
pub const F32_EPSILON: f32 = 1e-4;

/// Absolute tolerance for `expect_f64_eq!`/`require_f64_eq!`
pub const F64_EPSILON: f64 = 1e-12;

/// Record a failure unless the condition is true; continue the test body
#[macro_export]
macro_rules! expect_true {
    ($cx:expr, $cond:expr) => {{
        if !$cond {
            $cx.fail(file!(), line!(), "got false, expected true");
        }
    }};
}

/// Like [`expect_true!`], but return from the test body on failure
#[macro_export]
macro_rules! require_true {
    ($cx:expr, $cond:expr) => {{
        if !$cond {
            $cx.fail(file!(), line!(), "got false, expected true");
            return;
        }
    }};
}

/// Record a failure unless the condition is false; continue the test body
#[macro_export]
macro_rules! expect_false {
    ($cx:expr, $cond:expr) => {{
        if $cond {
            $cx.fail(file!(), line!(), "got true, expected false");
        }
    }};
}

/// Like [`expect_false!`], but return from the test body on failure
#[macro_export]
macro_rules! require_false {
    ($cx:expr, $cond:expr) => {{
        if $cond {
            $cx.fail(file!(), line!(), "got true, expected false");
            return;
        }
    }};
}

/// Record a failure unless `actual == expected`; continue the test body
#[macro_export]
macro_rules! expect_eq {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual != expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected {:?}", actual, expected),
            );
        }
    }};
}

/// Like [`expect_eq!`], but return from the test body on failure
#[macro_export]
macro_rules! require_eq {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual != expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected {:?}", actual, expected),
            );
            return;
        }
    }};
}

/// Record a failure unless `actual != expected`; continue the test body
#[macro_export]
macro_rules! expect_ne {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual == expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected not {:?}", actual, expected),
            );
        }
    }};
}

/// Like [`expect_ne!`], but return from the test body on failure
#[macro_export]
macro_rules! require_ne {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual == expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected not {:?}", actual, expected),
            );
            return;
        }
    }};
}

/// Record a failure unless `actual < expected`; continue the test body
#[macro_export]
macro_rules! expect_lt {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual >= expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected less than {:?}", actual, expected),
            );
        }
    }};
}

/// Like [`expect_lt!`], but return from the test body on failure
#[macro_export]
macro_rules! require_lt {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual >= expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected less than {:?}", actual, expected),
            );
            return;
        }
    }};
}

/// Record a failure unless `actual <= expected`; continue the test body
#[macro_export]
macro_rules! expect_le {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual > expected {
            $cx.fail(
                file!(),
                line!(),
                format!(
                    "got {:?}, expected less than or equal to {:?}",
                    actual, expected
                ),
            );
        }
    }};
}

/// Like [`expect_le!`], but return from the test body on failure
#[macro_export]
macro_rules! require_le {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual > expected {
            $cx.fail(
                file!(),
                line!(),
                format!(
                    "got {:?}, expected less than or equal to {:?}",
                    actual, expected
                ),
            );
            return;
        }
    }};
}

/// Record a failure unless `actual > expected`; continue the test body
#[macro_export]
macro_rules! expect_gt {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual <= expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected greater than {:?}", actual, expected),
            );
        }
    }};
}

/// Like [`expect_gt!`], but return from the test body on failure
#[macro_export]
macro_rules! require_gt {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual <= expected {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected greater than {:?}", actual, expected),
            );
            return;
        }
    }};
}

/// Record a failure unless `actual >= expected`; continue the test body
#[macro_export]
macro_rules! expect_ge {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual < expected {
            $cx.fail(
                file!(),
                line!(),
                format!(
                    "got {:?}, expected greater than or equal to {:?}",
                    actual, expected
                ),
            );
        }
    }};
}

/// Like [`expect_ge!`], but return from the test body on failure
#[macro_export]
macro_rules! require_ge {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual = &$actual;
        let expected = &$expected;
        if actual < expected {
            $cx.fail(
                file!(),
                line!(),
                format!(
                    "got {:?}, expected greater than or equal to {:?}",
                    actual, expected
                ),
            );
            return;
        }
    }};
}

/// Record a failure unless two `f32`s are within [`F32_EPSILON`](crate::assert::F32_EPSILON)
#[macro_export]
macro_rules! expect_f32_eq {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        if (actual - expected).abs() > $crate::assert::F32_EPSILON {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected {:?}", actual, expected),
            );
        }
    }};
}

/// Like [`expect_f32_eq!`], but return from the test body on failure
#[macro_export]
macro_rules! require_f32_eq {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        if (actual - expected).abs() > $crate::assert::F32_EPSILON {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected {:?}", actual, expected),
            );
            return;
        }
    }};
}

/// Record a failure unless two `f64`s are within [`F64_EPSILON`](crate::assert::F64_EPSILON)
#[macro_export]
macro_rules! expect_f64_eq {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > $crate::assert::F64_EPSILON {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected {:?}", actual, expected),
            );
        }
    }};
}

/// Like [`expect_f64_eq!`], but return from the test body on failure
#[macro_export]
macro_rules! require_f64_eq {
    ($cx:expr, $actual:expr, $expected:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > $crate::assert::F64_EPSILON {
            $cx.fail(
                file!(),
                line!(),
                format!("got {:?}, expected {:?}", actual, expected),
            );
            return;
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::{F32_EPSILON, F64_EPSILON};
    use crate::context::TestContext;
    use rstest::rstest;

    #[test]
    fn expect_true_passes_and_fails() {
        let mut cx = TestContext::new();
        expect_true!(cx, 1 + 1 == 2);
        assert!(!cx.failed());

        expect_true!(cx, 1 > 2);
        assert!(cx.failed());
        assert_eq!(cx.failures()[0].message, "got false, expected true");
    }

    #[test]
    fn expect_false_passes_and_fails() {
        let mut cx = TestContext::new();
        expect_false!(cx, 1 > 2);
        assert!(!cx.failed());

        expect_false!(cx, true);
        assert_eq!(cx.failures()[0].message, "got true, expected false");
    }

    #[test]
    fn expect_eq_formats_both_values() {
        let mut cx = TestContext::new();
        expect_eq!(cx, 2 + 2, 5);
        assert_eq!(cx.failures()[0].message, "got 4, expected 5");
    }

    #[test]
    fn expect_eq_works_on_strings() {
        let mut cx = TestContext::new();
        expect_eq!(cx, "ab".to_string(), "ab".to_string());
        assert!(!cx.failed());

        expect_eq!(cx, "ab", "cd");
        assert_eq!(cx.failures()[0].message, "got \"ab\", expected \"cd\"");
    }

    #[test]
    fn expect_ne_reports_not_expected() {
        let mut cx = TestContext::new();
        expect_ne!(cx, 3, 4);
        assert!(!cx.failed());

        expect_ne!(cx, 3, 3);
        assert_eq!(cx.failures()[0].message, "got 3, expected not 3");
    }

    #[rstest]
    #[case(1, 2, false)]
    #[case(2, 2, true)]
    #[case(3, 2, true)]
    fn expect_lt_cases(#[case] actual: i32, #[case] expected: i32, #[case] fails: bool) {
        let mut cx = TestContext::new();
        expect_lt!(cx, actual, expected);
        assert_eq!(cx.failed(), fails);
    }

    #[rstest]
    #[case(1, 2, false)]
    #[case(2, 2, false)]
    #[case(3, 2, true)]
    fn expect_le_cases(#[case] actual: i32, #[case] expected: i32, #[case] fails: bool) {
        let mut cx = TestContext::new();
        expect_le!(cx, actual, expected);
        assert_eq!(cx.failed(), fails);
    }

    #[rstest]
    #[case(3, 2, false)]
    #[case(2, 2, true)]
    #[case(1, 2, true)]
    fn expect_gt_cases(#[case] actual: i32, #[case] expected: i32, #[case] fails: bool) {
        let mut cx = TestContext::new();
        expect_gt!(cx, actual, expected);
        assert_eq!(cx.failed(), fails);
    }

    #[rstest]
    #[case(3, 2, false)]
    #[case(2, 2, false)]
    #[case(1, 2, true)]
    fn expect_ge_cases(#[case] actual: i32, #[case] expected: i32, #[case] fails: bool) {
        let mut cx = TestContext::new();
        expect_ge!(cx, actual, expected);
        assert_eq!(cx.failed(), fails);
    }

    #[test]
    fn f32_eq_tolerates_small_differences() {
        let mut cx = TestContext::new();
        expect_f32_eq!(cx, 3.0 + 5.0, 8.0);
        expect_f32_eq!(cx, 8.0 + F32_EPSILON / 2.0, 8.0);
        assert!(!cx.failed());

        expect_f32_eq!(cx, 3.0 + 5.0, 9.0);
        assert!(cx.failed());
        assert_eq!(cx.failures()[0].message, "got 8.0, expected 9.0");
    }

    #[test]
    fn f64_eq_uses_tighter_epsilon() {
        let mut cx = TestContext::new();
        expect_f64_eq!(cx, 3.0 + 5.0, 8.0);
        assert!(!cx.failed());

        // A gap far above the f64 tolerance but below the f32 one
        expect_f64_eq!(cx, 8.0 + 1e-6, 8.0);
        assert!(cx.failed());
        let _ = F64_EPSILON;
    }

    #[test]
    fn operands_are_evaluated_once() {
        let mut cx = TestContext::new();
        let mut calls = 0;
        let mut next = || {
            calls += 1;
            calls
        };
        expect_eq!(cx, next(), 0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn require_aborts_the_body_on_failure() {
        fn body(cx: &mut TestContext) {
            require_eq!(cx, 1, 2);
            cx.fail("unreachable.rs", 0, "must not run");
        }

        let mut cx = TestContext::new();
        body(&mut cx);
        assert_eq!(cx.failures().len(), 1);
        assert_eq!(cx.failures()[0].message, "got 1, expected 2");
    }

    #[test]
    fn require_continues_the_body_on_success() {
        fn body(cx: &mut TestContext) {
            require_true!(cx, true);
            require_ne!(cx, 1, 2);
            require_lt!(cx, 1, 2);
            require_le!(cx, 2, 2);
            require_gt!(cx, 3, 2);
            require_ge!(cx, 2, 2);
            require_false!(cx, false);
            require_f32_eq!(cx, 1.5, 1.5);
            require_f64_eq!(cx, 2.5, 2.5);
            cx.fail("end.rs", 1, "reached the end");
        }

        let mut cx = TestContext::new();
        body(&mut cx);
        assert_eq!(cx.failures().len(), 1);
        assert_eq!(cx.failures()[0].message, "reached the end");
    }

    #[test]
    fn failure_location_is_the_invocation_site() {
        let mut cx = TestContext::new();
        expect_true!(cx, false);
        assert_eq!(cx.failures()[0].file, file!());
    }
}
