//! End-to-end tests for the demo driver
//!
//! These cover:
//! - `minitest run` exit codes for passing and failing suites
//! - Banner output content (counts, names, pass/fail lines)
//! - `--suite` scoping and unknown-suite no-op behavior
//! - `--json` summary output
//! - `minitest list` output

use predicates::prelude::*;

#[test]
fn run_all_passing_suites_succeeds() {
    assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running 5 tests from 2 suites."))
        .stdout(predicate::str::contains("[ RUN      ] Math.addf"))
        .stdout(predicate::str::contains("[       OK ] Math.addf"))
        .stdout(predicate::str::contains("[  PASSED  ] 5 tests."))
        .stdout(predicate::str::contains("FAILED").not());
}

#[test]
fn run_with_failing_suite_exits_nonzero() {
    assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--no-color", "--fail"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[  FAILED  ] Broken.bad_math"))
        .stdout(predicate::str::contains("got 4, expected 5"))
        .stdout(predicate::str::contains("[  FAILED  ] 2 tests."));
}

#[test]
fn require_macro_aborts_only_its_own_body() {
    // aborts_early fails its require_true and must not reach the later
    // expect_eq, so exactly one diagnostic is printed for it
    assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--no-color", "--fail"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("got false, expected true"))
        .stdout(predicate::str::contains("got 0, expected 1").not());
}

#[test]
fn run_single_suite_scopes_the_report() {
    assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--no-color", "--suite", "Strings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running 2 tests from 1 suite."))
        .stdout(predicate::str::contains("Strings.concat"))
        .stdout(predicate::str::contains("Math.addf").not());
}

#[test]
fn unknown_suite_is_a_silent_no_op() {
    assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--no-color", "--suite", "Nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_run_emits_summary_only() {
    let assert = assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--json"])
        .assert()
        .success();

    let output = assert.get_output();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["tests"], 5);
    assert_eq!(parsed["passed"], 5);
    assert_eq!(parsed["failed"], 0);
    assert_eq!(parsed["suites"], 2);
}

#[test]
fn json_run_reports_failures() {
    let assert = assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .args(["run", "--json", "--fail"])
        .assert()
        .code(1);

    let parsed: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(parsed["tests"], 7);
    assert_eq!(parsed["failed"], 2);
}

#[test]
fn list_prints_registration_order() {
    assert_cmd::cargo::cargo_bin_cmd!("minitest")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Math"))
        .stdout(predicate::str::contains("addf"))
        .stdout(predicate::str::contains("Strings"))
        .stdout(predicate::str::contains("2 suites, 5 tests"));
}
