//! Minimal host program: register a suite, run it, exit by outcome.

use minitest::{expect_f32_eq, TestContext, TestRegistry, TestRunner};

fn add(x: f32, y: f32) -> f32 {
    x + y
}

fn main() {
    let mut registry = TestRegistry::new();

    let suite = registry.register_suite("AddTest");
    registry
        .register_test(suite, "add", |cx: &mut TestContext| {
            expect_f32_eq!(cx, add(3.0, 5.0), 8.0);
        })
        .expect("suite handle is valid");

    let summary = TestRunner::new().run_all(&mut registry);

    // Exit-status mapping is the host's decision, not the harness's.
    if !summary.all_passed() {
        std::process::exit(1);
    }
}
