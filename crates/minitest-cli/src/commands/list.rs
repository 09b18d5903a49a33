//! List command - show registered suites and tests

use crate::demo;
use anyhow::Result;
use colored::Colorize;

/// Print suite and test names in registration order
pub fn run(with_failing: bool) -> Result<()> {
    let registry = demo::build_registry(with_failing);

    for suite in registry.suites() {
        println!("{}", suite.name().bold());
        for case in suite.cases() {
            println!("  {}", case.name());
        }
    }

    println!();
    println!(
        "{} suites, {} tests",
        registry.suites().len(),
        registry.total_tests()
    );

    Ok(())
}
