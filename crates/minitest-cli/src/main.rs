use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod demo;

/// Minitest demo driver.
///
/// Registers the built-in sample suites and drives the minitest harness
/// over them: run everything, run one suite by name, or list what is
/// registered.
///
/// EXAMPLES:
///     minitest run                 Run all sample suites
///     minitest run --suite Math    Run one suite by name
///     minitest run --fail          Include a deliberately failing suite
///     minitest list                Show registered suites and tests
///
/// ENVIRONMENT VARIABLES:
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "minitest")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample suites
    ///
    /// Exits with status 1 when any test failed.
    ///
    /// EXAMPLES:
    ///     minitest run                    Run everything
    ///     minitest run --suite Strings    Run one suite
    ///     minitest run --json             Machine-readable summary
    #[command(visible_alias = "r")]
    Run {
        /// Run only the suite with this name
        #[arg(long, short = 's')]
        suite: Option<String>,
        /// Disable colored output
        #[arg(long, env = "NO_COLOR")]
        no_color: bool,
        /// Print the run summary as JSON instead of banner output
        #[arg(long)]
        json: bool,
        /// Also register a deliberately failing suite
        #[arg(long)]
        fail: bool,
    },

    /// List registered suites and their tests in registration order
    #[command(visible_alias = "l")]
    List {
        /// Also register the deliberately failing suite
        #[arg(long)]
        fail: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            suite,
            no_color,
            json,
            fail,
        } => commands::run::run(commands::run::RunArgs {
            suite,
            no_color,
            json,
            fail,
        }),
        Commands::List { fail } => commands::list::run(fail),
    }
}
