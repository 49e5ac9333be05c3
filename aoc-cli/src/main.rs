//! AOC CLI - Command-line interface for running the Advent of Code 2024 solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    // Usage errors exit with status 2 from inside clap
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    config.install_thread_pool()?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let formatter = OutputFormatter::new(config.verbose);

    if config.list {
        if registry.is_empty() {
            println!("No solvers found matching the specified filters.");
        }
        formatter.print_listing(registry.iter_info());
        return Ok(());
    }

    let day = config
        .day
        .ok_or_else(|| CliError::Config("--day is required".to_string()))?;
    let _span = tracing::info_span!("day", day).entered();

    let run = Executor::new(&registry, &config).run_day(day)?;
    tracing::debug!(
        parse_micros = run.parse_duration.num_microseconds(),
        "input parsed"
    );
    for result in &run.results {
        formatter.print_result(result);
    }
    formatter.print_summary(&run);

    match run.failures() {
        0 => Ok(()),
        failed => Err(CliError::PartsFailed { day, failed }),
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
