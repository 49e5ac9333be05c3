//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input lookup error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Thread pool setup failed
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Requested part is beyond what the day's solver provides
    #[error("Day {day} has {parts} part(s), part {part} requested")]
    PartUnavailable { day: u8, part: u8, parts: u8 },

    /// At least one part failed to solve
    #[error("{failed} part(s) of day {day} failed")]
    PartsFailed { day: u8, failed: usize },
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file where one was expected
    #[error("No input for day {day} at {}", .path.display())]
    NotFound { day: u8, path: PathBuf },

    /// Input exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
