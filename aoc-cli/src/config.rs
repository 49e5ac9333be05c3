//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day to run (None only when listing)
    pub day: Option<u8>,
    /// Part filter (None = all parts)
    pub part: Option<u8>,
    /// Root of the `dayNN/input.txt` tree
    pub input_dir: PathBuf,
    /// Explicit input file for the selected day
    pub input: Option<PathBuf>,
    /// Number of threads for parallel solvers
    pub thread_count: usize,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Timings and summary on output
    pub verbose: bool,
    /// List solvers instead of running
    pub list: bool,
}

impl Config {
    /// Build config from CLI args, expanding `~` in paths
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            day: args.day,
            part: args.part,
            input_dir: expand_tilde(&args.input_dir),
            input: args.input.as_deref().map(expand_tilde),
            thread_count,
            tags: args.tags,
            verbose: args.verbose,
            list: args.list,
        })
    }

    /// Size the global rayon pool used by parallel solvers
    pub fn install_thread_pool(&self) -> Result<(), CliError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .build_global()?;
        tracing::debug!(threads = self.thread_count, "configured thread pool");
        Ok(())
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_tilde_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
    }

    #[test]
    fn test_plain_paths_untouched() {
        assert_eq!(expand_tilde(Path::new("days")), PathBuf::from("days"));
        assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            config(&["-d", "1", "--threads", "0"]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&["-d", "3", "--input-dir", "puzzles"]).unwrap();
        assert_eq!(cfg.day, Some(3));
        assert_eq!(cfg.part, None);
        assert_eq!(cfg.input_dir, PathBuf::from("puzzles"));
        assert!(cfg.thread_count >= 1);
        assert!(!cfg.verbose);
    }
}
