//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2024 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2024 solvers", version)]
pub struct Args {
    /// Day to run
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=25),
        required_unless_present = "list"
    )]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Directory holding `dayNN/input.txt` puzzle inputs
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "days")]
    pub input_dir: PathBuf,

    /// Input file for the selected day, instead of looking in the input directory
    #[arg(short, long, conflicts_with = "list")]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel solvers
    #[arg(long)]
    pub threads: Option<usize>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Print parse and solve timings and a summary
    #[arg(short, long)]
    pub verbose: bool,

    /// List registered days instead of running one
    #[arg(long)]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_day_and_part() {
        let args = Args::try_parse_from(["aoc", "-d", "7", "-p", "2"]).unwrap();
        assert_eq!(args.day, Some(7));
        assert_eq!(args.part, Some(2));
        assert!(!args.list);
    }

    #[test]
    fn test_day_out_of_range() {
        let err = Args::try_parse_from(["aoc", "--day", "26"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_day_required_without_list() {
        let err = Args::try_parse_from(["aoc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(Args::try_parse_from(["aoc", "--list"]).is_ok());
    }

    #[test]
    fn test_tags_split_on_comma() {
        let args = Args::try_parse_from(["aoc", "--list", "-t", "grid,bfs"]).unwrap();
        assert_eq!(args.tags, vec!["grid", "bfs"]);
    }
}
