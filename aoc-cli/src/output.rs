//! Output formatting for solver results

use crate::executor::{DayRun, PartResult};
use aoc_solver::FactoryInfo;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    verbose: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result; failures go to stderr
    pub fn print_result(&self, result: &PartResult) {
        match &result.answer {
            Ok(_) => println!("{}", self.format_result(result)),
            Err(_) => eprintln!("{}", self.format_result(result)),
        }
    }

    /// `Part N: value`, with the solve time appended in verbose mode
    pub fn format_result(&self, result: &PartResult) -> String {
        match &result.answer {
            Ok(answer) if self.verbose => format!(
                "Part {}: {} (solve: {})",
                result.part,
                answer,
                format_duration(result.solve_duration)
            ),
            Ok(answer) => format!("Part {}: {}", result.part, answer),
            Err(e) => format!("Part {}: Error - {}", result.part, e),
        }
    }

    /// Print a summary after the day's parts
    /// Shows parse and solve time next to the actual elapsed wall-clock time
    pub fn print_summary(&self, run: &DayRun) {
        if !self.verbose {
            return;
        }

        let total = run.results.len();
        let failures = run.failures();
        let total_solve_time: TimeDelta = run
            .results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Day {:02} ---", run.day);
        println!("Parts: {} solved, {} failed", total - failures, failures);
        println!("Parse time: {}", format_duration(run.parse_duration));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
    }

    /// Print one line per registered day
    pub fn print_listing(&self, infos: impl IntoIterator<Item = FactoryInfo>) {
        for info in infos {
            println!("{}", format_info(&info));
        }
    }
}

fn format_info(info: &FactoryInfo) -> String {
    let tags = if info.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", info.tags.iter().join(", "))
    };
    format!("Day {:02}: {} part(s){}", info.day, info.parts, tags)
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolveError;
    use proptest::prelude::*;

    fn result(part: u8, answer: Result<&str, SolveError>) -> PartResult {
        PartResult {
            part,
            answer: answer.map(str::to_string),
            solve_duration: TimeDelta::microseconds(1500),
        }
    }

    #[test]
    fn test_plain_answer_line() {
        let fmt = OutputFormatter::new(false);
        assert_eq!(fmt.format_result(&result(1, Ok("11"))), "Part 1: 11");
        assert_eq!(
            fmt.format_result(&result(2, Ok("co,de,ka,ta"))),
            "Part 2: co,de,ka,ta"
        );
    }

    #[test]
    fn test_verbose_adds_timing() {
        let fmt = OutputFormatter::new(true);
        assert_eq!(
            fmt.format_result(&result(1, Ok("31"))),
            "Part 1: 31 (solve: 1.50ms)"
        );
    }

    #[test]
    fn test_error_line() {
        let fmt = OutputFormatter::new(false);
        let line = fmt.format_result(&result(2, Err(SolveError::failed("no path"))));
        assert!(line.starts_with("Part 2: Error - "));
        assert!(line.contains("no path"));
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(2500)), "2.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(3250)), "3.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_format_info() {
        let info = FactoryInfo {
            day: 6,
            parts: 2,
            tags: &["grid", "parallel"],
        };
        assert_eq!(format_info(&info), "Day 06: 2 part(s) [grid, parallel]");
        let bare = FactoryInfo {
            day: 25,
            parts: 1,
            tags: &[],
        };
        assert_eq!(format_info(&bare), "Day 25: 1 part(s)");
    }

    proptest! {
        #[test]
        fn prop_std_and_chrono_formatting_agree(micros in 0u64..1_000_000) {
            let std = std::time::Duration::from_micros(micros);
            let chrono = TimeDelta::microseconds(micros as i64);
            prop_assert_eq!(format_std_duration(std), format_duration(chrono));
        }
    }
}
