//! Runs the selected day's solver part by part

use crate::config::Config;
use crate::error::CliError;
use crate::input::{InputStore, read_input};
use aoc_solver::{SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from solving a single part
#[derive(Debug)]
pub struct PartResult {
    pub part: u8,
    pub answer: Result<String, SolveError>,
    pub solve_duration: TimeDelta,
}

/// Everything produced by one day's run
#[derive(Debug)]
pub struct DayRun {
    pub day: u8,
    pub parse_duration: TimeDelta,
    pub results: Vec<PartResult>,
}

impl DayRun {
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| r.answer.is_err()).count()
    }
}

/// Sequential executor for one day at a time
pub struct Executor<'r> {
    registry: &'r SolverRegistry,
    inputs: InputStore,
    input_override: Option<PathBuf>,
    part_filter: Option<u8>,
}

impl<'r> Executor<'r> {
    pub fn new(registry: &'r SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            input_override: config.input.clone(),
            part_filter: config.part,
        }
    }

    /// Parts to run for a solver with `max_parts` parts
    pub fn filter_parts(&self, day: u8, max_parts: u8) -> Result<RangeInclusive<u8>, CliError> {
        match self.part_filter {
            Some(p) if p <= max_parts => Ok(p..=p),
            Some(p) => Err(CliError::PartUnavailable {
                day,
                part: p,
                parts: max_parts,
            }),
            None => Ok(1..=max_parts),
        }
    }

    fn load_input(&self, day: u8) -> Result<String, CliError> {
        let input = match &self.input_override {
            Some(path) => read_input(day, path)?,
            None => self.inputs.get(day)?,
        };
        Ok(input)
    }

    /// Parse the day's input once, then solve each selected part in order.
    ///
    /// Lookup, input and parse failures abort the run. Part failures are
    /// recorded in the returned [`DayRun`] so later parts still execute.
    pub fn run_day(&self, day: u8) -> Result<DayRun, CliError> {
        let info = self
            .registry
            .get_info(day)
            .ok_or(SolverError::NotFound(day))?;
        let parts = self.filter_parts(day, info.parts)?;
        let input = self.load_input(day)?;

        let mut solver = self.registry.create_solver(day, &input)?;
        let parse_duration = solver.parse_duration();

        let results = parts
            .map(|part| {
                let (answer, solve_duration) = match solver.solve(part) {
                    Ok(res) => {
                        let duration = res.duration();
                        (Ok(res.answer), duration)
                    }
                    Err(e) => {
                        tracing::warn!(day, part, error = %e, "part failed");
                        (Err(e), TimeDelta::zero())
                    }
                };
                PartResult {
                    part,
                    answer,
                    solve_duration,
                }
            })
            .collect();

        Ok(DayRun {
            day,
            parse_duration,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolverRegistryBuilder};
    use std::fs;
    use tempfile::TempDir;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = i64;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{e}")))
        }
    }

    impl PartSolver<1> for Doubler {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok((*shared * 2).to_string())
        }
    }

    impl PartSolver<2> for Doubler {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            if *shared < 0 {
                return Err(SolveError::failed("negative"));
            }
            Ok((*shared * 4).to_string())
        }
    }

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_solver::<Doubler>(2, &["test"])
            .unwrap()
            .build()
    }

    fn config(dir: &TempDir, part: Option<u8>) -> Config {
        Config {
            day: Some(2),
            part,
            input_dir: dir.path().to_path_buf(),
            input: None,
            thread_count: 1,
            tags: Vec::new(),
            verbose: false,
            list: false,
        }
    }

    fn write_input(dir: &TempDir, day: u8, content: &str) {
        let day_dir = dir.path().join(format!("day{day:02}"));
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), content).unwrap();
    }

    #[test]
    fn test_runs_all_parts_in_order() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2, "21\n");
        let registry = registry();
        let executor = Executor::new(&registry, &config(&temp, None));

        let run = executor.run_day(2).unwrap();
        let answers: Vec<_> = run
            .results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().clone()))
            .collect();
        assert_eq!(answers, vec![(1, "42".to_string()), (2, "84".to_string())]);
        assert_eq!(run.failures(), 0);
    }

    #[test]
    fn test_single_part_and_failure_recorded() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2, "-1\n");
        let registry = registry();
        let executor = Executor::new(&registry, &config(&temp, Some(2)));

        let run = executor.run_day(2).unwrap();
        assert_eq!(run.results.len(), 1);
        assert!(run.results[0].answer.is_err());
        assert_eq!(run.failures(), 1);
    }

    #[test]
    fn test_input_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.txt");
        fs::write(&path, "5").unwrap();
        let registry = registry();
        let mut cfg = config(&temp, Some(1));
        cfg.input = Some(path);

        let run = Executor::new(&registry, &cfg).run_day(2).unwrap();
        assert_eq!(run.results[0].answer.as_deref().unwrap(), "10");
    }

    #[test]
    fn test_lookup_errors() {
        let temp = TempDir::new().unwrap();
        let registry = registry();
        let executor = Executor::new(&registry, &config(&temp, None));

        assert!(matches!(
            executor.run_day(9),
            Err(CliError::Solver(SolverError::NotFound(9)))
        ));
        assert!(matches!(executor.run_day(2), Err(CliError::Input(_))));

        write_input(&temp, 2, "not a number");
        assert!(matches!(
            executor.run_day(2),
            Err(CliError::Solver(SolverError::ParseError(_)))
        ));
    }

    #[test]
    fn test_part_beyond_solver() {
        let temp = TempDir::new().unwrap();
        let registry = registry();
        let executor = Executor::new(&registry, &config(&temp, Some(2)));
        assert!(matches!(
            executor.filter_parts(25, 1),
            Err(CliError::PartUnavailable {
                day: 25,
                part: 2,
                parts: 1
            })
        ));
        assert_eq!(executor.filter_parts(2, 2).unwrap(), 2..=2);
    }
}
