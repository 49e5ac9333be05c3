use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Red-Nosed Reports: level sequences checked for safe monotone steps
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 2, tags = ["easy"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input::split_ints(input, " ").map_err(ParseError::invalid)
    }
}

/// Strictly increasing or strictly decreasing, every step between 1 and 3.
fn is_safe(levels: &[i64]) -> bool {
    let diffs = || levels.windows(2).map(|w| w[1] - w[0]);
    diffs().all(|d| (1..=3).contains(&d)) || diffs().all(|d| (-3..=-1).contains(&d))
}

/// Safe as-is, or safe once any single level is dropped.
fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }
    (0..levels.len()).any(|skip| {
        let reduced: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &l)| l)
            .collect();
        is_safe(&reduced)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|r| is_safe(r)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|r| is_safe_dampened(r))
            .count()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn test_dampener_first_and_last_level() {
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[1, 2, 3, 9]));
        assert!(!is_safe_dampened(&[1, 5, 9, 13]));
    }

    #[test]
    fn test_short_reports_are_safe() {
        assert!(is_safe(&[4]));
        assert!(is_safe(&[]));
    }
}
