use anyhow::{Context, anyhow};
use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Bridge Repair: which calibration equations can be made true with `+`, `*` and `||`
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 7, tags = ["recursion"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input::lines(input)
            .into_iter()
            .enumerate()
            .map(|(idx, line)| parse_equation(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (target, rest) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' in {line:?}"))?;
    let operands = rest
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()?;
    if operands.is_empty() {
        return Err(anyhow!("no operands in {line:?}"));
    }
    Ok(Equation {
        target: target.trim().parse()?,
        operands,
    })
}

/// Splits `value` into the digits before `suffix`, if `value` ends with `suffix`.
fn strip_digits(value: u64, suffix: u64) -> Option<u64> {
    let mut modulus = 10;
    while modulus <= suffix {
        modulus *= 10;
    }
    (value % modulus == suffix).then_some(value / modulus)
}

/// Undoes the operators right to left, pruning branches that cannot divide or strip.
fn reachable(target: u64, operands: &[u64], concat: bool) -> bool {
    match operands {
        [] => false,
        [only] => target == *only,
        [rest @ .., last] => {
            (target >= *last && reachable(target - last, rest, concat))
                || (*last != 0 && target % last == 0 && reachable(target / last, rest, concat))
                || (concat
                    && strip_digits(target, *last)
                        .is_some_and(|prefix| reachable(prefix, rest, concat)))
        }
    }
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| reachable(eq.target, &eq.operands, concat))
        .map(|eq| eq.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3749");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "11387");
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits(156, 6), Some(15));
        assert_eq!(strip_digits(1510, 10), Some(15));
        assert_eq!(strip_digits(7, 7), Some(0));
        assert_eq!(strip_digits(156, 7), None);
    }

    #[test]
    fn test_zero_operand() {
        assert!(reachable(5, &[5, 0], false));
        assert!(!reachable(6, &[5, 0], false));
    }

    #[test]
    fn test_bad_line() {
        assert!(Solver::parse("12 3 4\n").is_err());
    }
}
