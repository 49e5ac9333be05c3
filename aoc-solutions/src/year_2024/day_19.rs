use std::collections::HashMap;

use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Linen Layout: building designs from an unlimited supply of towel patterns
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 19, tags = ["memoization", "strings"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
    /// Arrangement count per design, filled on first use
    arrangements: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let blocks = input::paragraphs(input);
        let [towels, designs] = &blocks[..] else {
            return Err(ParseError::InvalidFormat(
                "expected towel patterns and designs separated by a blank line".into(),
            ));
        };
        let towels = towels
            .iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        Ok(SharedData {
            towels,
            designs: designs.clone(),
            arrangements: None,
        })
    }
}

/// Number of ways to build `design` from `towels`, memoised on the remaining suffix.
fn count_arrangements<'a>(
    design: &'a str,
    towels: &[&str],
    memo: &mut HashMap<&'a str, u64>,
) -> u64 {
    if design.is_empty() {
        return 1;
    }
    if let Some(&known) = memo.get(design) {
        return known;
    }
    let ways = towels
        .iter()
        .filter_map(|t| design.strip_prefix(t))
        .map(|rest| count_arrangements(rest, towels, memo))
        .sum();
    memo.insert(design, ways);
    ways
}

impl SharedData<'_> {
    fn arrangements(&mut self) -> &[u64] {
        let towels = &self.towels;
        let designs = &self.designs;
        self.arrangements.get_or_insert_with(|| {
            let mut memo = HashMap::new();
            designs
                .iter()
                .map(|&d| count_arrangements(d, towels, &mut memo))
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared.arrangements().iter().filter(|&&n| n > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.arrangements().iter().sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "16");
    }

    #[test]
    fn test_single_design_counts() {
        let towels = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        let mut memo = HashMap::new();
        assert_eq!(count_arrangements("gbbr", &towels, &mut memo), 4);
        assert_eq!(count_arrangements("ubwu", &towels, &mut memo), 0);
    }

    #[test]
    fn test_missing_designs() {
        assert!(Solver::parse("r, b\n").is_err());
    }
}
