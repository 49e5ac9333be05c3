use std::collections::HashMap;

use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Historian Hysteria: two location-id columns
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 1, tags = ["sorting", "easy"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<Vec<i64>> = input::split_ints(input, " ").map_err(ParseError::invalid)?;
        let mut left = Vec::with_capacity(rows.len());
        let mut right = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            match row[..] {
                [l, r] => {
                    left.push(l);
                    right.push(r);
                }
                _ => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected two numbers, found {}",
                        idx + 1,
                        row.len()
                    )));
                }
            }
        }
        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut left = shared.left.clone();
        let mut right = shared.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        let total: i64 = left
            .iter()
            .zip(&right)
            .map(|(l, r)| (l - r).abs())
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for &r in &shared.right {
            *counts.entry(r).or_default() += 1;
        }

        let similarity: i64 = shared
            .left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
