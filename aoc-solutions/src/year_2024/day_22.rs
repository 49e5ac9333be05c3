use std::collections::HashMap;

use aoc_shared::{FifoQueue, Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Monkey Market: pseudorandom secret numbers and banana prices
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 22, tags = ["simulation", "hashing"])]
pub struct Solver;

const ROUNDS: usize = 2000;
const PRUNE_MODULUS: u64 = 16_777_216;
/// Consecutive price changes the monkey watches for
const WINDOW: usize = 4;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input::int_lines(input).map_err(ParseError::invalid)
    }
}

fn next_secret(mut secret: u64) -> u64 {
    secret = ((secret * 64) ^ secret) % PRUNE_MODULUS;
    secret = ((secret / 32) ^ secret) % PRUNE_MODULUS;
    ((secret * 2048) ^ secret) % PRUNE_MODULUS
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

/// Adds this buyer's price at the first occurrence of each change window into `totals`.
fn tally_windows(seed: u64, totals: &mut HashMap<String, u64>) {
    let mut window = FifoQueue::new(WINDOW);
    let mut seen = Set::new();
    let mut prices = secrets(seed).take(ROUNDS + 1).map(|s| (s % 10) as i64);
    let Some(mut previous) = prices.next() else {
        return;
    };

    for price in prices {
        window.enqueue(price - previous);
        previous = price;
        if !window.is_full() {
            continue;
        }
        let key = window.key();
        if seen.add(key.clone()) {
            *totals.entry(key).or_default() += price as u64;
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .iter()
            .filter_map(|&seed| secrets(seed).nth(ROUNDS))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut totals = HashMap::new();
        for &seed in shared.iter() {
            tally_windows(seed, &mut totals);
        }
        tracing::debug!(windows = totals.len(), "price change windows seen");
        let best = totals.values().copied().max().unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_secret_sequence() {
        let first: Vec<u64> = secrets(123).skip(1).take(3).collect();
        assert_eq!(first, vec![15887950, 16495136, 527345]);
    }

    #[test]
    fn test_example_part_1() {
        let mut shared = Solver::parse("1\n10\n100\n2024\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "37327623");
    }

    #[test]
    fn test_example_part_2() {
        let mut shared = Solver::parse("1\n2\n3\n2024\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "23");
    }

    #[test]
    fn test_window_counts_first_occurrence_only() {
        let mut totals = HashMap::new();
        tally_windows(123, &mut totals);
        // Price 6 after changes -1,-1,0,2 in the puzzle's ten-step walkthrough.
        assert_eq!(totals.get("-1,-1,0,2"), Some(&6));
    }
}
