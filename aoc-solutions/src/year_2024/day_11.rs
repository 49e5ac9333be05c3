use std::collections::HashMap;

use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Plutonian Pebbles: stones that split or grow each blink
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 11, tags = ["memoization"])]
pub struct Solver;

const PART_1_BLINKS: usize = 25;
const PART_2_BLINKS: usize = 75;

/// Stone engraving to how many stones carry it. Order never matters.
type Counts = HashMap<u64, u64>;

#[derive(Debug)]
pub struct SharedData {
    counts: Counts,
    /// `totals[k]` is the stone count after `k` blinks, for every blink reached so far
    totals: Vec<u64>,
    /// Rule results per engraving, reused across blinks and parts
    memo: HashMap<u64, Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones: Vec<u64> = input::single_int_line(input, " ").map_err(ParseError::invalid)?;
        let mut counts = Counts::new();
        for stone in stones {
            *counts.entry(stone).or_default() += 1;
        }
        let initial = counts.values().sum();
        Ok(SharedData {
            counts,
            totals: vec![initial],
            memo: HashMap::new(),
        })
    }
}

fn rule(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

impl SharedData {
    fn blink(&mut self) {
        let mut next = Counts::with_capacity(self.counts.len());
        for (&stone, &count) in &self.counts {
            let children = self.memo.entry(stone).or_insert_with(|| rule(stone));
            for &child in children.iter() {
                *next.entry(child).or_default() += count;
            }
        }
        self.totals.push(next.values().sum());
        self.counts = next;
    }

    /// Stone count after `blinks` total blinks. Blinks only past the furthest state
    /// reached so far; earlier counts are answered from `totals`.
    fn count_after(&mut self, blinks: usize) -> u64 {
        while self.totals.len() <= blinks {
            self.blink();
        }
        tracing::debug!(blinks, distinct = self.counts.len(), "stones after blinking");
        self.totals[blinks]
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_after(PART_1_BLINKS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_after(PART_2_BLINKS).to_string())
    }
}
