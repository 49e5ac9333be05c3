use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Code Chronicle: which keys fit which locks
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(day = 25, tags = ["parsing"])]
pub struct Solver;

/// Pin columns per schematic
const COLUMNS: usize = 5;

type Heights = [usize; COLUMNS];

#[derive(Debug, Default)]
pub struct SharedData {
    locks: Vec<Heights>,
    keys: Vec<Heights>,
    /// Usable pin height, excluding the solid top and bottom rows
    space: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut data = SharedData::default();
        for block in input::paragraphs(input) {
            let rows = block.len();
            if rows < 2 || block.iter().any(|r| r.len() != COLUMNS) {
                return Err(ParseError::InvalidFormat(format!(
                    "schematic must be at least 2 rows of {COLUMNS} columns"
                )));
            }
            data.space = rows - 2;

            let mut heights = [0; COLUMNS];
            for row in &block[1..rows - 1] {
                for (col, c) in row.chars().enumerate() {
                    if c == '#' {
                        heights[col] += 1;
                    }
                }
            }
            // Locks hang from a filled top row; keys rise from a filled bottom row.
            if block[0].chars().all(|c| c == '#') {
                data.locks.push(heights);
            } else {
                data.keys.push(heights);
            }
        }
        Ok(data)
    }
}

fn fits(lock: &Heights, key: &Heights, space: usize) -> bool {
    lock.iter().zip(key).all(|(l, k)| l + k <= space)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .locks
            .iter()
            .cartesian_product(&shared.keys)
            .filter(|(lock, key)| fits(lock, key, shared.space))
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.locks, vec![[0, 5, 3, 4, 3], [1, 2, 0, 5, 3]]);
        assert_eq!(shared.keys[0], [5, 0, 2, 1, 3]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
    }

    #[test]
    fn test_no_second_part() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::PartNotImplemented(2)) | Err(SolveError::PartOutOfRange(2))
        ));
    }

    #[test]
    fn test_ragged_schematic() {
        assert!(Solver::parse("#####\n###\n.....\n").is_err());
    }
}
