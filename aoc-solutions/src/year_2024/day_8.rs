use std::collections::BTreeMap;

use aoc_shared::{Grid, Point, Set, combinations, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Resonant Collinearity: antinodes of same-frequency antenna pairs
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 8, tags = ["grid", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid<char>,
    /// Every unordered pair of antennas sharing a frequency
    pairs: Vec<(Point, Point)>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = input::char_grid(input).map_err(ParseError::invalid)?;

        let mut antennas: BTreeMap<char, Vec<Point>> = BTreeMap::new();
        for (p, &c) in grid.cells() {
            if c != '.' {
                antennas.entry(c).or_default().push(p);
            }
        }

        let pairs = antennas
            .values()
            .flat_map(|locations| combinations(locations, 2))
            .map(|pair| (pair[0], pair[1]))
            .collect();

        Ok(SharedData { grid, pairs })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut antinodes = Set::new();
        for &(a, b) in &shared.pairs {
            let offset = a - b;
            antinodes.extend(
                [a + offset, b - offset]
                    .into_iter()
                    .filter(|p| shared.grid.contains(*p)),
            );
        }
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut antinodes = Set::new();
        for &(a, b) in &shared.pairs {
            let offset = a - b;
            // Walk out from `a` both ways; the antennas themselves count.
            let mut p = a;
            while shared.grid.contains(p) {
                antinodes.add(p);
                p = p + offset;
            }
            let mut p = a;
            while shared.grid.contains(p) {
                antinodes.add(p);
                p = p - offset;
            }
        }
        Ok(antinodes.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_single_antenna_has_no_antinodes() {
        let mut shared = Solver::parse("...\n.a.\n...\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }
}
