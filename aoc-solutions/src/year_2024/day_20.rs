use aoc_shared::{Grid, Point, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Race Condition: shortcuts through walls on a single-lane race track
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 20, tags = ["grid", "shortcuts"])]
pub struct Solver;

const MIN_SAVING: usize = 100;
const SHORT_CHEAT: usize = 2;
const LONG_CHEAT: usize = 20;

impl AocParser for Solver {
    /// Track cells in race order, start first
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (grid, start, end) =
            input::char_grid_with_markers(input, 'S', 'E', '.').map_err(ParseError::invalid)?;
        trace_track(&grid, start, end)
    }
}

fn trace_track(grid: &Grid<char>, start: Point, end: Point) -> Result<Vec<Point>, ParseError> {
    let mut track = vec![start];
    let mut previous = None;
    let mut current = start;

    while current != end {
        let next = grid
            .neighbors(current)
            .find(|&n| grid[n] == '.' && Some(n) != previous)
            .ok_or_else(|| ParseError::MissingData(format!("track dead-ends at {current}")))?;
        previous = Some(current);
        current = next;
        track.push(current);
    }
    Ok(track)
}

/// Cheats of at most `max_len` picoseconds that save at least `min_saving`.
fn count_cheats(track: &[Point], max_len: usize, min_saving: usize) -> usize {
    track
        .iter()
        .enumerate()
        .map(|(i, &from)| {
            track
                .iter()
                .enumerate()
                .skip(i + min_saving)
                .filter(|&(j, &to)| {
                    let len = from.manhattan_distance(to) as usize;
                    len <= max_len && j - i - len >= min_saving
                })
                .count()
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_cheats(shared, SHORT_CHEAT, MIN_SAVING).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_cheats(shared, LONG_CHEAT, MIN_SAVING).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn test_track_length() {
        let track = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(track.len() - 1, 84);
    }

    #[test]
    fn test_short_cheats() {
        let track = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(count_cheats(&track, SHORT_CHEAT, 64), 1);
        assert_eq!(count_cheats(&track, SHORT_CHEAT, 20), 5);
    }

    #[test]
    fn test_long_cheats() {
        let track = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(count_cheats(&track, LONG_CHEAT, 76), 3);
        assert_eq!(count_cheats(&track, LONG_CHEAT, 74), 7);
    }

    #[test]
    fn test_example_has_no_big_savings() {
        let mut track = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut track, 1).unwrap(), "0");
    }
}
