use aoc_shared::{Direction, Grid, Point, Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

/// Guard Gallivant: a guard walking a lab, turning right at obstacles
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 6, tags = ["grid", "simulation", "parallel"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid<char>,
    start: Point,
    /// Cells visited on the unobstructed walk, computed once for both parts
    route: Option<Set<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (grid, start) = input::char_grid_with_marker(input, '^', '.').map_err(ParseError::invalid)?;
        Ok(SharedData {
            grid,
            start,
            route: None,
        })
    }
}

/// How a walk ended
enum Walk {
    Exited(Set<Point>),
    Looped,
}

fn walk(grid: &Grid<char>, start: Point) -> Walk {
    let mut position = start;
    let mut facing = Direction::Up;
    let mut route = Set::new();
    let mut seen = Set::new();
    route.add(position);

    loop {
        if !seen.add((position, facing)) {
            return Walk::Looped;
        }
        let next = position.step(facing);
        match grid.get(next) {
            None => return Walk::Exited(route),
            Some('#') => facing = facing.turn_right(),
            Some(_) => {
                position = next;
                route.add(position);
            }
        }
    }
}

fn route(shared: &mut SharedData) -> Result<&Set<Point>, SolveError> {
    if shared.route.is_none() {
        match walk(&shared.grid, shared.start) {
            Walk::Exited(route) => shared.route = Some(route),
            Walk::Looped => return Err(SolveError::failed("guard never leaves the lab")),
        }
    }
    shared
        .route
        .as_ref()
        .ok_or_else(|| SolveError::failed("route not computed"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.start;
        // Only cells on the original route can change it; the start is off limits.
        let candidates: Vec<Point> = route(shared)?
            .iter()
            .copied()
            .filter(|&p| p != start)
            .collect();
        let grid = &shared.grid;

        let loops = candidates
            .par_iter()
            .filter(|&&p| {
                let mut blocked = grid.clone();
                blocked[p] = '#';
                matches!(walk(&blocked, start), Walk::Looped)
            })
            .count();

        tracing::debug!(candidates = candidates.len(), loops, "checked obstructions");
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "41");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_part_2_without_part_1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_trapped_guard_fails() {
        let mut shared = Solver::parse(".#.\n#^#\n.#.\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_guard() {
        assert!(Solver::parse("...\n...\n").is_err());
    }
}
