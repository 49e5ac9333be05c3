use aoc_shared::{Grid, Point, input, unique};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Hoof It: hiking trails climbing from height 0 to 9 one step at a time
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 10, tags = ["grid", "dfs"])]
pub struct Solver;

const SUMMIT: u8 = 9;

impl AocParser for Solver {
    /// Impassable cells (`.` in the examples) are `None`
    type SharedData<'a> = Grid<Option<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input::digit_grid(input).map_err(ParseError::invalid)
    }
}

/// Every summit reached from `from`, once per distinct trail.
fn trail_ends(grid: &Grid<Option<u8>>, from: Point) -> Vec<Point> {
    let Some(Some(height)) = grid.get(from).copied() else {
        return Vec::new();
    };
    if height == SUMMIT {
        return vec![from];
    }
    grid.neighbors(from)
        .filter(|&n| grid[n] == Some(height + 1))
        .flat_map(|n| trail_ends(grid, n))
        .collect()
}

fn trailheads(grid: &Grid<Option<u8>>) -> impl Iterator<Item = Point> + '_ {
    grid.cells()
        .filter(|(_, h)| **h == Some(0))
        .map(|(p, _)| p)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<Option<u8>> = shared;
        let score: usize = trailheads(grid)
            .map(|head| unique(&trail_ends(grid, head)).len())
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<Option<u8>> = shared;
        let rating: usize = trailheads(grid)
            .map(|head| trail_ends(grid, head).len())
            .sum();
        Ok(rating.to_string())
    }
}
