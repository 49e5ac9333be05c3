use aoc_shared::{Grid, Point, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Ceres Search: word search for `XMAS`
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 4, tags = ["grid"])]
pub struct Solver;

const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input::char_grid(input).map_err(ParseError::invalid)
    }
}

fn spells(grid: &Grid<char>, start: Point, step: Point, word: &str) -> bool {
    let mut p = start;
    for c in word.chars() {
        if grid.get(p) != Some(&c) {
            return false;
        }
        p = p + step;
    }
    true
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count: usize = grid
            .cells()
            .filter(|(_, c)| **c == 'X')
            .map(|(p, _)| {
                DIRECTIONS
                    .iter()
                    .filter(|&&d| spells(grid, p, d, "XMAS"))
                    .count()
            })
            .sum();
        Ok(count.to_string())
    }
}

/// Both diagonals through `center` read `MAS` in either direction.
fn is_x_mas(grid: &Grid<char>, center: Point) -> bool {
    let diagonal = |a: Point, b: Point| {
        matches!(
            (grid.get(center + a), grid.get(center + b)),
            (Some('M'), Some('S')) | (Some('S'), Some('M'))
        )
    };
    diagonal(Point::new(-1, -1), Point::new(1, 1)) && diagonal(Point::new(1, -1), Point::new(-1, 1))
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count = grid
            .cells()
            .filter(|&(p, c)| *c == 'A' && is_x_mas(grid, p))
            .count();
        Ok(count.to_string())
    }
}
