use aoc_shared::{Direction, Grid, Point, Set, Stack, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Garden Groups: fencing cost of each same-plant region
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Set<Point>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = input::char_grid(input).map_err(ParseError::invalid)?;
        Ok(regions(&grid))
    }
}

fn regions(grid: &Grid<char>) -> Vec<Set<Point>> {
    let mut seen = Set::new();
    let mut regions = Vec::new();

    for origin in grid.points() {
        if seen.contains(&origin) {
            continue;
        }
        let plant = grid[origin];
        let mut region = Set::new();
        let mut stack: Stack<Point> = [origin].into_iter().collect();

        while let Some(current) = stack.pop() {
            if !seen.add(current) {
                continue;
            }
            region.add(current);
            for n in grid.neighbors(current) {
                if grid[n] == plant && !seen.contains(&n) {
                    stack.push(n);
                }
            }
        }
        regions.push(region);
    }
    regions
}

/// A fence segment: the plot it borders and the side it sits on
fn fences(region: &Set<Point>) -> Set<(Point, Direction)> {
    region
        .iter()
        .flat_map(|&p| Direction::ALL.into_iter().map(move |d| (p, d)))
        .filter(|&(p, d)| !region.contains(&p.step(d)))
        .collect()
}

/// Each straight side has exactly one fence with no continuation to its right.
fn sides(region: &Set<Point>) -> usize {
    let fences = fences(region);
    fences
        .iter()
        .filter(|&&(p, d)| !fences.contains(&(p.step(d.turn_right()), d)))
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared
            .iter()
            .map(|region| region.len() * fences(region).len())
            .sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared
            .iter()
            .map(|region| region.len() * sides(region))
            .sum();
        Ok(price.to_string())
    }
}
