use std::collections::VecDeque;

use aoc_shared::{Direction, Grid, Point, Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Warehouse Woes: a robot pushing boxes around a warehouse
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 15, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// Warehouse with the robot's cell cleared to `.`
    grid: Grid<char>,
    robot: Point,
    moves: Vec<Direction>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let blocks = input::paragraphs(input);
        let [map, moves] = &blocks[..] else {
            return Err(ParseError::InvalidFormat(format!(
                "expected map and moves separated by a blank line, found {} block(s)",
                blocks.len()
            )));
        };

        let (grid, robot) =
            input::char_grid_with_marker(&map.join("\n"), '@', '.').map_err(ParseError::invalid)?;
        let moves = moves
            .iter()
            .flat_map(|line| line.chars())
            .map(|c| {
                Direction::try_from(c)
                    .map_err(|c| ParseError::InvalidFormat(format!("unknown move {c:?}")))
            })
            .collect::<Result<_, _>>()?;

        Ok(SharedData { grid, robot, moves })
    }
}

/// Doubles every tile horizontally; boxes become `[]`.
fn widen(grid: &Grid<char>) -> Grid<char> {
    let mut wide = Grid::filled(grid.width() * 2, grid.height(), '.');
    for (p, &c) in grid.cells() {
        let (left, right) = match c {
            '#' => ('#', '#'),
            'O' => ('[', ']'),
            _ => continue,
        };
        let l = Point::new(p.x * 2, p.y);
        wide[l] = left;
        wide[l.right()] = right;
    }
    wide
}

/// Cells that would move if the robot at `robot` stepped `dir`, or `None` if a wall blocks it.
///
/// Works for both `O` boxes and wide `[]` boxes: a vertical push on either half
/// of a wide box drags the other half along.
fn pushed_cells(grid: &Grid<char>, robot: Point, dir: Direction) -> Option<Vec<Point>> {
    let mut queue = VecDeque::from([robot]);
    let mut seen = Set::new();
    let mut moved = Vec::new();

    while let Some(cell) = queue.pop_front() {
        let next = cell.step(dir);
        let mut enqueue = |p: Point| {
            if seen.add(p) {
                moved.push(p);
                queue.push_back(p);
            }
        };
        match grid.get(next).copied() {
            None | Some('#') => return None,
            Some('O') => enqueue(next),
            Some('[') => {
                enqueue(next);
                if dir.is_vertical() {
                    enqueue(next.right());
                }
            }
            Some(']') => {
                enqueue(next);
                if dir.is_vertical() {
                    enqueue(next.left());
                }
            }
            Some(_) => {}
        }
    }
    Some(moved)
}

fn simulate(mut grid: Grid<char>, mut robot: Point, moves: &[Direction]) -> Grid<char> {
    for &dir in moves {
        let Some(cells) = pushed_cells(&grid, robot, dir) else {
            continue;
        };
        let contents: Vec<(Point, char)> = cells.iter().map(|&p| (p, grid[p])).collect();
        for &(p, _) in &contents {
            grid[p] = '.';
        }
        for (p, c) in contents {
            grid[p.step(dir)] = c;
        }
        robot = robot.step(dir);
    }
    grid
}

fn gps_sum(grid: &Grid<char>) -> i64 {
    grid.cells()
        .filter(|(_, c)| matches!(c, 'O' | '['))
        .map(|(p, _)| 100 * p.y + p.x)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = simulate(shared.grid.clone(), shared.robot, &shared.moves);
        Ok(gps_sum(&grid).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let robot = Point::new(shared.robot.x * 2, shared.robot.y);
        let grid = simulate(widen(&shared.grid), robot, &shared.moves);
        Ok(gps_sum(&grid).to_string())
    }
}
