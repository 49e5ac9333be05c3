use std::collections::{HashMap, VecDeque};

use aoc_shared::{Grid, Point, Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// RAM Run: escaping a memory grid while bytes keep falling
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 18, tags = ["grid", "bfs"])]
pub struct Solver;

const MEMORY_SIZE: usize = 71;
const FALLEN_BYTES: usize = 1024;

#[derive(Debug)]
pub struct SharedData {
    bytes: Vec<Point>,
    /// Side length of the square memory space
    size: usize,
    /// Bytes already fallen before part 1 searches
    fallen: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bytes = input::split_ints::<i64>(input, ",")
            .map_err(ParseError::invalid)?
            .into_iter()
            .map(|coords| match coords[..] {
                [x, y] => Ok(Point::new(x, y)),
                _ => Err(ParseError::InvalidFormat(format!(
                    "expected x,y but found {} value(s)",
                    coords.len()
                ))),
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData {
            bytes,
            size: MEMORY_SIZE,
            fallen: FALLEN_BYTES,
        })
    }
}

impl SharedData {
    fn memory(&self, fallen: usize) -> Grid<bool> {
        let mut grid = Grid::filled(self.size, self.size, false);
        for &p in self.bytes.iter().take(fallen) {
            grid.set(p, true);
        }
        grid
    }

    fn exit(&self) -> Point {
        let max = self.size as i64 - 1;
        Point::new(max, max)
    }
}

/// Cells of one shortest path from the top-left corner to `exit`, both ends included.
fn shortest_path(corrupted: &Grid<bool>, exit: Point) -> Option<Set<Point>> {
    let start = Point::new(0, 0);
    if corrupted.get(start) != Some(&false) {
        return None;
    }
    let mut parent: HashMap<Point, Point> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut seen = Set::new();
    seen.add(start);

    while let Some(current) = queue.pop_front() {
        if current == exit {
            let mut path: Set<Point> = [current].into_iter().collect();
            let mut at = current;
            while let Some(&prev) = parent.get(&at) {
                path.add(prev);
                at = prev;
            }
            return Some(path);
        }
        for n in corrupted.neighbors(current) {
            if !corrupted[n] && seen.add(n) {
                parent.insert(n, current);
                queue.push_back(n);
            }
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = shortest_path(&shared.memory(shared.fallen), shared.exit())
            .ok_or_else(|| SolveError::failed("exit unreachable"))?;
        Ok((path.len() - 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let exit = shared.exit();
        let mut grid = shared.memory(shared.fallen);
        let mut path = shortest_path(&grid, exit)
            .ok_or_else(|| SolveError::failed("exit unreachable before any extra byte"))?;

        // Only a byte landing on the current path can cut the exit off.
        for &byte in &shared.bytes[shared.fallen.min(shared.bytes.len())..] {
            grid.set(byte, true);
            if !path.contains(&byte) {
                continue;
            }
            match shortest_path(&grid, exit) {
                Some(next) => path = next,
                None => return Ok(byte.to_string()),
            }
        }
        Err(SolveError::failed("exit stays reachable after every byte"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    fn example() -> SharedData {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        shared.size = 7;
        shared.fallen = 12;
        shared
    }

    #[test]
    fn test_example_part_1() {
        let mut shared = example();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "22");
    }

    #[test]
    fn test_example_part_2() {
        let mut shared = example();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6,1");
    }

    #[test]
    fn test_never_blocked() {
        let mut shared = Solver::parse("1,1\n").unwrap();
        shared.size = 3;
        shared.fallen = 0;
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn test_malformed_coordinate() {
        assert!(Solver::parse("1,2,3\n").is_err());
    }
}
