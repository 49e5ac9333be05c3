use std::cmp::Ordering;

use anyhow::anyhow;
use aoc_shared::{Point, Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

/// Restroom Redoubt: robots wrapping around a toroidal room
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 14, tags = ["simulation"])]
pub struct Solver;

const ROOM_WIDTH: i64 = 101;
const ROOM_HEIGHT: i64 = 103;
const SAFETY_SECONDS: i64 = 100;
/// Horizontal run of robots that marks the Christmas tree frame
const TREE_RUN: usize = 31;

#[derive(Debug, Clone, Copy)]
pub struct Robot {
    position: Point,
    velocity: Point,
}

#[derive(Debug)]
pub struct SharedData {
    robots: Vec<Robot>,
    width: i64,
    height: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = robot_pattern().map_err(ParseError::invalid)?;
        let robots = input::lines(input)
            .into_iter()
            .map(|line| parse_robot(&re, line))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData {
            robots,
            width: ROOM_WIDTH,
            height: ROOM_HEIGHT,
        })
    }
}

fn robot_pattern() -> Result<Regex, regex::Error> {
    Regex::new(r"p=(-?\d+),(-?\d+)\s+v=(-?\d+),(-?\d+)")
}

fn parse_robot(re: &Regex, line: &str) -> anyhow::Result<Robot> {
    let caps = re
        .captures(line)
        .ok_or_else(|| anyhow!("malformed robot {line:?}"))?;
    Ok(Robot {
        position: Point::new(caps[1].parse()?, caps[2].parse()?),
        velocity: Point::new(caps[3].parse()?, caps[4].parse()?),
    })
}

impl SharedData {
    fn position_at(&self, robot: &Robot, t: i64) -> Point {
        Point::new(
            (robot.position.x + robot.velocity.x * t).rem_euclid(self.width),
            (robot.position.y + robot.velocity.y * t).rem_euclid(self.height),
        )
    }

    fn safety_factor(&self, t: i64) -> usize {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        let mut quadrants = [0usize; 4];
        for robot in &self.robots {
            let p = self.position_at(robot, t);
            let q = match (p.x.cmp(&mid_x), p.y.cmp(&mid_y)) {
                (Ordering::Less, Ordering::Less) => 0,
                (Ordering::Greater, Ordering::Less) => 1,
                (Ordering::Less, Ordering::Greater) => 2,
                (Ordering::Greater, Ordering::Greater) => 3,
                _ => continue,
            };
            quadrants[q] += 1;
        }
        quadrants.iter().product()
    }

    /// Longest run of horizontally adjacent occupied cells at time `t`.
    fn longest_run(&self, t: i64) -> usize {
        let occupied: Set<Point> = self.robots.iter().map(|r| self.position_at(r, t)).collect();
        let mut best = 0;
        for &p in &occupied {
            // Only count from the left end of each run.
            if occupied.contains(&p.left()) {
                continue;
            }
            let mut len = 1;
            let mut q = p.right();
            while occupied.contains(&q) {
                len += 1;
                q = q.right();
            }
            best = best.max(len);
        }
        best
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.safety_factor(SAFETY_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Positions repeat after width * height seconds.
        (0..shared.width * shared.height)
            .find(|&t| shared.longest_run(t) >= TREE_RUN)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("no second shows the tree"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn test_example_safety_factor() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        shared.width = 11;
        shared.height = 7;
        assert_eq!(shared.safety_factor(SAFETY_SECONDS), 12);
    }

    #[test]
    fn test_wraparound() {
        let shared = SharedData {
            robots: vec![],
            width: 11,
            height: 7,
        };
        let robot = parse_robot(&robot_pattern().unwrap(), "p=2,4 v=2,-3").unwrap();
        assert_eq!(shared.position_at(&robot, 5), Point::new(1, 3));
    }

    #[test]
    fn test_tree_frame_found() {
        // Even robots sit still on row 0; odd robots step up from row 1 into the gaps.
        let input: String = (0..62)
            .map(|i| {
                if i % 2 == 0 {
                    format!("p={i},0 v=0,0\n")
                } else {
                    format!("p={i},1 v=0,-1\n")
                }
            })
            .collect();
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_no_tree() {
        let mut shared = Solver::parse("p=0,0 v=1,1\n").unwrap();
        shared.width = 3;
        shared.height = 3;
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }
}
