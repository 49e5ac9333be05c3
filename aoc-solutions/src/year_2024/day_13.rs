use anyhow::anyhow;
use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

/// Claw Contraption: button presses needed to reach each prize
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 13, tags = ["math"])]
pub struct Solver;

/// Prize coordinates in part 2 are shifted by this amount on both axes
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let coords = Regex::new(r"X[+=](-?\d+),\s*Y[+=](-?\d+)").map_err(ParseError::invalid)?;
        input::paragraphs(input)
            .iter()
            .map(|block| parse_machine(&coords, block))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_machine(re: &Regex, block: &[&str]) -> anyhow::Result<Machine> {
    let coords = block
        .iter()
        .map(|line| -> anyhow::Result<(i64, i64)> {
            let caps = re
                .captures(line)
                .ok_or_else(|| anyhow!("no coordinates in {line:?}"))?;
            Ok((caps[1].parse()?, caps[2].parse()?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match coords[..] {
        [a, b, prize] => Ok(Machine { a, b, prize }),
        _ => Err(anyhow!("expected 3 lines per machine, found {}", coords.len())),
    }
}

impl Machine {
    /// Token cost `3a + b` of the unique non-negative integer solution, if any.
    fn cost(&self, offset: i64) -> Option<i64> {
        let (ax, ay) = self.a;
        let (bx, by) = self.b;
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);

        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }
        let num_a = px * by - py * bx;
        let num_b = ax * py - ay * px;
        if num_a % det != 0 || num_b % det != 0 {
            return None;
        }
        let (a, b) = (num_a / det, num_b / det);
        (a >= 0 && b >= 0).then_some(3 * a + b)
    }
}

fn total_cost(machines: &[Machine], offset: i64) -> i64 {
    machines.iter().filter_map(|m| m.cost(offset)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cost(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cost(shared, PRIZE_OFFSET).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn test_part_1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "480");
    }

    #[test]
    fn test_part_2_only_second_and_fourth_win() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let winnable: Vec<bool> = shared
            .iter()
            .map(|m| m.cost(PRIZE_OFFSET).is_some())
            .collect();
        assert_eq!(winnable, vec![false, true, false, true]);
    }

    #[test]
    fn test_negative_presses_rejected() {
        let m = Machine {
            a: (1, 0),
            b: (0, 1),
            prize: (-2, 3),
        };
        assert_eq!(m.cost(0), None);
    }

    #[test]
    fn test_incomplete_machine() {
        assert!(Solver::parse("Button A: X+1, Y+2\nPrize: X=1, Y=2\n").is_err());
    }
}
