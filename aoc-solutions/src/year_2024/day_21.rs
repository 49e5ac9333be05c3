use std::collections::HashMap;

use aoc_shared::{Point, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Keypad Conundrum: robots typing on keypads for robots typing on keypads
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 21, tags = ["memoization"])]
pub struct Solver;

/// Directional keypads operated by robots between the human and the door
const PART_1_ROBOTS: usize = 2;
const PART_2_ROBOTS: usize = 25;
const ACTIVATE: char = 'A';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Keypad {
    Numeric,
    Directional,
}

impl Keypad {
    fn position(self, key: char) -> Option<Point> {
        let (x, y) = match (self, key) {
            (Keypad::Numeric, '7') => (0, 0),
            (Keypad::Numeric, '8') => (1, 0),
            (Keypad::Numeric, '9') => (2, 0),
            (Keypad::Numeric, '4') => (0, 1),
            (Keypad::Numeric, '5') => (1, 1),
            (Keypad::Numeric, '6') => (2, 1),
            (Keypad::Numeric, '1') => (0, 2),
            (Keypad::Numeric, '2') => (1, 2),
            (Keypad::Numeric, '3') => (2, 2),
            (Keypad::Numeric, '0') => (1, 3),
            (Keypad::Numeric, 'A') => (2, 3),
            (Keypad::Directional, '^') => (1, 0),
            (Keypad::Directional, 'A') => (2, 0),
            (Keypad::Directional, '<') => (0, 1),
            (Keypad::Directional, 'v') => (1, 1),
            (Keypad::Directional, '>') => (2, 1),
            _ => return None,
        };
        Some(Point::new(x, y))
    }

    /// The empty corner no arm may pass over.
    fn gap(self) -> Point {
        match self {
            Keypad::Numeric => Point::new(0, 3),
            Keypad::Directional => Point::new(0, 0),
        }
    }

    /// Cheapest presses on the next keypad up to move from `from` to `to` and press it.
    ///
    /// Moves are grouped so each axis is walked in one run. Left moves go first
    /// unless that would cross the gap.
    fn presses(self, from: char, to: char) -> Result<String, SolveError> {
        let key = |k| {
            self.position(k)
                .ok_or_else(|| SolveError::failed(format!("key {k:?} not on {self:?} keypad")))
        };
        let (a, b) = (key(from)?, key(to)?);
        let (dx, dy) = (b.x - a.x, b.y - a.y);

        let horizontal = (if dx > 0 { ">" } else { "<" }).repeat(dx.unsigned_abs() as usize);
        let vertical = (if dy > 0 { "v" } else { "^" }).repeat(dy.unsigned_abs() as usize);

        let horizontal_turn = Point::new(b.x, a.y);
        let vertical_turn = Point::new(a.x, b.y);
        let vertical_first = if horizontal_turn == self.gap() {
            true
        } else if vertical_turn == self.gap() {
            false
        } else {
            dx > 0
        };

        let mut seq = if vertical_first {
            vertical + &horizontal
        } else {
            horizontal + &vertical
        };
        seq.push(ACTIVATE);
        Ok(seq)
    }
}

#[derive(Debug)]
pub struct SharedData<'a> {
    codes: Vec<&'a str>,
    /// Press counts keyed by sequence, keypad, and remaining keypad layers
    memo: HashMap<(String, Keypad, usize), u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let codes = input::lines(input);
        if let Some(bad) = codes
            .iter()
            .find(|c| c.chars().any(|k| Keypad::Numeric.position(k).is_none()))
        {
            return Err(ParseError::InvalidFormat(format!(
                "code {bad:?} has keys not on the numeric keypad"
            )));
        }
        Ok(SharedData {
            codes,
            memo: HashMap::new(),
        })
    }
}

impl SharedData<'_> {
    /// Presses needed at the outermost keypad to type `seq` on `pad`, through `layers` keypads.
    fn press_count(&mut self, seq: &str, pad: Keypad, layers: usize) -> Result<u64, SolveError> {
        if layers == 0 {
            return Ok(seq.len() as u64);
        }
        let key = (seq.to_string(), pad, layers);
        if let Some(&known) = self.memo.get(&key) {
            return Ok(known);
        }

        let mut total = 0;
        let mut arm = ACTIVATE;
        for target in seq.chars() {
            let moves = pad.presses(arm, target)?;
            total += self.press_count(&moves, Keypad::Directional, layers - 1)?;
            arm = target;
        }
        self.memo.insert(key, total);
        Ok(total)
    }

    fn complexity_sum(&mut self, robots: usize) -> Result<u64, SolveError> {
        let mut sum = 0;
        for code in self.codes.clone() {
            let numeric: u64 = code
                .trim_end_matches(ACTIVATE)
                .parse()
                .map_err(|e| SolveError::failed(format!("code {code:?}: {e}")))?;
            // The door keypad, each robot's keypad, then the human's.
            sum += self.press_count(code, Keypad::Numeric, robots + 1)? * numeric;
        }
        Ok(sum)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.complexity_sum(PART_1_ROBOTS)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.complexity_sum(PART_2_ROBOTS)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "029A
980A
179A
456A
379A
";

    #[test]
    fn test_example_part_1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "126384");
    }

    #[test]
    fn test_single_code_length() {
        let mut shared = Solver::parse("029A\n").unwrap();
        assert_eq!(shared.press_count("029A", Keypad::Numeric, 3).unwrap(), 68);
        assert_eq!(shared.press_count("029A", Keypad::Numeric, 1).unwrap(), 12);
    }

    #[test]
    fn test_gap_avoided() {
        // From 0 to 1 on the numeric pad the arm must go up before left.
        assert_eq!(Keypad::Numeric.presses('0', '1').unwrap(), "^<A");
        // From < to ^ on the directional pad it must go right before up.
        assert_eq!(Keypad::Directional.presses('<', '^').unwrap(), ">^A");
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(Solver::parse("12X\n").is_err());
    }
}
