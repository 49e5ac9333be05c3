use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

/// Mull It Over: scan corrupted memory for `mul(x,y)` instructions
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 3, tags = ["regex", "easy"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"mul\((\d{1,3}),\s*(\d{1,3})\)|do\(\)|don't\(\)")
            .map_err(ParseError::invalid)?;

        re.captures_iter(input)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(x), Some(y)) => {
                    let x = x.as_str().parse().map_err(ParseError::invalid)?;
                    let y = y.as_str().parse().map_err(ParseError::invalid)?;
                    Ok(Instruction::Mul(x, y))
                }
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared
            .iter()
            .map(|ins| match ins {
                Instruction::Mul(x, y) => x * y,
                _ => 0,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (total, _) = shared
            .iter()
            .fold((0i64, true), |(total, enabled), ins| match ins {
                Instruction::Do => (total, true),
                Instruction::Dont => (total, false),
                Instruction::Mul(x, y) if enabled => (total + x * y, enabled),
                Instruction::Mul(..) => (total, enabled),
            });
        Ok(total.to_string())
    }
}
