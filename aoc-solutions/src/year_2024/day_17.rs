use anyhow::{Context, anyhow};
use aoc_shared::input;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Chronospatial Computer: a tiny 3-bit virtual machine
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 17, tags = ["vm", "reverse-engineering"])]
pub struct Solver;

/// Instructions executed before a run is considered stuck in a loop
const STEP_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    a: u64,
    b: u64,
    c: u64,
}

#[derive(Debug)]
pub struct SharedData {
    registers: Registers,
    program: Vec<u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_machine(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_machine(input: &str) -> anyhow::Result<SharedData> {
    let blocks = input::paragraphs(input);
    let [registers, program] = &blocks[..] else {
        return Err(anyhow!("expected registers and program blocks"));
    };

    let register = |name: char| -> anyhow::Result<u64> {
        let prefix = format!("Register {name}:");
        let line = registers
            .iter()
            .find_map(|l| l.strip_prefix(prefix.as_str()))
            .ok_or_else(|| anyhow!("missing register {name}"))?;
        line.trim()
            .parse()
            .with_context(|| format!("register {name} value {line:?}"))
    };
    let registers = Registers {
        a: register('A')?,
        b: register('B')?,
        c: register('C')?,
    };

    let program = program
        .first()
        .and_then(|l| l.strip_prefix("Program:"))
        .ok_or_else(|| anyhow!("missing program line"))?
        .trim()
        .split(',')
        .map(|t| match t.parse::<u8>() {
            Ok(v) if v < 8 => Ok(v),
            _ => Err(anyhow!("invalid 3-bit value {t:?}")),
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(SharedData { registers, program })
}

impl Registers {
    fn combo(&self, operand: u8) -> Result<u64, SolveError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(SolveError::failed(format!("invalid combo operand {operand}"))),
        }
    }

    /// `A / 2^operand`, saturating to zero for shifts past the register width.
    fn divide(&self, operand: u8) -> Result<u64, SolveError> {
        let shift = u32::try_from(self.combo(operand)?).unwrap_or(u32::MAX);
        Ok(self.a.checked_shr(shift).unwrap_or(0))
    }
}

/// Runs `program` to completion and returns its output values.
fn run(mut regs: Registers, program: &[u8]) -> Result<Vec<u8>, SolveError> {
    let mut ip = 0;
    let mut output = Vec::new();

    for _ in 0..STEP_LIMIT {
        let (Some(&opcode), Some(&operand)) = (program.get(ip), program.get(ip + 1)) else {
            return Ok(output);
        };
        ip += 2;
        match opcode {
            0 => regs.a = regs.divide(operand)?,
            1 => regs.b ^= u64::from(operand),
            2 => regs.b = regs.combo(operand)? % 8,
            3 => {
                if regs.a != 0 {
                    ip = usize::from(operand);
                }
            }
            4 => regs.b ^= regs.c,
            5 => output.push((regs.combo(operand)? % 8) as u8),
            6 => regs.b = regs.divide(operand)?,
            7 => regs.c = regs.divide(operand)?,
            _ => return Err(SolveError::failed(format!("invalid opcode {opcode}"))),
        }
    }
    Err(SolveError::failed(format!(
        "program did not halt within {STEP_LIMIT} steps"
    )))
}

/// Smallest `A` whose output reproduces the program, built one octal digit at a time.
///
/// Assumes the program consumes three bits of `A` per output value, so the
/// last output depends only on the highest digit.
fn find_quine(regs: Registers, program: &[u8]) -> Result<Option<u64>, SolveError> {
    fn search(
        regs: Registers,
        program: &[u8],
        prefix: u64,
        idx: usize,
    ) -> Result<Option<u64>, SolveError> {
        for digit in 0..8 {
            let Some(a) = prefix.checked_mul(8).map(|p| p | digit) else {
                return Ok(None);
            };
            if run(Registers { a, ..regs }, program)? != program[idx..] {
                continue;
            }
            if idx == 0 {
                return Ok(Some(a));
            }
            if let Some(found) = search(regs, program, a, idx - 1)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    match program.len() {
        0 => Ok(None),
        len => search(regs, program, 0, len - 1),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared.registers, &shared.program)?.iter().join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_quine(shared.registers, &shared.program)?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::failed("no register A value reproduces the program"))
    }
}
