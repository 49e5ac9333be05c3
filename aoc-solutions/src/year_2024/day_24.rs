use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_shared::{Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Crossed Wires: a gate network that should be a ripple-carry adder
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 24, tags = ["circuits"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a && b,
            Op::Or => a || b,
            Op::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Gate<'a> {
    lhs: &'a str,
    op: Op,
    rhs: &'a str,
    out: &'a str,
}

impl Gate<'_> {
    fn has_input(&self, wire: &str) -> bool {
        self.lhs == wire || self.rhs == wire
    }

    fn reads_inputs(&self) -> bool {
        is_input(self.lhs) && is_input(self.rhs)
    }

    fn reads_first_bit(&self) -> bool {
        self.has_input("x00") || self.has_input("y00")
    }
}

fn is_input(wire: &str) -> bool {
    wire.starts_with('x') || wire.starts_with('y')
}

#[derive(Debug)]
pub struct SharedData<'a> {
    initial: Vec<(&'a str, bool)>,
    gates: Vec<Gate<'a>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_circuit(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_circuit(input: &str) -> anyhow::Result<SharedData<'_>> {
    let blocks = input::paragraphs(input);
    let [wires, gates] = &blocks[..] else {
        return Err(anyhow!("expected initial wires and gates separated by a blank line"));
    };

    let initial = wires.iter().map(|line| parse_wire(line)).collect::<anyhow::Result<_>>()?;
    let gates = gates.iter().map(|line| parse_gate(line)).collect::<anyhow::Result<_>>()?;
    Ok(SharedData { initial, gates })
}

fn parse_wire(line: &str) -> anyhow::Result<(&str, bool)> {
    let (name, value) = line
        .split_once(':')
        .with_context(|| format!("wire line {line:?}"))?;
    match value.trim() {
        "0" => Ok((name.trim(), false)),
        "1" => Ok((name.trim(), true)),
        other => Err(anyhow!("wire {name} has non-binary value {other:?}")),
    }
}

fn parse_gate(line: &str) -> anyhow::Result<Gate<'_>> {
    let parts: Option<(&str, &str, &str, &str, &str)> = line.split_whitespace().collect_tuple();
    let Some((lhs, op, rhs, "->", out)) = parts else {
        return Err(anyhow!("malformed gate {line:?}"));
    };
    let op = match op {
        "AND" => Op::And,
        "OR" => Op::Or,
        "XOR" => Op::Xor,
        other => return Err(anyhow!("unknown gate {other:?}")),
    };
    Ok(Gate { lhs, op, rhs, out })
}

impl<'a> SharedData<'a> {
    /// Settles every wire, repeatedly firing gates whose inputs are known.
    fn evaluate(&self) -> Result<HashMap<&'a str, bool>, SolveError> {
        let mut values: HashMap<&str, bool> = self.initial.iter().copied().collect();
        let mut pending: Vec<&Gate<'a>> = self.gates.iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|g| match (values.get(g.lhs), values.get(g.rhs)) {
                (Some(&a), Some(&b)) => {
                    values.insert(g.out, g.op.apply(a, b));
                    false
                }
                _ => true,
            });
            if pending.len() == before {
                return Err(SolveError::failed(format!(
                    "{} gate(s) never receive both inputs",
                    pending.len()
                )));
            }
        }
        Ok(values)
    }

    /// Outputs that break the ripple-carry adder shape.
    fn miswired_outputs(&self) -> Vec<&'a str> {
        let last_z = self
            .gates
            .iter()
            .map(|g| g.out)
            .filter(|w| w.starts_with('z'))
            .max()
            .unwrap_or("z00");
        let feeds = |wire: &str, op: Op| self.gates.iter().any(|g| g.op == op && g.has_input(wire));

        let mut wrong = Set::new();
        for g in &self.gates {
            let to_z = g.out.starts_with('z');
            let broken = match g.op {
                // Every sum bit except the final carry comes out of a XOR.
                _ if to_z && g.out != last_z && g.op != Op::Xor => true,
                // Second-stage XORs combine partial sums with carries and must land on z.
                Op::Xor if !g.reads_inputs() && !to_z => true,
                // First-stage XORs feed a second-stage XOR.
                Op::Xor if g.reads_inputs() && !g.reads_first_bit() && !feeds(g.out, Op::Xor) => {
                    true
                }
                // Carries are built from ANDs joined by an OR.
                Op::And if !g.reads_first_bit() && !feeds(g.out, Op::Or) => true,
                _ => false,
            };
            if broken {
                wrong.add(g.out);
            }
        }
        wrong.into_iter().sorted().collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let values = shared.evaluate()?;
        let z = values
            .iter()
            .filter(|(wire, _)| wire.starts_with('z'))
            .sorted_by(|a, b| b.0.cmp(a.0))
            .fold(0u64, |acc, (_, &bit)| (acc << 1) | u64::from(bit));
        Ok(z.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.miswired_outputs().join(","))
    }
}
