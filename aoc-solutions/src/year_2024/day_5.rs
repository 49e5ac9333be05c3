use std::cmp::Ordering;

use anyhow::{Context, anyhow};
use aoc_shared::{Set, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Print Queue: page-ordering rules and the updates they constrain
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 5, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `(a, b)` means page `a` must come before page `b`
    rules: Set<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manual(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_manual(input: &str) -> anyhow::Result<SharedData> {
    let blocks = input::paragraphs(input);
    let [rule_lines, update_lines] = &blocks[..] else {
        return Err(anyhow!(
            "expected rules and updates separated by a blank line, found {} block(s)",
            blocks.len()
        ));
    };

    let rules = rule_lines
        .iter()
        .map(|line| -> anyhow::Result<(u32, u32)> {
            let (a, b) = line
                .split_once('|')
                .with_context(|| format!("rule {line:?} has no '|'"))?;
            Ok((a.trim().parse()?, b.trim().parse()?))
        })
        .collect::<anyhow::Result<Set<_>>>()?;

    let updates = input::split_ints(&update_lines.join("\n"), ",")?;

    Ok(SharedData { rules, updates })
}

fn compare(rules: &Set<(u32, u32)>, a: u32, b: u32) -> Ordering {
    if rules.contains(&(a, b)) {
        Ordering::Less
    } else if rules.contains(&(b, a)) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn is_ordered(rules: &Set<(u32, u32)>, pages: &[u32]) -> bool {
    pages
        .windows(2)
        .all(|w| compare(rules, w[0], w[1]) != Ordering::Greater)
}

fn middle(pages: &[u32]) -> u64 {
    pages.get(pages.len() / 2).copied().map_or(0, u64::from)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .updates
            .iter()
            .filter(|u| is_ordered(&shared.rules, u))
            .map(|u| middle(u))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .updates
            .iter()
            .filter(|u| !is_ordered(&shared.rules, u))
            .map(|u| {
                let mut fixed = u.clone();
                fixed.sort_by(|&a, &b| compare(&shared.rules, a, b));
                middle(&fixed)
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "123");
    }

    #[test]
    fn test_missing_updates_section() {
        assert!(Solver::parse("1|2\n3|4\n").is_err());
    }
}
