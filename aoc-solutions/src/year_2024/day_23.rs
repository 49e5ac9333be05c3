use std::collections::BTreeMap;

use aoc_shared::{Combinations, Set, combinations, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// LAN Party: triangles and the largest clique in a computer network
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 23, tags = ["graph", "cliques"])]
pub struct Solver;

/// Undirected adjacency, keyed in name order
#[derive(Debug)]
pub struct Network<'a> {
    links: BTreeMap<&'a str, Set<&'a str>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut links: BTreeMap<&str, Set<&str>> = BTreeMap::new();
        for line in input::lines(input) {
            let (a, b) = line
                .split_once('-')
                .ok_or_else(|| ParseError::InvalidFormat(format!("expected a-b, got {line:?}")))?;
            links.entry(a).or_default().add(b);
            links.entry(b).or_default().add(a);
        }
        Ok(Network { links })
    }
}

impl<'a> Network<'a> {
    fn connected(&self, a: &str, b: &str) -> bool {
        self.links.get(a).is_some_and(|n| n.contains(&b))
    }

    fn sorted_neighbors(&self, node: &str) -> Vec<&'a str> {
        self.links
            .get(node)
            .map(|n| n.iter().copied().sorted().collect())
            .unwrap_or_default()
    }

    fn is_clique(&self, nodes: &[&str]) -> bool {
        nodes
            .iter()
            .tuple_combinations()
            .all(|(a, b)| self.connected(a, b))
    }

    /// Three mutually connected computers, each triangle counted once.
    fn triangles(&self) -> Vec<[&'a str; 3]> {
        let mut found = Vec::new();
        for &a in self.links.keys() {
            let later: Vec<&str> = self
                .sorted_neighbors(a)
                .into_iter()
                .filter(|&n| n > a)
                .collect();
            for pair in combinations(&later, 2) {
                if self.connected(pair[0], pair[1]) {
                    found.push([a, pair[0], pair[1]]);
                }
            }
        }
        found
    }

    /// Largest set of mutually connected computers, in name order.
    fn largest_clique(&self) -> Vec<&'a str> {
        let mut best: Vec<&str> = Vec::new();
        for &node in self.links.keys() {
            let neighbors = self.sorted_neighbors(node);
            // A clique through `node` has at most neighbors + 1 members.
            for size in (best.len()..=neighbors.len()).rev() {
                let found = Combinations::new(&neighbors, size).find(|c| self.is_clique(c));
                if let Some(mut clique) = found {
                    if clique.len() + 1 > best.len() {
                        clique.push(node);
                        clique.sort_unstable();
                        best = clique;
                    }
                    break;
                }
            }
        }
        best
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .triangles()
            .iter()
            .filter(|t| t.iter().any(|name| name.starts_with('t')))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.largest_clique().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn test_example_triangles() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.triangles().len(), 12);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");
    }

    #[test]
    fn test_example_password() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "co,de,ka,ta");
    }

    #[test]
    fn test_malformed_link() {
        assert!(Solver::parse("ab_cd\n").is_err());
    }
}
