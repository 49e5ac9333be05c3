use std::collections::HashMap;

use aoc_shared::{Direction, Entry, EntryHandle, Grid, Point, PriorityQueue, Set, Stack, input};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Reindeer Maze: cheapest path where turning costs far more than walking
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 16, tags = ["grid", "dijkstra"])]
pub struct Solver;

const STEP_COST: i64 = 1;
const TURN_COST: i64 = 1000;

type State = (Point, Direction);

/// Result of the shortest-path search, shared between both parts
#[derive(Debug, Clone, Copy)]
pub struct Route {
    cost: i64,
    tiles_on_best_paths: usize,
}

#[derive(Debug)]
pub struct SharedData {
    grid: Grid<char>,
    start: Point,
    end: Point,
    route: Option<Route>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (grid, start, end) =
            input::char_grid_with_markers(input, 'S', 'E', '.').map_err(ParseError::invalid)?;
        Ok(SharedData {
            grid,
            start,
            end,
            route: None,
        })
    }
}

impl SharedData {
    fn moves(&self, (p, d): State) -> impl Iterator<Item = (State, i64)> + '_ {
        let ahead = p.step(d);
        let forward = (self.grid.get(ahead) == Some(&'.')).then_some(((ahead, d), STEP_COST));
        forward.into_iter().chain([
            ((p, d.turn_left()), TURN_COST),
            ((p, d.turn_right()), TURN_COST),
        ])
    }

    fn route(&mut self) -> Result<Route, SolveError> {
        if let Some(route) = self.route {
            return Ok(route);
        }

        let origin = (self.start, Direction::Right);
        let mut best: HashMap<State, i64> = HashMap::from([(origin, 0)]);
        let mut came_from: HashMap<State, Vec<State>> = HashMap::new();
        let mut handles: HashMap<State, EntryHandle> = HashMap::new();
        let mut queue = PriorityQueue::new();
        handles.insert(origin, queue.push(origin, 0));

        while let Some(Entry {
            value: state,
            priority: cost,
        }) = queue.pop()
        {
            for (next, step) in self.moves(state) {
                let candidate = cost + step;
                match best.get(&next) {
                    Some(&known) if candidate > known => continue,
                    Some(&known) if candidate == known => {
                        came_from.entry(next).or_default().push(state);
                        continue;
                    }
                    _ => {}
                }
                best.insert(next, candidate);
                came_from.insert(next, vec![state]);
                match handles.get(&next) {
                    Some(&h) if queue.contains(h) => {
                        queue.update(h, next, candidate);
                    }
                    _ => {
                        handles.insert(next, queue.push(next, candidate));
                    }
                }
            }
        }

        let cost = Direction::ALL
            .iter()
            .filter_map(|&d| best.get(&(self.end, d)).copied())
            .min()
            .ok_or_else(|| SolveError::failed("end tile is unreachable"))?;

        // Walk every predecessor chain back from the cheapest end states.
        let mut stack: Stack<State> = Direction::ALL
            .iter()
            .map(|&d| (self.end, d))
            .filter(|s| best.get(s) == Some(&cost))
            .collect();
        let mut visited = Set::new();
        while let Some(state) = stack.pop() {
            if !visited.add(state) {
                continue;
            }
            if let Some(prev) = came_from.get(&state) {
                stack.extend(prev.iter().copied());
            }
        }
        let tiles: Set<Point> = visited.iter().map(|&(p, _)| p).collect();

        tracing::debug!(cost, states = best.len(), "maze search finished");
        let route = Route {
            cost,
            tiles_on_best_paths: tiles.len(),
        };
        self.route = Some(route);
        Ok(route)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.route()?.cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.route()?.tiles_on_best_paths.to_string())
    }
}
