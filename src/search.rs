//! A* over immutable states, plus a breadth-first reference search.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};
use pathfinding::directed::bfs::bfs;

use crate::board::State;
use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::frontier::{Frontier, Visited};
use crate::heuristic::estimate;
use crate::key::StateKey;
use crate::moves::successors;

/// Counters collected over one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (a state may be expanded more than once).
    pub expanded: usize,
    /// Successor states produced by the move generator.
    pub generated: usize,
    /// Distinct state keys in the visited set when the search ended.
    pub visited: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Initial state through goal state; empty when there is no solution.
    pub path: Vec<State>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of slides, 0 both when already solved and when unsolvable.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

struct Node {
    state: State,
    g: usize,
    parent: Option<usize>,
}

fn reverse_path(nodes: &[Node], mut ix: usize) -> Vec<State> {
    let mut path = vec![nodes[ix].state.clone()];
    while let Some(parent) = nodes[ix].parent {
        path.push(nodes[parent].state.clone());
        ix = parent;
    }

    path.reverse();
    path
}

#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, size: usize, initial: &State) -> Result<Vec<State>, SolveError> {
        self.run(size, initial, None).map(|s| s.path)
    }

    pub fn solve_with_stats(&self, size: usize, initial: &State) -> Result<Solution, SolveError> {
        self.run(size, initial, None)
    }

    /// As [`Solver::solve_with_stats`], stopping early once `cancel` is set.
    /// The flag is polled once per loop iteration.
    pub fn solve_cancellable(
        &self,
        size: usize,
        initial: &State,
        cancel: &AtomicBool,
    ) -> Result<Solution, SolveError> {
        self.run(size, initial, Some(cancel))
    }

    fn run(&self, size: usize, initial: &State, cancel: Option<&AtomicBool>) -> Result<Solution, SolveError> {
        initial.validate(size)?;
        debug!(
            "solving {} vehicles on a {}x{} grid, budget {:?}",
            initial.vehicles().len(),
            size,
            size,
            self.config.max_expansions
        );

        let mut nodes = vec![Node {
            state: initial.clone(),
            g: 0,
            parent: None,
        }];
        let mut frontier = Frontier::new();
        frontier.push(estimate(initial, size), 0);
        let mut visited = Visited::new();
        let mut stats = SearchStats::default();

        loop {
            if cancel.map_or(false, |c| c.load(Ordering::Relaxed)) {
                debug!("cancelled after {} expansions", stats.expanded);
                return Err(SolveError::Cancelled {
                    expanded: stats.expanded,
                });
            }

            let (f, ix) = match frontier.pop() {
                Some(entry) => entry,
                None => {
                    stats.visited = visited.len();
                    debug!("no solution; {:?}", stats);
                    return Ok(Solution {
                        path: Vec::new(),
                        stats,
                    });
                }
            };

            if nodes[ix].state.is_goal(size) {
                stats.visited = visited.len();
                let path = reverse_path(&nodes, ix);
                debug!("solved in {} moves; {:?}", path.len() - 1, stats);
                return Ok(Solution { path, stats });
            }

            if let Some(max) = self.config.max_expansions {
                if stats.expanded >= max {
                    debug!("expansion budget of {} exhausted", max);
                    return Err(SolveError::BudgetExhausted {
                        expanded: stats.expanded,
                    });
                }
            }

            let key = StateKey::of(&nodes[ix].state);
            let g = nodes[ix].g + 1;
            trace!("expanding {} (f={}, g={})", key, f, g - 1);
            visited.insert(key);
            stats.expanded += 1;

            let next_states = successors(&nodes[ix].state, size);
            stats.generated += next_states.len();
            for next in next_states {
                if visited.contains(&StateKey::of(&next)) {
                    continue;
                }

                let f = g + estimate(&next, size);
                nodes.push(Node {
                    state: next,
                    g,
                    parent: Some(ix),
                });
                frontier.push(f, nodes.len() - 1);
            }
        }
    }
}

/// A* with the default configuration.
pub fn solve(size: usize, initial: &State) -> Result<Vec<State>, SolveError> {
    Solver::default().solve(size, initial)
}

/// Breadth-first search over the same moves; always returns a shortest path
/// (or an empty one when unsolvable). Much slower than [`solve`] on large boards.
pub fn solve_shortest(size: usize, initial: &State) -> Result<Vec<State>, SolveError> {
    initial.validate(size)?;
    Ok(bfs(initial, |s| successors(s, size), |s| s.is_goal(size)).unwrap_or_default())
}
