//! Branch-and-bound search.
//!
//! The same depth-first enumeration as [`backtracking`](super::backtracking),
//! with one addition: a partial path is abandoned as soon as its
//! accumulated cost can no longer beat the best complete circuit found so
//! far. The bound compares the partial cost, which excludes the pending
//! return edge, against the full best-circuit cost, which includes it;
//! with non-negative weights extending a path never lowers its cost, so
//! no optimal circuit is ever discarded.
//!
//! # Complexity
//!
//! Exponential worst case, identical to exhaustive backtracking; in
//! practice the bound skips a subset of the states backtracking would
//! visit. Candidates are tried in ascending index order with no
//! cheapest-edge-first reordering, which limits how much the bound saves.

use log::debug;

use crate::graph::DiGraph;
use crate::models::Tour;

/// Finds a minimum-cost Hamiltonian circuit by bounded depth-first search.
///
/// Returns `None` when no circuit through every node closes back to
/// node 0. Cost-equal with [`backtracking`](super::backtracking) on every
/// graph, though not necessarily path-identical when several circuits
/// share the optimal cost: the bound is non-strict (`<=`), so a partial
/// path that exactly ties the best cost is still explored.
///
/// # Examples
///
/// ```
/// use tsp_circuit::graph::DiGraph;
/// use tsp_circuit::search::{backtracking, branch_and_bound};
///
/// let mut g = DiGraph::new(3).unwrap();
/// g.add_edge(0, 1, 1.0);
/// g.add_edge(1, 2, 1.0);
/// g.add_edge(2, 0, 1.0);
/// g.add_edge(0, 2, 10.0);
/// g.add_edge(2, 1, 10.0);
/// g.add_edge(1, 0, 10.0);
///
/// let bounded = branch_and_bound(&g).unwrap();
/// let exhaustive = backtracking(&g).unwrap();
/// assert_eq!(g.tour_cost(bounded.order()), g.tour_cost(exhaustive.order()));
/// ```
pub fn branch_and_bound(graph: &DiGraph) -> Option<Tour> {
    let (tour, states) = run(graph);
    debug!("branch-and-bound explored {states} states");
    tour
}

/// Number of recursive states the search visits on this graph.
#[cfg(test)]
pub(crate) fn explored_states(graph: &DiGraph) -> u64 {
    run(graph).1
}

fn run(graph: &DiGraph) -> (Option<Tour>, u64) {
    let n = graph.node_count();
    if n == 1 {
        return (Some(Tour::trivial()), 0);
    }

    let mut search = Bounder {
        graph,
        visited: vec![false; n],
        path: Vec::with_capacity(n),
        best: None,
    };
    search.visited[0] = true;
    search.path.push(0);
    let mut states = 0;
    search.explore(0, 0.0, &mut states);

    let tour = search.best.map(|(mut order, _)| {
        order.push(0); // close the circuit
        Tour::new(order)
    });
    (tour, states)
}

/// Mutable search state for one branch-and-bound invocation.
///
/// Mirrors the backtracking search state; `best` stores the cheapest
/// complete circuit so far (without the closing element) and its full
/// circuit cost, which doubles as the pruning bound.
struct Bounder<'a> {
    graph: &'a DiGraph,
    visited: Vec<bool>,
    path: Vec<usize>,
    best: Option<(Vec<usize>, f64)>,
}

impl Bounder<'_> {
    /// `partial_cost` is the cost of `path` so far, maintained
    /// incrementally instead of re-summed per call.
    fn explore(&mut self, current: usize, partial_cost: f64, states: &mut u64) {
        *states += 1;
        let n = self.graph.node_count();

        if self.path.len() == n {
            if let Some(back) = self.graph.edge(current, 0) {
                let cost = partial_cost + back;
                let improved = match &self.best {
                    None => true,
                    Some((_, best_cost)) => cost < *best_cost,
                };
                if improved {
                    self.best = Some((self.path.clone(), cost));
                }
            }
            return;
        }

        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            let Some(weight) = self.graph.edge(current, next) else {
                continue;
            };
            // Non-strict: a tie can still improve into an equal-cost
            // circuit through the return edge.
            let bound = self.best.as_ref().map_or(f64::INFINITY, |(_, c)| *c);
            if partial_cost <= bound {
                self.visited[next] = true;
                self.path.push(next);
                self.explore(next, partial_cost + weight, states);
                self.visited[next] = false;
                self.path.pop();
            }
        }
    }
}
