//! Exhaustive backtracking search.
//!
//! Recursive depth-first enumeration of every Hamiltonian circuit that
//! starts and ends at node 0, keeping the cheapest complete circuit found.
//!
//! # Complexity
//!
//! Exponential: bounded by the permutations of the `n − 1` non-start
//! nodes. Recursion depth is at most `n`, one frame per node.

use log::debug;

use crate::graph::DiGraph;
use crate::models::Tour;

/// Finds a minimum-cost Hamiltonian circuit by exhaustive backtracking.
///
/// Returns `None` when no circuit through every node closes back to
/// node 0. Guaranteed optimal over all circuits reachable through real
/// edges; when several circuits share the optimal cost, the first one
/// reached in ascending candidate order is kept.
///
/// # Examples
///
/// ```
/// use tsp_circuit::graph::DiGraph;
/// use tsp_circuit::search::backtracking;
///
/// let mut g = DiGraph::new(3).unwrap();
/// g.add_edge(0, 1, 1.0);
/// g.add_edge(1, 2, 1.0);
/// g.add_edge(2, 0, 1.0);
/// g.add_edge(0, 2, 10.0);
/// g.add_edge(2, 1, 10.0);
/// g.add_edge(1, 0, 10.0);
///
/// let tour = backtracking(&g).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2, 0]);
/// ```
pub fn backtracking(graph: &DiGraph) -> Option<Tour> {
    let (tour, states) = run(graph);
    debug!("backtracking explored {states} states");
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

    let mut search = Backtracker {
        graph,
        visited: vec![false; n],
        path: Vec::with_capacity(n),
        best: None,
    };
    search.visited[0] = true;
    search.path.push(0);
    let mut states = 0;
    search.explore(0, &mut states);

    let tour = search.best.map(|(mut order, _)| {
        order.push(0); // close the circuit
        Tour::new(order)
    });
    (tour, states)
}

/// Mutable search state for one backtracking invocation.
///
/// `best` holds the cheapest complete circuit seen so far, without the
/// closing return element, together with its full circuit cost.
struct Backtracker<'a> {
    graph: &'a DiGraph,
    visited: Vec<bool>,
    path: Vec<usize>,
    best: Option<(Vec<usize>, f64)>,
}

impl Backtracker<'_> {
    fn explore(&mut self, current: usize, states: &mut u64) {
        *states += 1;
        let n = self.graph.node_count();

        if self.path.len() == n {
            if let Some(back) = self.graph.edge(current, 0) {
                let cost = self.graph.tour_cost(&self.path) + back;
                let improved = match &self.best {
                    None => true, // first complete circuit is always kept
                    Some((_, best_cost)) => cost < *best_cost,
                };
                if improved {
                    self.best = Some((self.path.clone(), cost));
                }
            }
            return;
        }

        for next in 0..n {
            if self.visited[next] || self.graph.edge(current, next).is_none() {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            self.explore(next, states);
            // Undo before trying the next sibling; the visited set and
            // path are shared across the whole call tree.
            self.visited[next] = false;
            self.path.pop();
        }
    }
}
