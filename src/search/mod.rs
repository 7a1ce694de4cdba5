//! Search strategies over a [`DiGraph`](crate::graph::DiGraph).
//!
//! - [`nearest_neighbor`] — Greedy construction heuristic, O(n²)
//! - [`backtracking`] — Exhaustive DFS over all Hamiltonian circuits, exact
//! - [`branch_and_bound`] — Backtracking with cost-bound pruning, exact
//!
//! All strategies start and end at node 0, run synchronously to
//! completion, and return `None` when the graph admits no circuit. The
//! two exact searches always agree on the optimal cost; the heuristic is
//! an upper bound.

mod backtracking;
mod branch_and_bound;
mod nearest_neighbor;

pub use backtracking::backtracking;
pub use branch_and_bound::branch_and_bound;
pub use nearest_neighbor::nearest_neighbor;
