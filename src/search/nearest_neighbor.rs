//! Nearest-neighbor construction heuristic.
//!
//! Builds a circuit greedily: starting from node 0, always advance to the
//! cheapest unvisited node, then close the circuit back to node 0.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes. No recursion.
//!
//! # Reference
//!
//! The simplest TSP construction heuristic. Not optimal in general; it
//! provides an upper bound for comparing against the exact searches and
//! is never used to seed their pruning.

use crate::graph::DiGraph;
use crate::models::Tour;

/// Constructs a circuit with the nearest-neighbor heuristic.
///
/// Returns `None` if the walk gets stuck, i.e. some step has no edge to
/// any unvisited node. On a complete graph this never happens. The
/// closing hop back to node 0 is appended without checking that the edge
/// exists; cost it with [`DiGraph::tour_cost`], which counts real edges
/// only.
///
/// # Examples
///
/// ```
/// use tsp_circuit::graph::DiGraph;
/// use tsp_circuit::search::nearest_neighbor;
///
/// let mut g = DiGraph::new(3).unwrap();
/// g.add_edge(0, 1, 1.0);
/// g.add_edge(0, 2, 5.0);
/// g.add_edge(1, 2, 1.0);
/// g.add_edge(2, 0, 1.0);
///
/// let tour = nearest_neighbor(&g).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2, 0]);
/// ```
pub fn nearest_neighbor(graph: &DiGraph) -> Option<Tour> {
    let n = graph.node_count();
    if n == 1 {
        return Some(Tour::trivial());
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut order = Vec::with_capacity(n + 1);
    order.push(0);
    let mut current = 0;

    while order.len() < n {
        let next = graph.cheapest_unvisited(current, &visited)?;
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order.push(0); // close the circuit
    Some(Tour::new(order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_four() -> DiGraph {
        let mut g = DiGraph::new(4).expect("valid");
        let edges = [
            (0, 1, 10.0),
            (0, 2, 15.0),
            (0, 3, 20.0),
            (1, 0, 10.0),
            (1, 2, 35.0),
            (1, 3, 25.0),
            (2, 0, 15.0),
            (2, 1, 35.0),
            (2, 3, 30.0),
            (3, 0, 20.0),
            (3, 1, 25.0),
            (3, 2, 30.0),
        ];
        for (from, to, w) in edges {
            g.add_edge(from, to, w);
        }
        g
    }

    #[test]
    fn test_nn_follows_cheapest_edges() {
        let g = complete_four();
        let tour = nearest_neighbor(&g).expect("complete graph");
        // 0 → 1 (10), then 1 → 3 (25 < 35), then 3 → 2, close.
        assert_eq!(tour.order(), &[0, 1, 3, 2, 0]);
        assert!((g.tour_cost(tour.order()) - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_shape() {
        let g = complete_four();
        let tour = nearest_neighbor(&g).expect("complete graph");
        let order = tour.order();
        assert_eq!(order.len(), g.node_count() + 1);
        assert_eq!(order[0], 0);
        assert_eq!(*order.last().expect("non-empty"), 0);
        let mut interior: Vec<usize> = order[1..order.len() - 1].to_vec();
        interior.sort_unstable();
        assert_eq!(interior, vec![1, 2, 3]);
    }

    #[test]
    fn test_nn_stuck_returns_none() {
        // 0 → 1 exists but node 1 has no outgoing edges.
        let mut g = DiGraph::new(3).expect("valid");
        g.add_edge(0, 1, 1.0);
        g.add_edge(2, 0, 1.0);
        assert!(nearest_neighbor(&g).is_none());
    }

    #[test]
    fn test_nn_single_node() {
        let g = DiGraph::new(1).expect("valid");
        let tour = nearest_neighbor(&g).expect("trivial circuit");
        assert_eq!(tour.order(), &[0, 0]);
        assert_eq!(g.tour_cost(tour.order()), 0.0);
    }

    #[test]
    fn test_nn_two_nodes() {
        let mut g = DiGraph::new(2).expect("valid");
        g.add_edge(0, 1, 3.0);
        g.add_edge(1, 0, 4.0);
        let tour = nearest_neighbor(&g).expect("valid circuit");
        assert_eq!(tour.order(), &[0, 1, 0]);
        assert!((g.tour_cost(tour.order()) - 7.0).abs() < 1e-10);
    }
}
