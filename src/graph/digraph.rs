//! Dense directed graph over an adjacency cost matrix.

/// A dense weighted directed graph stored as a row-major n×n cost matrix.
///
/// Each cell holds `Some(weight)` for a directed edge or `None` where no
/// edge exists, so a genuine zero-cost edge is distinguishable from an
/// absent one. Diagonal cells stay `None` by convention (no self-loops).
/// The graph is built once through [`add_edge`](DiGraph::add_edge) and is
/// read-only during search.
///
/// # Examples
///
/// ```
/// use tsp_circuit::graph::DiGraph;
///
/// let mut g = DiGraph::new(3).unwrap();
/// g.add_edge(0, 1, 4.0);
/// g.add_edge(1, 2, 2.5);
/// g.add_edge(2, 0, 1.0);
/// assert_eq!(g.edge(0, 1), Some(4.0));
/// assert_eq!(g.edge(1, 0), None);
/// assert!((g.tour_cost(&[0, 1, 2, 0]) - 7.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DiGraph {
    costs: Vec<Option<f64>>,
    nodes: usize,
}

impl DiGraph {
    /// Creates a graph with the given number of nodes and no edges.
    ///
    /// Returns `None` if `nodes` is zero.
    pub fn new(nodes: usize) -> Option<Self> {
        if nodes == 0 {
            return None;
        }
        Some(Self {
            costs: vec![None; nodes * nodes],
            nodes,
        })
    }

    /// Number of nodes in this graph.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Sets the cost of the directed edge `from → to`, silently
    /// overwriting any previous value.
    ///
    /// Weights are assumed non-negative; this is not enforced.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.costs[from * self.nodes + to] = Some(weight);
    }

    /// Returns the cost of the directed edge `from → to`, or `None` if
    /// no such edge exists.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn edge(&self, from: usize, to: usize) -> Option<f64> {
        self.costs[from * self.nodes + to]
    }

    /// Returns the unvisited node reachable from `from` by the cheapest
    /// edge, or `None` if no unvisited node has an edge from `from`.
    ///
    /// Ties break toward the lowest index (ascending scan), so the result
    /// is deterministic.
    pub fn cheapest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for to in 0..self.nodes {
            if visited[to] {
                continue;
            }
            if let Some(w) = self.edge(from, to) {
                match best {
                    Some((_, bw)) if bw <= w => {}
                    _ => best = Some((to, w)),
                }
            }
        }
        best.map(|(to, _)| to)
    }

    /// Sums the edge costs along consecutive pairs of `order`.
    ///
    /// A consecutive pair with no edge contributes nothing, silently
    /// understating the total; only cost orders whose every hop is a real
    /// edge. No start/end or permutation checks are performed, so partial
    /// paths can be costed too.
    pub fn tour_cost(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .filter_map(|pair| self.edge(pair[0], pair[1]))
            .sum()
    }
}
