//! Tour type.

use serde::{Deserialize, Serialize};

/// A closed circuit through a graph, as the ordered sequence of node
/// indices in visit order.
///
/// For a graph of `n` nodes the order has length `n + 1`: it starts and
/// ends at node 0, and every other node appears exactly once in between.
/// Tours are produced fresh by each search call and never mutated after
/// being returned.
///
/// # Examples
///
/// ```
/// use tsp_circuit::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0]);
/// assert_eq!(tour.order(), &[0, 2, 1, 0]);
/// assert_eq!(tour.num_nodes(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visit order.
    ///
    /// The order is taken as-is; the circuit invariants are upheld by the
    /// search strategies that construct tours.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The trivial single-node circuit `[0, 0]`.
    pub fn trivial() -> Self {
        Self::new(vec![0, 0])
    }

    /// Node indices in visit order, including the final return to the
    /// start node.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of distinct nodes visited (the order length minus the
    /// closing return element).
    pub fn num_nodes(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}
