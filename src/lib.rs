//! # tsp-circuit
//!
//! Traveling salesman circuits on small, dense, weighted directed graphs:
//! a greedy construction heuristic plus two exact searches that enumerate
//! Hamiltonian circuits starting and ending at node 0.
//!
//! ## Modules
//!
//! - [`graph`] — Dense directed graph over an adjacency cost matrix
//! - [`models`] — Tour type (a closed circuit as an ordered node sequence)
//! - [`search`] — Search strategies (nearest neighbor, backtracking, branch-and-bound)
//! - [`parse`] — Graph input format parser
//! - [`report`] — Result display and strategy timing

pub mod graph;
pub mod models;
pub mod parse;
pub mod report;
pub mod search;
