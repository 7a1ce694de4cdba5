//! Dense weighted directed graphs.
//!
//! Provides the adjacency-matrix graph representation shared by all
//! search strategies.

mod digraph;

pub use digraph::DiGraph;
