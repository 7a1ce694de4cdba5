//! Result display and strategy timing.
//!
//! Formats circuits for human-readable output (1-indexed node order,
//! cost rounded to one decimal place) and runs all three strategies on
//! one graph to compare their costs and wall-clock times.

use std::fmt;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::graph::DiGraph;
use crate::models::Tour;
use crate::search::{backtracking, branch_and_bound, nearest_neighbor};

/// Formats a tour for display: `cost = 80.0, visitOrder = [1, 2, 4, 3]`.
///
/// Node indices are shown 1-indexed and the closing return-to-start
/// element is omitted; the cost is rounded to one decimal place.
///
/// # Examples
///
/// ```
/// use tsp_circuit::models::Tour;
/// use tsp_circuit::report::format_tour;
///
/// let tour = Tour::new(vec![0, 1, 3, 2, 0]);
/// assert_eq!(format_tour(&tour, 80.0), "cost = 80.0, visitOrder = [1, 2, 4, 3]");
/// ```
pub fn format_tour(tour: &Tour, cost: f64) -> String {
    let order = tour.order();
    let visits: Vec<String> = order[..order.len() - 1]
        .iter()
        .map(|&node| (node + 1).to_string())
        .collect();
    format!("cost = {:.1}, visitOrder = [{}]", cost, visits.join(", "))
}

/// Outcome of running one strategy against a graph.
#[derive(Debug, Clone, Serialize)]
pub struct TimedRun {
    /// Strategy name: `heuristic`, `backtrack`, or `bound`.
    pub strategy: &'static str,
    /// Circuit cost, or `None` when the strategy found no circuit.
    pub cost: Option<f64>,
    /// Wall-clock running time in milliseconds.
    pub millis: u128,
}

/// Costs and running times of all three strategies on one graph.
#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    /// One entry per strategy, in execution order.
    pub runs: Vec<TimedRun>,
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            match run.cost {
                Some(cost) => writeln!(
                    f,
                    "{}: cost = {:.1}, {} milliseconds",
                    run.strategy, cost, run.millis
                )?,
                None => writeln!(f, "{}: no circuit, {} milliseconds", run.strategy, run.millis)?,
            }
        }
        Ok(())
    }
}

/// Runs all three strategies on the graph, timing each.
///
/// Runs the heuristic first, then branch-and-bound, then exhaustive
/// backtracking, so the cheapest strategies report before the slowest.
pub fn time_strategies(graph: &DiGraph) -> TimingReport {
    let runs = vec![
        timed("heuristic", graph, nearest_neighbor),
        timed("bound", graph, branch_and_bound),
        timed("backtrack", graph, backtracking),
    ];
    TimingReport { runs }
}

fn timed(strategy: &'static str, graph: &DiGraph, search: fn(&DiGraph) -> Option<Tour>) -> TimedRun {
    let start = Instant::now();
    let tour = search(graph);
    let millis = start.elapsed().as_millis();
    debug!("{strategy} finished in {millis} ms");
    TimedRun {
        strategy,
        cost: tour.map(|t| graph.tour_cost(t.order())),
        millis,
    }
}
