//! Command-line front end: parse a graph file and run one strategy.

use std::env;
use std::process::ExitCode;

use tsp_circuit::graph::DiGraph;
use tsp_circuit::models::Tour;
use tsp_circuit::parse;
use tsp_circuit::report;
use tsp_circuit::search::{backtracking, branch_and_bound, nearest_neighbor};

const USAGE: &str = "usage: tsp-circuit <file> <heuristic|backtrack|bound|time> [--json]";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (path, command, json) = match args.as_slice() {
        [path, command] => (path, command.as_str(), false),
        [path, command, flag] if flag == "--json" => (path, command.as_str(), true),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let graph = match parse::read_graph(path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        "heuristic" => display(&graph, nearest_neighbor(&graph)),
        "backtrack" => display(&graph, backtracking(&graph)),
        "bound" => display(&graph, branch_and_bound(&graph)),
        "time" => time(&graph, json),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn display(graph: &DiGraph, tour: Option<Tour>) -> ExitCode {
    match tour {
        Some(tour) => {
            let cost = graph.tour_cost(tour.order());
            println!("{}", report::format_tour(&tour, cost));
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("no circuit exists");
            ExitCode::FAILURE
        }
    }
}

fn time(graph: &DiGraph, json: bool) -> ExitCode {
    let report = report::time_strategies(graph);
    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("failed to serialize timing report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }
    ExitCode::SUCCESS
}
