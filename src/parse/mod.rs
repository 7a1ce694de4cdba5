//! Graph input format parser.
//!
//! The format is a simplified Matrix Market layout: zero or more leading
//! comment lines starting with `%`, then a header line whose first
//! whitespace-separated token is the node count, then one line per edge
//! as `from to weight` with 1-indexed node identifiers. Identifiers are
//! converted to 0-indexed before insertion. Blank lines are skipped.
//!
//! ```text
//! % three nodes, one cheap ring
//! 3 3 6
//! 1 2 1.0
//! 2 3 1.0
//! 3 1 1.0
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::graph::DiGraph;

/// Errors produced while reading or parsing a graph file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input had no header line after the leading comments.
    #[error("missing header line with node count")]
    MissingHeader,
    /// The header's first token was not a positive integer.
    #[error("invalid node count `{0}`")]
    InvalidNodeCount(String),
    /// An edge line did not have the form `from to weight`.
    #[error("line {line}: expected `from to weight`, got `{text}`")]
    MalformedEdge { line: usize, text: String },
    /// An edge referenced a node outside `1..=node_count`.
    #[error("line {line}: node id {id} out of range 1..={max}")]
    NodeOutOfRange { line: usize, id: usize, max: usize },
    /// The file could not be read.
    #[error("failed to read graph file")]
    Io(#[from] std::io::Error),
}

/// Parses a graph from the text input format.
///
/// # Examples
///
/// ```
/// use tsp_circuit::parse::parse_graph;
///
/// let g = parse_graph("% ring\n3\n1 2 1.0\n2 3 1.0\n3 1 1.0\n").unwrap();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge(0, 1), Some(1.0));
/// assert_eq!(g.edge(1, 0), None);
/// ```
pub fn parse_graph(input: &str) -> Result<DiGraph, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('%'));

    let (_, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let count_token = header
        .split_whitespace()
        .next()
        .ok_or(ParseError::MissingHeader)?;
    let nodes: usize = count_token
        .parse()
        .map_err(|_| ParseError::InvalidNodeCount(count_token.to_string()))?;
    let mut graph =
        DiGraph::new(nodes).ok_or_else(|| ParseError::InvalidNodeCount(count_token.to_string()))?;

    for (line, text) in lines {
        let (from, to, weight) = parse_edge(line, text)?;
        for id in [from, to] {
            if id == 0 || id > nodes {
                return Err(ParseError::NodeOutOfRange {
                    line,
                    id,
                    max: nodes,
                });
            }
        }
        graph.add_edge(from - 1, to - 1, weight);
    }

    Ok(graph)
}

/// Reads and parses a graph file from disk.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<DiGraph, ParseError> {
    let contents = fs::read_to_string(path)?;
    parse_graph(&contents)
}

fn parse_edge(line: usize, text: &str) -> Result<(usize, usize, f64), ParseError> {
    let malformed = || ParseError::MalformedEdge {
        line,
        text: text.to_string(),
    };
    let mut tokens = text.split_whitespace();
    let from: usize = tokens
        .next()
        .ok_or_else(&malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let to: usize = tokens
        .next()
        .ok_or_else(&malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let weight: f64 = tokens
        .next()
        .ok_or_else(&malformed)?
        .parse()
        .map_err(|_| malformed())?;
    Ok((from, to, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RING: &str = "% a comment\n% another comment\n3 3 3\n1 2 1.5\n2 3 2.5\n3 1 3.5\n";

    #[test]
    fn test_parse_skips_comments() {
        let g = parse_graph(RING).expect("valid input");
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_parse_converts_to_zero_indexed() {
        let g = parse_graph(RING).expect("valid input");
        assert_eq!(g.edge(0, 1), Some(1.5));
        assert_eq!(g.edge(1, 2), Some(2.5));
        assert_eq!(g.edge(2, 0), Some(3.5));
        assert_eq!(g.edge(1, 0), None);
    }

    #[test]
    fn test_parse_header_extra_tokens_ignored() {
        let g = parse_graph("4 99 hello\n1 2 1.0\n").expect("valid input");
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let g = parse_graph("3\n\n1 2 1.0\n\n2 3 1.0\n").expect("valid input");
        assert_eq!(g.edge(0, 1), Some(1.0));
        assert_eq!(g.edge(1, 2), Some(1.0));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_graph(""), Err(ParseError::MissingHeader)));
        assert!(matches!(
            parse_graph("% only comments\n"),
            Err(ParseError::MissingHeader)
        ));
    }

    #[test]
    fn test_parse_bad_node_count() {
        assert!(matches!(
            parse_graph("zero\n"),
            Err(ParseError::InvalidNodeCount(_))
        ));
        assert!(matches!(
            parse_graph("0\n"),
            Err(ParseError::InvalidNodeCount(_))
        ));
    }

    #[test]
    fn test_parse_malformed_edge() {
        let err = parse_graph("3\n1 2\n").expect_err("two tokens");
        assert!(matches!(err, ParseError::MalformedEdge { line: 2, .. }));
        let err = parse_graph("3\n1 two 5.0\n").expect_err("non-numeric");
        assert!(matches!(err, ParseError::MalformedEdge { line: 2, .. }));
    }

    #[test]
    fn test_parse_node_out_of_range() {
        let err = parse_graph("3\n1 4 5.0\n").expect_err("node 4 of 3");
        assert!(matches!(
            err,
            ParseError::NodeOutOfRange { line: 2, id: 4, max: 3 }
        ));
        let err = parse_graph("3\n0 1 5.0\n").expect_err("ids are 1-indexed");
        assert!(matches!(err, ParseError::NodeOutOfRange { id: 0, .. }));
    }

    #[test]
    fn test_read_graph_missing_file() {
        let err = read_graph("definitely/not/a/file.mtx").expect_err("missing file");
        assert!(matches!(err, ParseError::Io(_)));
    }
}
