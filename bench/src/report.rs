//! Console report, one block per graph.

use std::io::{self, Write};

use wgraph_core::Graph;
use wgraph_paths::{BenchReport, Benchmark, Euclidean, SearchError};

const SEPARATOR: &str = "----------------------------------------";

/// Error from benchmarking a graph and writing its block.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub fn write_no_graphs(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No valid graph files found in the folder.")
}

/// Benchmark `graph` from its start to its goal and write the full block.
pub fn write_graph(
    out: &mut impl Write,
    graph: &Graph,
    bench: &Benchmark,
) -> Result<(), ReportError> {
    write_header(out, graph)?;

    let goal = graph.goal();
    let report = bench.run(graph, graph.start(), goal, Euclidean::new(graph, goal))?;
    write_metrics(out, "Euclidean distance", &report)?;

    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

fn write_header(out: &mut impl Write, graph: &Graph) -> io::Result<()> {
    writeln!(out, "Processing graph: {}", graph.name())?;
    writeln!(out, "Number of nodes: {}", graph.len())?;
    writeln!(out, "Start node: {}, Goal node: {}", graph.start(), graph.goal())?;
    writeln!(out)
}

fn write_metrics(out: &mut impl Write, heuristic: &str, r: &BenchReport) -> io::Result<()> {
    writeln!(out, "Using {heuristic} heuristic:")?;
    writeln!(
        out,
        "Average nodes expanded: {:.2}, Average steps: {:.2}",
        r.avg_nodes_expanded(),
        r.avg_steps()
    )?;
    writeln!(
        out,
        "Average execution time: {:.9} ms ({:.9} ns)",
        r.avg_time_ms(),
        r.avg_time_ns()
    )?;
    writeln!(out, "Min execution time: {:.9} ms", r.min_time_ms())?;
    writeln!(out, "Path cost to goal: {:.9}", r.cost_or_sentinel())?;
    writeln!(out)
}
