//! wgraph-bench — benchmark A* over every graph file in a directory.
//!
//! Usage: `wgraph-bench [DIR]` (default `graphs`). Log verbosity follows
//! `RUST_LOG`; logs go to stderr, the report to stdout.

mod report;

use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use wgraph_core::load_dir;
use wgraph_paths::Benchmark;

const DEFAULT_GRAPH_DIR: &str = "graphs";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_DIR));
    let graphs = load_dir(&dir)?;

    let mut out = io::stdout().lock();
    if graphs.is_empty() {
        report::write_no_graphs(&mut out)?;
        return Ok(());
    }

    let bench = Benchmark::default();
    for graph in &graphs {
        log::debug!("processing {:?}", graph.name());
        report::write_graph(&mut out, graph, &bench)?;
    }
    Ok(())
}
