//! Shortest-path search over [`wgraph_core::Graph`] values.
//!
//! - **A\*** with a pluggable heuristic ([`astar`], [`AstarSearch`])
//! - **Dijkstra** single-source distances, used as a reference oracle
//!   ([`dijkstra_distances`])
//! - a **benchmark harness** that replays A* and averages its metrics
//!   ([`Benchmark`])
//!
//! Every search allocates its own frontier and cost arrays; nothing is
//! shared between runs.
//!
//! # Heuristics
//!
//! A* never reopens a node once it has been expanded. Costs are therefore
//! optimal only when the [`Heuristic`] is *consistent*: for every edge
//! `(u, v, w)`, `h(u) <= w + h(v)`. [`Euclidean`] is consistent whenever
//! every edge weight is at least the straight-line distance between its
//! endpoints; [`Zero`] is always consistent.

mod astar;
mod bench;
mod dijkstra;
mod error;
#[cfg(test)]
mod fixtures;
mod frontier;
mod heuristic;
mod traits;

pub use astar::{AstarSearch, SearchResult, Step, UNREACHABLE, astar};
pub use bench::{BenchReport, Benchmark, DEFAULT_RUNS};
pub use dijkstra::dijkstra_distances;
pub use error::SearchError;
pub use heuristic::{Euclidean, Zero};
pub use traits::{Heuristic, WeightedPather};
