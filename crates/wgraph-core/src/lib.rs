//! **wgraph-core** — weighted undirected graphs with planar node coordinates.
//!
//! This crate provides the graph model shared across the *wgraph* workspace
//! ([`Graph`], [`Coord`], [`Edge`]) together with the plain-text loader used
//! to read graphs from disk.
//!
//! A [`Graph`] is built once through a [`GraphBuilder`], which validates node
//! indices, weights and coordinates, and is immutable afterwards.

pub mod error;
pub mod geom;
pub mod graph;
pub mod loader;

pub use error::{GraphError, LoadError};
pub use geom::Coord;
pub use graph::{Edge, Graph, GraphBuilder, NodeId};
pub use loader::{GRAPH_EXTENSION, load_dir, load_graph, parse_graph};
