//! Error types for graph construction and loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// A graph violated one of its structural invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    /// The graph has no nodes.
    #[error("graph has no nodes")]
    Empty,

    /// A node index (edge endpoint, start or goal) is outside `[0, len)`.
    #[error("node {node} is out of range for a graph of {len} nodes")]
    NodeOutOfRange { node: NodeId, len: usize },

    /// An edge weight is negative, NaN or infinite.
    #[error("edge ({u}, {v}) has invalid weight {weight}")]
    InvalidWeight { u: NodeId, v: NodeId, weight: f64 },

    /// A node coordinate is NaN or infinite.
    #[error("node {node} has a non-finite coordinate")]
    InvalidCoord { node: NodeId },
}

/// Failure to read a graph from text or disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input ended before `expected` was read.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token could not be parsed as the value it stands for.
    #[error("line {line}: expected {expected}, found {found:?}")]
    Parse {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
