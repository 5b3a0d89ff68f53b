use thiserror::Error;
use wgraph_core::NodeId;

/// Precondition failure detected before a search starts.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("node {node} is out of range for a graph of {len} nodes")]
    NodeOutOfRange { node: NodeId, len: usize },
}

impl SearchError {
    /// Check that `node` is a valid index for a graph of `len` nodes.
    pub(crate) fn check(node: NodeId, len: usize) -> Result<(), Self> {
        if node < len {
            Ok(())
        } else {
            Err(Self::NodeOutOfRange { node, len })
        }
    }
}
