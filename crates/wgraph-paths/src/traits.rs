use wgraph_core::{Edge, Graph, NodeId};

/// Read-only view of a weighted graph, as seen by the search algorithms.
pub trait WeightedPather {
    /// Number of nodes; valid indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Outgoing adjacency of `node`. For undirected graphs this holds both
    /// directions of every incident edge. Weights must be >= 0.
    fn neighbors(&self, node: NodeId) -> &[Edge];
}

impl WeightedPather for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbors(&self, node: NodeId) -> &[Edge] {
        Graph::neighbors(self, node)
    }
}

/// Estimate of the remaining cost from a node to the search goal.
///
/// Must be non-negative. A* returns optimal costs only if the estimate is
/// consistent (see the crate docs).
pub trait Heuristic {
    fn estimate(&self, node: NodeId) -> f64;
}

impl<F: Fn(NodeId) -> f64> Heuristic for F {
    #[inline]
    fn estimate(&self, node: NodeId) -> f64 {
        self(node)
    }
}
