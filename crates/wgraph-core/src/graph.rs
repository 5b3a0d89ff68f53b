//! The static weighted undirected graph: [`Graph`] and its [`GraphBuilder`].

use crate::error::GraphError;
use crate::geom::Coord;

/// Index of a node, in `[0, graph.len())`.
pub type NodeId = usize;

/// One direction of an undirected edge, as stored in an adjacency list.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// A weighted undirected graph with one planar coordinate per node and a
/// designated start/goal pair.
///
/// Every edge `(u, v, w)` is stored twice, once in each endpoint's adjacency
/// list. Graphs are immutable once built; use [`GraphBuilder`] to create one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    name: String,
    coords: Vec<Coord>,
    adjacency: Vec<Vec<Edge>>,
    start: NodeId,
    goal: NodeId,
    edge_count: usize,
}

impl Graph {
    /// Build a graph in one call from an edge list.
    pub fn from_edges(
        name: impl Into<String>,
        coords: Vec<Coord>,
        start: NodeId,
        goal: NodeId,
        edges: &[(NodeId, NodeId, f64)],
    ) -> Result<Self, GraphError> {
        let mut b = GraphBuilder::new(name, coords);
        b.endpoints(start, goal);
        for &(u, v, w) in edges {
            b.edge(u, v, w)?;
        }
        b.build()
    }

    /// Free-text name of the graph.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false` for a built graph; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of undirected edges that were inserted.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `node` is a valid index.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.len()
    }

    /// Designated start node.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Designated goal node.
    #[inline]
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Adjacency list of `node`: both directions of every incident edge.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Coordinate of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    pub fn coord(&self, node: NodeId) -> Coord {
        self.coords[node]
    }

    /// All node coordinates, indexed by node.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
}

/// Incremental, validating constructor for [`Graph`].
///
/// ```
/// use wgraph_core::{Coord, GraphBuilder};
///
/// let mut b = GraphBuilder::new("line", vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)]);
/// b.endpoints(0, 1).edge(0, 1, 1.0).unwrap();
/// let g = b.build().unwrap();
/// assert_eq!(g.neighbors(1)[0].to, 0);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    name: String,
    coords: Vec<Coord>,
    adjacency: Vec<Vec<Edge>>,
    start: NodeId,
    goal: NodeId,
    edge_count: usize,
}

impl GraphBuilder {
    /// Start a graph with one node per coordinate. Start and goal default
    /// to node 0.
    pub fn new(name: impl Into<String>, coords: Vec<Coord>) -> Self {
        let len = coords.len();
        Self {
            name: name.into(),
            coords,
            adjacency: vec![Vec::new(); len],
            start: 0,
            goal: 0,
            edge_count: 0,
        }
    }

    /// Set the start and goal nodes. Checked in [`build`](Self::build).
    pub fn endpoints(&mut self, start: NodeId, goal: NodeId) -> &mut Self {
        self.start = start;
        self.goal = goal;
        self
    }

    /// Insert the undirected edge `(u, v)` with weight `weight`.
    pub fn edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<&mut Self, GraphError> {
        let len = self.coords.len();
        for node in [u, v] {
            if node >= len {
                return Err(GraphError::NodeOutOfRange { node, len });
            }
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { u, v, weight });
        }
        self.adjacency[u].push(Edge { to: v, weight });
        self.adjacency[v].push(Edge { to: u, weight });
        self.edge_count += 1;
        Ok(self)
    }

    /// Validate and freeze the graph.
    pub fn build(self) -> Result<Graph, GraphError> {
        let len = self.coords.len();
        if len == 0 {
            return Err(GraphError::Empty);
        }
        for node in [self.start, self.goal] {
            if node >= len {
                return Err(GraphError::NodeOutOfRange { node, len });
            }
        }
        if let Some(node) = self.coords.iter().position(|c| !c.is_finite()) {
            return Err(GraphError::InvalidCoord { node });
        }
        Ok(Graph {
            name: self.name,
            coords: self.coords,
            adjacency: self.adjacency,
            start: self.start,
            goal: self.goal,
            edge_count: self.edge_count,
        })
    }
}
