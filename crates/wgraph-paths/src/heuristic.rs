use wgraph_core::{Coord, Graph, NodeId};

use crate::traits::Heuristic;

/// Straight-line distance from a node's coordinate to the goal's coordinate.
#[derive(Clone, Copy, Debug)]
pub struct Euclidean<'g> {
    coords: &'g [Coord],
    goal: Coord,
}

impl<'g> Euclidean<'g> {
    /// Heuristic towards `goal` on `graph`.
    ///
    /// # Panics
    ///
    /// Panics if `goal` is out of range.
    pub fn new(graph: &'g Graph, goal: NodeId) -> Self {
        Self {
            coords: graph.coords(),
            goal: graph.coord(goal),
        }
    }
}

impl Heuristic for Euclidean<'_> {
    #[inline]
    fn estimate(&self, node: NodeId) -> f64 {
        self.coords[node].distance(self.goal)
    }
}

/// The null heuristic. A* with `Zero` behaves like Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _node: NodeId) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_measures_to_goal() {
        let g = Graph::from_edges(
            "tri",
            vec![Coord::new(0.0, 0.0), Coord::new(3.0, 4.0), Coord::new(6.0, 8.0)],
            0,
            1,
            &[],
        )
        .unwrap();
        let h = Euclidean::new(&g, 1);
        assert_eq!(h.estimate(0), 5.0);
        assert_eq!(h.estimate(1), 0.0);
        assert_eq!(h.estimate(2), 5.0);
    }

    #[test]
    fn zero_and_closures() {
        assert_eq!(Zero.estimate(42), 0.0);
        let h = |n: NodeId| n as f64 * 0.5;
        assert_eq!(h.estimate(4), 2.0);
    }
}
