//! Graphs shared by the unit tests.

use rand::{Rng, RngExt};
use wgraph_core::{Coord, Graph, GraphBuilder};

fn square_coords() -> Vec<Coord> {
    vec![
        Coord::new(0.0, 0.0),
        Coord::new(1.0, 0.0),
        Coord::new(2.0, 0.0),
        Coord::new(0.0, 1.0),
    ]
}

/// Four nodes; the cheap route 0-1-2 and a detour 0-3-2 of cost 10.
pub(crate) fn square() -> Graph {
    Graph::from_edges(
        "square",
        square_coords(),
        0,
        2,
        &[(0, 1, 1.0), (1, 2, 1.0), (0, 3, 5.0), (3, 2, 5.0)],
    )
    .unwrap()
}

/// The square with node 3 isolated.
pub(crate) fn square_without_detour() -> Graph {
    Graph::from_edges("island", square_coords(), 0, 3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap()
}

/// Random points in a 100x100 box joined by `edges` random edges.
///
/// Each weight is the endpoints' straight-line distance scaled by a factor in
/// `[1, 2)`, so the Euclidean heuristic stays consistent. The graph is usually
/// disconnected in places.
pub(crate) fn random_geometric(rng: &mut impl Rng, nodes: usize, edges: usize) -> Graph {
    let coords: Vec<Coord> = (0..nodes)
        .map(|_| Coord::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    let mut b = GraphBuilder::new("random", coords.clone());
    b.endpoints(rng.random_range(0..nodes), rng.random_range(0..nodes));
    for _ in 0..edges {
        let u = rng.random_range(0..nodes);
        let v = rng.random_range(0..nodes);
        let w = coords[u].distance(coords[v]) * rng.random_range(1.0..2.0);
        b.edge(u, v, w).unwrap();
    }
    b.build().unwrap()
}

pub(crate) fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{a} != {b}");
}
