use std::collections::BinaryHeap;

use wgraph_core::{Edge, NodeId};

use crate::error::SearchError;
use crate::frontier::Entry;
use crate::traits::WeightedPather;

/// Single-source shortest distances from `source` to every node.
///
/// `None` marks nodes that cannot be reached. Unlike [`astar`](crate::astar)
/// there is no goal and no heuristic, so every reachable node is settled.
pub fn dijkstra_distances<P>(pather: &P, source: NodeId) -> Result<Vec<Option<f64>>, SearchError>
where
    P: WeightedPather + ?Sized,
{
    let len = pather.node_count();
    SearchError::check(source, len)?;

    let mut dist = vec![f64::INFINITY; len];
    let mut settled = vec![false; len];
    dist[source] = 0.0;

    let mut open = BinaryHeap::new();
    open.push(Entry {
        node: source,
        g: 0.0,
        f: 0.0,
    });

    while let Some(cur) = open.pop() {
        if settled[cur.node] {
            continue;
        }
        settled[cur.node] = true;

        for &Edge { to, weight } in pather.neighbors(cur.node) {
            let tentative = cur.g + weight;
            if tentative < dist[to] {
                dist[to] = tentative;
                open.push(Entry {
                    node: to,
                    g: tentative,
                    f: tentative,
                });
            }
        }
    }

    let reached = settled.iter().filter(|&&s| s).count();
    log::trace!("dijkstra from {source}: {reached} of {len} nodes reachable");
    Ok(dist.into_iter().map(|d| d.is_finite().then_some(d)).collect())
}
