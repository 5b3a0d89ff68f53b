use std::cmp::Ordering;

use wgraph_core::NodeId;

/// Frontier entry for the priority-queue searches.
///
/// Ordered by `f` only, reversed so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first. Ties are left to the heap.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) node: NodeId,
    pub(crate) g: f64,
    pub(crate) f: f64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_smallest_f() {
        let mut open = BinaryHeap::new();
        for (node, f) in [(0, 3.5), (1, 0.25), (2, 7.0), (3, 1.0)] {
            open.push(Entry { node, g: 0.0, f });
        }
        let order: Vec<NodeId> = std::iter::from_fn(|| open.pop()).map(|e| e.node).collect();
        assert_eq!(order, [1, 3, 0, 2]);
    }
}
