use std::collections::BinaryHeap;

use wgraph_core::{Edge, NodeId};

use crate::error::SearchError;
use crate::frontier::Entry;
use crate::traits::{Heuristic, WeightedPather};

/// Sentinel path cost reported for an unreachable goal.
pub const UNREACHABLE: f64 = -1.0;

const NO_PARENT: NodeId = usize::MAX;

/// Outcome and work counters of one A* run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Non-stale frontier pops, the goal pop included.
    pub nodes_expanded: usize,
    /// All frontier pops, stale ones included.
    pub steps: usize,
    /// Cost of the best path to the goal, or `None` if unreachable.
    pub cost: Option<f64>,
    /// Nodes along that path, start and goal included.
    pub path: Option<Vec<NodeId>>,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// Path cost, or [`UNREACHABLE`] (`-1`) when there is none.
    #[inline]
    pub fn cost_or_sentinel(&self) -> f64 {
        self.cost.unwrap_or(UNREACHABLE)
    }
}

/// What a single call to [`AstarSearch::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Popped an entry whose cost was already superseded; nothing expanded.
    Stale(NodeId),
    /// Expanded a node and relaxed its edges.
    Expanded(NodeId),
    /// Popped the goal with its final cost. Terminal.
    Reached(NodeId),
    /// The frontier ran out before the goal was reached. Terminal.
    Exhausted,
}

impl Step {
    /// Whether the search is over after this step.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Step::Reached(_) | Step::Exhausted)
    }
}

/// A single A* run, driven one frontier pop at a time.
///
/// The frontier has no decrease-key: improving a node's cost pushes a new
/// entry, and the superseded one is discarded when popped (a *stale* pop).
/// Expanded nodes are closed and never reopened, so the heuristic must be
/// consistent for the result to be optimal.
///
/// ```
/// use wgraph_core::{Coord, Graph};
/// use wgraph_paths::{AstarSearch, Euclidean, Step};
///
/// let g = Graph::from_edges(
///     "pair",
///     vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0)],
///     0,
///     1,
///     &[(0, 1, 1.5)],
/// )
/// .unwrap();
/// let mut search = AstarSearch::new(&g, 0, 1, Euclidean::new(&g, 1)).unwrap();
/// assert_eq!(search.step(), Step::Expanded(0));
/// assert_eq!(search.step(), Step::Reached(1));
/// assert_eq!(search.run().cost, Some(1.5));
/// ```
pub struct AstarSearch<'a, P: ?Sized, H> {
    pather: &'a P,
    heuristic: H,
    start: NodeId,
    goal: NodeId,
    best_g: Vec<f64>,
    parent: Vec<NodeId>,
    closed: Vec<bool>,
    open: BinaryHeap<Entry>,
    nodes_expanded: usize,
    steps: usize,
    done: Option<Step>,
}

impl<'a, P, H> AstarSearch<'a, P, H>
where
    P: WeightedPather + ?Sized,
    H: Heuristic,
{
    /// Prepare a search from `start` to `goal` with the start node on the
    /// frontier.
    pub fn new(
        pather: &'a P,
        start: NodeId,
        goal: NodeId,
        heuristic: H,
    ) -> Result<Self, SearchError> {
        let len = pather.node_count();
        SearchError::check(start, len)?;
        SearchError::check(goal, len)?;

        let mut best_g = vec![f64::INFINITY; len];
        best_g[start] = 0.0;

        let mut open = BinaryHeap::new();
        open.push(Entry {
            node: start,
            g: 0.0,
            f: heuristic.estimate(start),
        });

        Ok(Self {
            pather,
            heuristic,
            start,
            goal,
            best_g,
            parent: vec![NO_PARENT; len],
            closed: vec![false; len],
            open,
            nodes_expanded: 0,
            steps: 0,
            done: None,
        })
    }

    /// Pop one frontier entry and act on it.
    ///
    /// Once a terminal step has been returned, further calls return it again
    /// without doing any work.
    pub fn step(&mut self) -> Step {
        if let Some(done) = self.done {
            return done;
        }

        let Some(cur) = self.open.pop() else {
            self.done = Some(Step::Exhausted);
            return Step::Exhausted;
        };
        self.steps += 1;

        if cur.g > self.best_g[cur.node] {
            return Step::Stale(cur.node);
        }

        self.nodes_expanded += 1;
        if cur.node == self.goal {
            let step = Step::Reached(cur.node);
            self.done = Some(step);
            return step;
        }
        self.closed[cur.node] = true;

        let pather = self.pather;
        for &Edge { to, weight } in pather.neighbors(cur.node) {
            let new_g = cur.g + weight;
            if new_g < self.best_g[to] && !self.closed[to] {
                self.best_g[to] = new_g;
                self.parent[to] = cur.node;
                self.open.push(Entry {
                    node: to,
                    g: new_g,
                    f: new_g + self.heuristic.estimate(to),
                });
            }
        }

        Step::Expanded(cur.node)
    }

    /// Step until the goal is reached or the frontier is empty.
    pub fn run(mut self) -> SearchResult {
        while !self.step().is_terminal() {}

        let reached = self.done == Some(Step::Reached(self.goal));
        let cost = self.best_g(self.goal);
        SearchResult {
            nodes_expanded: self.nodes_expanded,
            steps: self.steps,
            cost,
            path: if reached { Some(self.path_to_goal()) } else { None },
        }
    }

    /// Best known cost from the start to `node`, `None` while undiscovered.
    pub fn best_g(&self, node: NodeId) -> Option<f64> {
        let g = self.best_g[node];
        g.is_finite().then_some(g)
    }

    /// Whether `node` has been expanded.
    #[inline]
    pub fn is_closed(&self, node: NodeId) -> bool {
        self.closed[node]
    }

    /// Entries currently on the frontier, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn path_to_goal(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cur = self.goal;
        while cur != NO_PARENT {
            path.push(cur);
            if cur == self.start {
                break;
            }
            cur = self.parent[cur];
        }
        path.reverse();
        path
    }
}

/// Run A* from `start` to `goal` and report its cost and work counters.
///
/// Fails only if `start` or `goal` is not a node of `pather`. An unreachable
/// goal is a normal outcome with `cost == None`.
pub fn astar<P, H>(
    pather: &P,
    start: NodeId,
    goal: NodeId,
    heuristic: H,
) -> Result<SearchResult, SearchError>
where
    P: WeightedPather + ?Sized,
    H: Heuristic,
{
    let result = AstarSearch::new(pather, start, goal, heuristic)?.run();
    log::trace!(
        "astar {start} -> {goal}: cost {:?}, {} expanded, {} steps",
        result.cost,
        result.nodes_expanded,
        result.steps
    );
    Ok(result)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let r = SearchResult {
            nodes_expanded: 3,
            steps: 4,
            cost: Some(2.5),
            path: Some(vec![0, 2, 5]),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
