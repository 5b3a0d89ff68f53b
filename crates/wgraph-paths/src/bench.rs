use std::time::{Duration, Instant};

use wgraph_core::NodeId;

use crate::astar::{AstarSearch, UNREACHABLE};
use crate::error::SearchError;
use crate::traits::{Heuristic, WeightedPather};

/// Number of A* runs per benchmark unless configured otherwise.
pub const DEFAULT_RUNS: usize = 100;

/// Replays one A* query a fixed number of times and aggregates the results.
///
/// Runs are sequential; each allocates its own search state and is timed
/// with the monotonic clock from before allocation to after the goal is
/// reached (or the frontier is exhausted).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benchmark {
    runs: usize,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new(DEFAULT_RUNS)
    }
}

impl Benchmark {
    /// A benchmark of `runs` repetitions. Zero is treated as one.
    pub fn new(runs: usize) -> Self {
        Self { runs: runs.max(1) }
    }

    #[inline]
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Benchmark A* from `start` to `goal`.
    ///
    /// The path cost is taken from the first run; the search is
    /// deterministic so later runs agree with it.
    pub fn run<P, H>(
        &self,
        pather: &P,
        start: NodeId,
        goal: NodeId,
        heuristic: H,
    ) -> Result<BenchReport, SearchError>
    where
        P: WeightedPather + ?Sized,
        H: Heuristic + Clone,
    {
        let mut total_time = Duration::ZERO;
        let mut min_time = Duration::MAX;
        let mut total_nodes_expanded = 0;
        let mut total_steps = 0;
        let mut cost = None;

        for run in 0..self.runs {
            let h = heuristic.clone();
            let t0 = Instant::now();
            let result = AstarSearch::new(pather, start, goal, h)?.run();
            let elapsed = t0.elapsed();

            total_time += elapsed;
            min_time = min_time.min(elapsed);
            total_nodes_expanded += result.nodes_expanded;
            total_steps += result.steps;
            if run == 0 {
                cost = result.cost;
            }
        }

        let report = BenchReport {
            runs: self.runs,
            total_nodes_expanded,
            total_steps,
            total_time,
            min_time,
            cost,
        };
        log::debug!(
            "benchmarked {start} -> {goal} over {} runs: {:.2} expanded, {:.2} steps, {:.3} ms avg",
            report.runs,
            report.avg_nodes_expanded(),
            report.avg_steps(),
            report.avg_time_ms()
        );
        Ok(report)
    }
}

/// Aggregated metrics of a [`Benchmark`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchReport {
    pub runs: usize,
    pub total_nodes_expanded: usize,
    pub total_steps: usize,
    pub total_time: Duration,
    /// Fastest single run.
    pub min_time: Duration,
    /// Path cost from the first run, `None` if the goal is unreachable.
    pub cost: Option<f64>,
}

impl BenchReport {
    pub fn avg_nodes_expanded(&self) -> f64 {
        self.total_nodes_expanded as f64 / self.runs as f64
    }

    pub fn avg_steps(&self) -> f64 {
        self.total_steps as f64 / self.runs as f64
    }

    /// Mean wall-clock time per run, in nanoseconds.
    pub fn avg_time_ns(&self) -> f64 {
        self.total_time.as_nanos() as f64 / self.runs as f64
    }

    pub fn avg_time_ms(&self) -> f64 {
        self.avg_time_ns() / 1_000_000.0
    }

    pub fn min_time_ms(&self) -> f64 {
        self.min_time.as_nanos() as f64 / 1_000_000.0
    }

    /// Path cost, or [`UNREACHABLE`] (`-1`) when there is none.
    pub fn cost_or_sentinel(&self) -> f64 {
        self.cost.unwrap_or(UNREACHABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::astar;
    use crate::fixtures::{square, square_without_detour};
    use crate::heuristic::{Euclidean, Zero};

    #[test]
    fn averages_match_a_single_run() {
        let g = square();
        let h = Euclidean::new(&g, 2);
        let single = astar(&g, 0, 2, h).unwrap();
        let report = Benchmark::new(7).run(&g, 0, 2, h).unwrap();

        assert_eq!(report.runs, 7);
        assert_eq!(report.total_nodes_expanded, 7 * single.nodes_expanded);
        assert_eq!(report.total_steps, 7 * single.steps);
        assert_eq!(report.avg_nodes_expanded(), single.nodes_expanded as f64);
        assert_eq!(report.avg_steps(), single.steps as f64);
        assert_eq!(report.cost, Some(2.0));
        assert!(report.min_time <= report.total_time);
        assert!(report.min_time_ms() <= report.avg_time_ms());
    }

    #[test]
    fn unreachable_reports_sentinel() {
        let g = square_without_detour();
        let report = Benchmark::new(3).run(&g, 0, 3, Zero).unwrap();
        assert_eq!(report.cost, None);
        assert_eq!(report.cost_or_sentinel(), -1.0);
        assert_eq!(report.avg_nodes_expanded(), 3.0);
    }

    #[test]
    fn zero_runs_clamped() {
        let b = Benchmark::new(0);
        assert_eq!(b.runs(), 1);
        assert_eq!(Benchmark::default().runs(), DEFAULT_RUNS);
        let report = b.run(&square(), 0, 2, Zero).unwrap();
        assert_eq!(report.runs, 1);
        assert_eq!(report.min_time, report.total_time);
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        let g = square();
        assert!(Benchmark::new(2).run(&g, 0, 10, Zero).is_err());
    }
}
