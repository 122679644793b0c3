//! Fluent checks over a [`Graph`].

use crate::report::{Args, CheckFailed, CheckKind, Recorder, Report, count};
use shapecheck_core::config::{CycleDetection, ShapecheckConfig};
use shapecheck_core::edge::Edge;
use shapecheck_core::graph::Graph;
use std::fmt::Debug;
use std::hash::Hash;

/// Records one outcome per call against a borrowed graph.
pub struct GraphChecker<'g, N, W = f64> {
    graph: &'g Graph<N, W>,
    cycle_detection: CycleDetection,
    recorder: Recorder,
}

impl<'g, N, W> GraphChecker<'g, N, W>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Checker with default configuration: legacy cycle detection, all
    /// outcomes collected.
    pub fn new(graph: &'g Graph<N, W>, subject: impl Into<String>) -> Self {
        Self {
            graph,
            cycle_detection: CycleDetection::default(),
            recorder: Recorder::new(subject),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &ShapecheckConfig) -> Self {
        self.cycle_detection = config.graph.cycle_detection;
        self.recorder.set_fail_fast(config.report.fail_fast);
        self
    }

    fn record(
        mut self,
        check: CheckKind,
        evaluate: impl FnOnce(&Graph<N, W>) -> (bool, Args),
    ) -> Self {
        if self.recorder.active() {
            let (passed, args) = evaluate(self.graph);
            self.recorder.record(check, passed, &args);
        }
        self
    }

    #[must_use]
    pub fn connected(self) -> Self {
        self.record(CheckKind::Connected, |g| (g.is_connected(), Vec::new()))
    }

    /// No cycle, under the configured cycle detection.
    #[must_use]
    pub fn acyclic(self) -> Self {
        let mode = self.cycle_detection;
        self.record(CheckKind::Acyclic, |g| {
            (!cyclic(g, mode), vec![("mode", mode.as_str().to_string())])
        })
    }

    /// At least one cycle, under the configured cycle detection.
    #[must_use]
    pub fn has_cycle(self) -> Self {
        let mode = self.cycle_detection;
        self.record(CheckKind::HasCycle, |g| {
            (cyclic(g, mode), vec![("mode", mode.as_str().to_string())])
        })
    }

    #[must_use]
    pub fn tree(self) -> Self {
        self.record(CheckKind::GraphTree, |g| (g.is_tree(), Vec::new()))
    }

    /// Degree-bound binary shape heuristic, see [`Graph::is_binary_tree`].
    #[must_use]
    pub fn binary_tree(self) -> Self {
        self.record(CheckKind::GraphBinary, |g| (g.is_binary_tree(), Vec::new()))
    }

    #[must_use]
    pub fn path(self, from: &N, to: &N) -> Self {
        self.record(CheckKind::Path, |g| {
            (g.has_path(from, to), endpoints(from, to))
        })
    }

    #[must_use]
    pub fn no_path(self, from: &N, to: &N) -> Self {
        self.record(CheckKind::NoPath, |g| {
            (!g.has_path(from, to), endpoints(from, to))
        })
    }

    #[must_use]
    pub fn node_count(self, expected: usize) -> Self {
        self.record(CheckKind::NodeCount, |g| count(g.count_nodes(), expected))
    }

    #[must_use]
    pub fn edge_count(self, expected: usize) -> Self {
        self.record(CheckKind::EdgeCount, |g| count(g.count_edges(), expected))
    }

    #[must_use]
    pub fn components(self, expected: usize) -> Self {
        self.record(CheckKind::Components, |g| {
            count(g.connected_components(), expected)
        })
    }

    #[must_use]
    pub fn contains_node(self, node: &N) -> Self {
        self.record(CheckKind::ContainsNode, |g| {
            (g.contains_node(node), vec![("node", format!("{node:?}"))])
        })
    }

    #[must_use]
    pub fn contains_edge(self, from: &N, to: &N) -> Self {
        self.record(CheckKind::ContainsEdge, |g| {
            (g.contains_edge(from, to), endpoints(from, to))
        })
    }

    /// Every node satisfies `predicate`; `description` completes the
    /// sentence "all nodes of <subject> ...".
    #[must_use]
    pub fn all_nodes(self, description: &str, predicate: impl FnMut(&N) -> bool) -> Self {
        let description = description.to_string();
        self.record(CheckKind::AllNodes, |g| {
            (g.all_nodes_match(predicate), vec![("description", description)])
        })
    }

    /// Some edge satisfies `predicate`.
    #[must_use]
    pub fn any_edge(self, description: &str, predicate: impl FnMut(&Edge<N, W>) -> bool) -> Self {
        let description = description.to_string();
        self.record(CheckKind::AnyEdge, |g| {
            (g.any_edges_match(predicate), vec![("description", description)])
        })
    }

    pub fn finish(self) -> Report {
        self.recorder.finish()
    }

    /// Finish and fail if any check failed.
    pub fn check(self) -> Result<Report, CheckFailed> {
        self.finish().into_result()
    }
}

fn cyclic<N: Eq + Hash + Clone, W>(graph: &Graph<N, W>, mode: CycleDetection) -> bool {
    match mode {
        CycleDetection::Legacy => graph.has_cycle(),
        CycleDetection::Simple => graph.has_simple_cycle(),
    }
}

fn endpoints<N: Debug>(from: &N, to: &N) -> Args {
    vec![("from", format!("{from:?}")), ("to", format!("{to:?}"))]
}
