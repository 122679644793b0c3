//! Fluent checks over a [`Tree`].

use crate::report::{Args, CheckFailed, CheckKind, Recorder, Report, count};
use shapecheck_core::config::{BinaryShape, ShapecheckConfig};
use shapecheck_core::tree::Tree;
use std::fmt::Debug;

/// Records one outcome per call against a borrowed tree.
pub struct TreeChecker<'t, T> {
    tree: &'t Tree<T>,
    binary_shape: BinaryShape,
    depth_limit: Option<usize>,
    recorder: Recorder,
}

impl<'t, T> TreeChecker<'t, T>
where
    T: PartialEq + Debug,
{
    pub fn new(tree: &'t Tree<T>, subject: impl Into<String>) -> Self {
        Self {
            tree,
            binary_shape: BinaryShape::default(),
            depth_limit: None,
            recorder: Recorder::new(subject),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &ShapecheckConfig) -> Self {
        self.binary_shape = config.tree.binary_shape;
        self.depth_limit = config.tree.max_depth;
        self.recorder.set_fail_fast(config.report.fail_fast);
        self
    }

    fn record(
        mut self,
        check: CheckKind,
        evaluate: impl FnOnce(&Tree<T>) -> (bool, Args),
    ) -> Self {
        if self.recorder.active() {
            let (passed, args) = evaluate(self.tree);
            self.recorder.record(check, passed, &args);
        }
        self
    }

    /// Binary shape, declared or structural per configuration.
    #[must_use]
    pub fn binary(self) -> Self {
        let shape = self.binary_shape;
        self.record(CheckKind::TreeBinary, |t| {
            let binary = match shape {
                BinaryShape::Declared => t.is_binary_tree(),
                BinaryShape::Structural => t.is_structurally_binary(),
            };
            (binary, vec![("mode", shape.as_str().to_string())])
        })
    }

    #[must_use]
    pub fn symmetric(self) -> Self {
        self.record(CheckKind::Symmetric, |t| (t.is_symmetric(), Vec::new()))
    }

    #[must_use]
    pub fn full(self) -> Self {
        self.record(CheckKind::Full, |t| (t.is_full(), Vec::new()))
    }

    #[must_use]
    pub fn non_empty(self) -> Self {
        self.record(CheckKind::NonEmpty, |t| (!t.is_empty(), Vec::new()))
    }

    #[must_use]
    pub fn depth(self, expected: usize) -> Self {
        self.record(CheckKind::Depth, |t| count(t.depth(), expected))
    }

    #[must_use]
    pub fn max_depth(self, limit: usize) -> Self {
        self.record(CheckKind::MaxDepth, |t| {
            let depth = t.depth();
            (
                depth <= limit,
                vec![("actual", depth.to_string()), ("limit", limit.to_string())],
            )
        })
    }

    /// Depth against the configured `tree.max_depth`. Records nothing when
    /// no limit is configured.
    #[must_use]
    pub fn within_configured_depth(self) -> Self {
        match self.depth_limit {
            Some(limit) => self.max_depth(limit),
            None => self,
        }
    }

    #[must_use]
    pub fn leaves(self, expected: usize) -> Self {
        self.record(CheckKind::Leaves, |t| count(t.count_leaves(), expected))
    }

    #[must_use]
    pub fn diameter(self, expected: usize) -> Self {
        self.record(CheckKind::Diameter, |t| count(t.diameter(), expected))
    }

    #[must_use]
    pub fn max_degree(self, expected: usize) -> Self {
        self.record(CheckKind::MaxDegree, |t| count(t.max_degree(), expected))
    }

    #[must_use]
    pub fn contains(self, value: &T) -> Self {
        self.record(CheckKind::ContainsValue, |t| {
            (t.contains(value), vec![("value", format!("{value:?}"))])
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
