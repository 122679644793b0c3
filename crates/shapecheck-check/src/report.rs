//! Check outcomes, reports, and the recorder shared by all checkers.

use crate::messages;
use serde::Serialize;

/// The kind of check an outcome belongs to. Keys the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Connected,
    Acyclic,
    HasCycle,
    GraphTree,
    GraphBinary,
    Path,
    NoPath,
    NodeCount,
    EdgeCount,
    Components,
    ContainsNode,
    ContainsEdge,
    AllNodes,
    AnyEdge,
    TreeBinary,
    Symmetric,
    Full,
    Depth,
    MaxDepth,
    Leaves,
    Diameter,
    MaxDegree,
    ContainsValue,
    NonEmpty,
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub check: CheckKind,
    pub passed: bool,
    pub message: String,
}

/// All outcomes recorded against one subject, in call order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub subject: String,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// `Ok(self)` when every check passed, otherwise the failures.
    pub fn into_result(self) -> Result<Report, CheckFailed> {
        if self.passed() {
            return Ok(self);
        }
        let total = self.outcomes.len();
        let failures: Vec<Outcome> = self.outcomes.into_iter().filter(|o| !o.passed).collect();
        Err(CheckFailed {
            subject: self.subject,
            total,
            failures,
        })
    }
}

/// One or more checks failed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{subject}: {} of {total} checks failed: {}", .failures.len(), failure_list(.failures))]
pub struct CheckFailed {
    pub subject: String,
    pub total: usize,
    pub failures: Vec<Outcome>,
}

fn failure_list(failures: &[Outcome]) -> String {
    failures
        .iter()
        .map(|o| o.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Placeholder values for a message template.
pub(crate) type Args = Vec<(&'static str, String)>;

/// Outcome of comparing a measured count against the expected one.
pub(crate) fn count(actual: usize, expected: usize) -> (bool, Args) {
    (
        actual == expected,
        vec![
            ("expected", expected.to_string()),
            ("actual", actual.to_string()),
        ],
    )
}

/// Accumulates outcomes for a checker. In fail-fast mode, checks after the
/// first failure are skipped.
#[derive(Debug, Clone)]
pub(crate) struct Recorder {
    subject: String,
    outcomes: Vec<Outcome>,
    fail_fast: bool,
}

impl Recorder {
    pub(crate) fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            outcomes: Vec::new(),
            fail_fast: false,
        }
    }

    pub(crate) fn set_fail_fast(&mut self, fail_fast: bool) {
        self.fail_fast = fail_fast;
    }

    /// Whether further checks should be evaluated.
    pub(crate) fn active(&self) -> bool {
        !(self.fail_fast && self.outcomes.iter().any(|o| !o.passed))
    }

    pub(crate) fn record(&mut self, check: CheckKind, passed: bool, args: &[(&str, String)]) {
        let message = messages::render(check, passed, &self.subject, args);
        if !passed {
            tracing::debug!(subject = %self.subject, ?check, %message, "check failed");
        }
        self.outcomes.push(Outcome {
            check,
            passed,
            message,
        });
    }

    pub(crate) fn finish(self) -> Report {
        Report {
            subject: self.subject,
            outcomes: self.outcomes,
        }
    }
}
