//! Fluent checkers for shapecheck structures.
//!
//! A checker wraps a built [`Graph`](shapecheck_core::Graph) or
//! [`Tree`](shapecheck_core::Tree), evaluates one query per call, and records
//! a pass/fail [`Outcome`](report::Outcome) with a rendered message. Finish
//! with `finish()` for the full [`Report`](report::Report) or `check()` to
//! turn any failure into an error.

pub mod graph;
pub mod messages;
pub mod report;
pub mod tree;

pub use graph::GraphChecker;
pub use report::{CheckFailed, CheckKind, Outcome, Report};
pub use tree::TreeChecker;
