//! Message table for check outcomes.
//!
//! Templates use `{name}` placeholders. `{subject}` is always available;
//! other names come from the arguments the checker records.

use crate::report::CheckKind;

/// (pass template, fail template) for a check kind.
fn templates(kind: CheckKind) -> (&'static str, &'static str) {
    match kind {
        CheckKind::Connected => ("{subject} is connected", "{subject} is not connected"),
        CheckKind::Acyclic => (
            "{subject} has no cycle ({mode})",
            "{subject} contains a cycle ({mode})",
        ),
        CheckKind::HasCycle => (
            "{subject} contains a cycle ({mode})",
            "{subject} has no cycle ({mode})",
        ),
        CheckKind::GraphTree => ("{subject} is a tree", "{subject} is not a tree"),
        CheckKind::GraphBinary => (
            "{subject} has a binary tree shape",
            "{subject} does not have a binary tree shape",
        ),
        CheckKind::Path => (
            "{subject} has a path from {from} to {to}",
            "{subject} has no path from {from} to {to}",
        ),
        CheckKind::NoPath => (
            "{subject} has no path from {from} to {to}",
            "{subject} has an unexpected path from {from} to {to}",
        ),
        CheckKind::NodeCount => (
            "{subject} has {expected} nodes",
            "{subject} has {actual} nodes, expected {expected}",
        ),
        CheckKind::EdgeCount => (
            "{subject} has {expected} edges",
            "{subject} has {actual} edges, expected {expected}",
        ),
        CheckKind::Components => (
            "{subject} has {expected} connected components",
            "{subject} has {actual} connected components, expected {expected}",
        ),
        CheckKind::ContainsNode => (
            "{subject} contains node {node}",
            "{subject} does not contain node {node}",
        ),
        CheckKind::ContainsEdge => (
            "{subject} contains edge {from} -> {to}",
            "{subject} does not contain edge {from} -> {to}",
        ),
        CheckKind::AllNodes => (
            "all nodes of {subject} {description}",
            "not all nodes of {subject} {description}",
        ),
        CheckKind::AnyEdge => (
            "some edge of {subject} {description}",
            "no edge of {subject} {description}",
        ),
        CheckKind::TreeBinary => (
            "{subject} is a binary tree ({mode})",
            "{subject} is not a binary tree ({mode})",
        ),
        CheckKind::Symmetric => ("{subject} is symmetric", "{subject} is not symmetric"),
        CheckKind::Full => (
            "{subject} is a full tree",
            "{subject} is not a full tree",
        ),
        CheckKind::Depth => (
            "{subject} has depth {expected}",
            "{subject} has depth {actual}, expected {expected}",
        ),
        CheckKind::MaxDepth => (
            "{subject} depth {actual} is within {limit}",
            "{subject} depth {actual} exceeds {limit}",
        ),
        CheckKind::Leaves => (
            "{subject} has {expected} leaves",
            "{subject} has {actual} leaves, expected {expected}",
        ),
        CheckKind::Diameter => (
            "{subject} has diameter {expected}",
            "{subject} has diameter {actual}, expected {expected}",
        ),
        CheckKind::MaxDegree => (
            "{subject} has maximum degree {expected}",
            "{subject} has maximum degree {actual}, expected {expected}",
        ),
        CheckKind::ContainsValue => (
            "{subject} contains {value}",
            "{subject} does not contain {value}",
        ),
        CheckKind::NonEmpty => ("{subject} is not empty", "{subject} is empty"),
    }
}

/// Render the message for an outcome. Unknown placeholders are left as-is.
pub fn render(kind: CheckKind, passed: bool, subject: &str, args: &[(&str, String)]) -> String {
    let (pass, fail) = templates(kind);
    let template = if passed { pass } else { fail };
    let mut message = template.replace("{subject}", subject);
    for (name, value) in args {
        message = message.replace(&format!("{{{name}}}"), value);
    }
    message
}
