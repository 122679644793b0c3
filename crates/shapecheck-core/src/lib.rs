//! Core structural types for shapecheck: a generic [`graph::Graph`] with
//! connectivity, cycle and path queries, and a rooted [`tree::Tree`] with
//! shape metrics (depth, leaves, diameter, symmetry, fullness).
//!
//! Both structures are built once and only queried afterwards.

pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod tree;

pub use edge::{Edge, PropertyMap, PropertyValue};
pub use error::TreeError;
pub use graph::{Graph, GraphSummary};
pub use tree::{Tree, TreeNode};
