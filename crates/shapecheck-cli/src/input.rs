//! JSON input documents describing a graph or a tree to build.
//!
//! Graph: `{ "directed": bool, "nodes": [..], "edges": [{ "from", "to", "weight"?, "properties"? }] }`
//! Tree: `{ "root": "..", "children": { "parent": ["child", ..] } }`

use anyhow::{Context, Result};
use serde::Deserialize;
use shapecheck_core::edge::{Edge, PropertyMap};
use shapecheck_core::graph::Graph;
use shapecheck_core::tree::Tree;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub properties: PropertyMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeDocument {
    pub root: String,
    #[serde(default)]
    pub children: HashMap<String, Vec<String>>,
}

/// Either document shape. A `root` key marks a tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Tree(TreeDocument),
    Graph(GraphDocument),
}

impl GraphDocument {
    pub fn into_graph(self) -> Graph<String> {
        let edges = self.edges.into_iter().map(|e| {
            let edge = match e.weight {
                Some(w) => Edge::weighted(e.from, e.to, w),
                None => Edge::new(e.from, e.to),
            };
            edge.with_properties(e.properties)
        });
        Graph::new(self.nodes, edges, self.directed)
    }
}

impl TreeDocument {
    pub fn into_tree(self) -> Result<Tree<String>> {
        let tree = Tree::from_mapping(self.root, &self.children)?;
        Ok(tree)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_document(path: &Path) -> Result<Document> {
    let json = read(path)?;
    serde_json::from_str(&json)
        .with_context(|| format!("{} is neither a graph nor a tree document", path.display()))
}

pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    let json = read(path)?;
    let doc: GraphDocument = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse graph document {}", path.display()))?;
    Ok(doc.into_graph())
}

pub fn load_tree(path: &Path) -> Result<Tree<String>> {
    let json = read(path)?;
    let doc: TreeDocument = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse tree document {}", path.display()))?;
    doc.into_tree().map_err(|err| {
        tracing::warn!(file = %path.display(), error = %err, "rejected tree mapping");
        err.context(format!("invalid tree mapping in {}", path.display()))
    })
}

/// Parse a `FROM:TO` pair.
pub fn parse_endpoints(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM:TO, got {s:?}")),
    }
}
