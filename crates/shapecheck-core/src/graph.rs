//! Adjacency-based graph over unique node values.
//!
//! A [`Graph`] is built once from a node collection and an edge collection and
//! is read-only afterwards. Nodes are interned into dense indices in insertion
//! order; every traversal runs over those indices with an explicit stack, so
//! deep or long graphs cannot exhaust the call stack.

use crate::edge::Edge;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::RangeInclusive;

/// One entry in a node's adjacency list.
#[derive(Debug, Clone, Copy)]
struct Adjacent {
    target: usize,
    /// Index into `Graph::edges`. Undirected graphs store the same id in both
    /// endpoint lists.
    edge: usize,
}

/// Traversal state for cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// A directed or undirected graph: G = (V, E) with adjacency lists per node.
#[derive(Debug, Clone)]
pub struct Graph<N, W = f64> {
    /// V, in insertion order.
    nodes: Vec<N>,
    /// Node value -> position in `nodes`.
    index: HashMap<N, usize>,
    /// E, exactly as supplied at construction.
    edges: Vec<Edge<N, W>>,
    /// Per-node adjacency entries, parallel to `nodes`.
    adjacency: Vec<Vec<Adjacent>>,
    directed: bool,
}

/// Aggregate counts and structural flags for a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub directed: bool,
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub connected: bool,
    pub has_cycle: bool,
    pub has_simple_cycle: bool,
    pub is_tree: bool,
}

impl<N, W> Graph<N, W>
where
    N: Eq + Hash + Clone,
{
    /// Build a graph from a node collection and an edge collection.
    ///
    /// Nodes keep the order they are given in; duplicates collapse into one.
    /// Endpoints that do not appear in `nodes` are appended in edge order.
    /// For undirected graphs every edge is entered in both endpoints'
    /// adjacency lists.
    pub fn new(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N, W>>,
        directed: bool,
    ) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            directed,
        };
        for node in nodes {
            graph.intern(node);
        }
        for edge in edges {
            let from = graph.intern(edge.from().clone());
            let to = graph.intern(edge.to().clone());
            let id = graph.edges.len();
            graph.adjacency[from].push(Adjacent { target: to, edge: id });
            if !directed {
                graph.adjacency[to].push(Adjacent {
                    target: from,
                    edge: id,
                });
            }
            graph.edges.push(edge);
        }
        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            directed,
            "built graph"
        );
        graph
    }

    /// Build a graph whose node set is derived from the edge endpoints.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge<N, W>>, directed: bool) -> Self {
        Self::new(Vec::new(), edges, directed)
    }

    pub fn directed(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N, W>>,
    ) -> Self {
        Self::new(nodes, edges, true)
    }

    pub fn undirected(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N, W>>,
    ) -> Self {
        Self::new(nodes, edges, false)
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&i) = self.index.get(&node) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        i
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Distinct target endpoints of the edges leaving `node`. Parallel edges
    /// contribute their target once; a self-loop makes `node` its own
    /// neighbor. Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: &N) -> HashSet<&N> {
        self.index_of(node)
            .map(|i| self.distinct_targets(i).map(|t| &self.nodes[t]).collect())
            .unwrap_or_default()
    }

    /// Target endpoints of `node`'s adjacency entries, one per entry, so
    /// parallel edges repeat their target.
    pub fn adjacent_entries(&self, node: &N) -> Vec<&N> {
        self.index_of(node)
            .map(|i| {
                self.adjacency[i]
                    .iter()
                    .map(|a| &self.nodes[a.target])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn distinct_targets(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let mut seen = HashSet::new();
        self.adjacency[i]
            .iter()
            .map(|a| a.target)
            .filter(move |&t| seen.insert(t))
    }

    fn distinct_degree(&self, i: usize) -> usize {
        self.distinct_targets(i).count()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// All edges as supplied at construction. Undirected mirror entries are
    /// not repeated here.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, W>> {
        self.edges.iter()
    }

    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges. Directed graphs count adjacency entries; undirected
    /// graphs count them and halve, since each edge is stored at both ends.
    pub fn count_edges(&self) -> usize {
        let raw: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed { raw } else { raw / 2 }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct neighbors of `node` (out-neighbors when directed).
    /// Parallel edges count once.
    pub fn degree(&self, node: &N) -> usize {
        self.index_of(node).map_or(0, |i| self.distinct_degree(i))
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Whether an adjacency entry `from -> to` exists. Endpoints are matched
    /// by value, so a structurally equal copy of a node finds the same entry.
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.index_of(from).is_some_and(|i| {
            self.adjacency[i]
                .iter()
                .any(|a| self.nodes[a.target] == *to)
        })
    }

    /// Mark every node reachable from `start` along adjacency entries.
    fn mark_reachable(&self, start: usize, visited: &mut [bool]) {
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(current) = stack.pop() {
            for adj in &self.adjacency[current] {
                if !visited[adj.target] {
                    visited[adj.target] = true;
                    stack.push(adj.target);
                }
            }
        }
    }

    /// Whether one traversal from the first node reaches every node.
    ///
    /// Follows [`neighbors`](Self::neighbors), so for directed graphs this is
    /// reachability from the first inserted node. An empty graph is
    /// connected.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut visited = vec![false; self.nodes.len()];
        self.mark_reachable(0, &mut visited);
        visited.iter().all(|&v| v)
    }

    /// Whether a traversal ever reaches a node already on the current path.
    ///
    /// Every unvisited node is used as a start, in insertion order. The edge
    /// just walked is not excluded, so an undirected edge A–B is seen again
    /// as B -> A and reported as a cycle: any undirected graph with at least
    /// one edge has a cycle under this check. Use
    /// [`has_simple_cycle`](Self::has_simple_cycle) for the parent-aware
    /// undirected variant.
    pub fn has_cycle(&self) -> bool {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        // (node, next adjacency position)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..self.nodes.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            marks[start] = Mark::OnPath;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                if let Some(adj) = self.adjacency[node].get(next) {
                    frame.1 += 1;
                    match marks[adj.target] {
                        Mark::OnPath => return true,
                        Mark::Unvisited => {
                            marks[adj.target] = Mark::OnPath;
                            stack.push((adj.target, 0));
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }
        false
    }

    /// Cycle check that does not walk back along the edge it arrived by.
    ///
    /// Identical to [`has_cycle`](Self::has_cycle) for directed graphs. For
    /// undirected graphs only the arriving edge is excluded, so self-loops
    /// and parallel edges still count as cycles.
    pub fn has_simple_cycle(&self) -> bool {
        if self.directed {
            return self.has_cycle();
        }
        let mut visited = vec![false; self.nodes.len()];
        // (node, edge id we arrived by, next adjacency position)
        let mut stack: Vec<(usize, Option<usize>, usize)> = Vec::new();

        for start in 0..self.nodes.len() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            stack.push((start, None, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, via, next) = *frame;
                let Some(adj) = self.adjacency[node].get(next) else {
                    stack.pop();
                    continue;
                };
                frame.2 += 1;
                if via == Some(adj.edge) {
                    continue;
                }
                if visited[adj.target] {
                    return true;
                }
                visited[adj.target] = true;
                stack.push((adj.target, Some(adj.edge), 0));
            }
        }
        false
    }

    /// Whether `end` is reachable from `start`. Unknown endpoints yield
    /// false; a known node always reaches itself.
    pub fn has_path(&self, start: &N, end: &N) -> bool {
        let (Some(start), Some(end)) = (self.index_of(start), self.index_of(end)) else {
            return false;
        };
        if start == end {
            return true;
        }
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(current) = stack.pop() {
            for adj in &self.adjacency[current] {
                if adj.target == end {
                    return true;
                }
                if !visited[adj.target] {
                    visited[adj.target] = true;
                    stack.push(adj.target);
                }
            }
        }
        false
    }

    /// Number of traversal islands: a new island starts at every node (in
    /// insertion order) not reached by an earlier one. Zero for an empty
    /// graph.
    pub fn connected_components(&self) -> usize {
        let mut visited = vec![false; self.nodes.len()];
        let mut components = 0;
        for start in 0..self.nodes.len() {
            if !visited[start] {
                self.mark_reachable(start, &mut visited);
                components += 1;
            }
        }
        components
    }

    /// Undirected, connected and acyclic according to
    /// [`has_cycle`](Self::has_cycle).
    pub fn is_tree(&self) -> bool {
        !self.directed && self.is_connected() && !self.has_cycle()
    }

    /// Degree-bound approximation of "is a binary tree".
    ///
    /// Degree is [`degree`](Self::degree), the distinct neighbor count.
    /// Returns false whenever [`is_tree`](Self::is_tree) holds. Otherwise the
    /// first node with degree <= 2 is taken as the root candidate, and the
    /// graph is accepted when every other node has degree <= 3. This is not a
    /// proof that a rooted binary tree exists.
    pub fn is_binary_tree(&self) -> bool {
        if self.is_tree() {
            return false;
        }
        let Some(root) = (0..self.nodes.len()).find(|&i| self.distinct_degree(i) <= 2) else {
            return false;
        };
        (0..self.nodes.len())
            .filter(|&i| i != root)
            .all(|i| self.distinct_degree(i) <= 3)
    }

    pub fn any_nodes_match(&self, predicate: impl FnMut(&N) -> bool) -> bool {
        self.nodes.iter().any(predicate)
    }

    pub fn all_nodes_match(&self, predicate: impl FnMut(&N) -> bool) -> bool {
        self.nodes.iter().all(predicate)
    }

    pub fn any_edges_match(&self, predicate: impl FnMut(&Edge<N, W>) -> bool) -> bool {
        self.edges.iter().any(predicate)
    }

    pub fn all_edges_match(&self, predicate: impl FnMut(&Edge<N, W>) -> bool) -> bool {
        self.edges.iter().all(predicate)
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            directed: self.directed,
            nodes: self.count_nodes(),
            edges: self.count_edges(),
            components: self.connected_components(),
            connected: self.is_connected(),
            has_cycle: self.has_cycle(),
            has_simple_cycle: self.has_simple_cycle(),
            is_tree: self.is_tree(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy + Default + PartialOrd,
{
    /// Edges whose weight lies in `range` (inclusive). Unweighted edges
    /// count as weight zero.
    pub fn edges_with_weight_in(&self, range: RangeInclusive<W>) -> Vec<&Edge<N, W>> {
        self.edges
            .iter()
            .filter(|e| range.contains(&e.weight_or_default()))
            .collect()
    }

    pub fn count_edges_with_weight_in(&self, range: RangeInclusive<W>) -> usize {
        self.edges_with_weight_in(range).len()
    }
}
