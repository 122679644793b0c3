use criterion::{Criterion, criterion_group, criterion_main};
use shapecheck_core::edge::Edge;
use shapecheck_core::graph::Graph;
use shapecheck_core::tree::Tree;
use std::collections::HashMap;
use std::hint::black_box;

/// Square grid of `side * side` nodes, each linked right and down.
fn build_grid(side: usize, directed: bool) -> Graph<usize> {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                edges.push(Edge::new(id, id + 1));
            }
            if row + 1 < side {
                edges.push(Edge::new(id, id + side));
            }
        }
    }
    Graph::new(0..side * side, edges, directed)
}

/// Complete binary tree mapping with `count` nodes.
fn build_tree_mapping(count: usize) -> HashMap<usize, Vec<usize>> {
    let mut mapping = HashMap::new();
    for parent in 0..count {
        let children: Vec<usize> = [2 * parent + 1, 2 * parent + 2]
            .into_iter()
            .filter(|&c| c < count)
            .collect();
        if !children.is_empty() {
            mapping.insert(parent, children);
        }
    }
    mapping
}

fn bench_graph_queries(c: &mut Criterion) {
    let directed = build_grid(100, true);
    let undirected = build_grid(100, false);

    c.bench_function("grid_100x100_is_connected", |b| {
        b.iter(|| black_box(&undirected).is_connected());
    });
    c.bench_function("grid_100x100_components", |b| {
        b.iter(|| black_box(&directed).connected_components());
    });
    c.bench_function("grid_100x100_has_cycle_directed", |b| {
        b.iter(|| black_box(&directed).has_cycle());
    });
    c.bench_function("grid_100x100_has_simple_cycle_undirected", |b| {
        b.iter(|| black_box(&undirected).has_simple_cycle());
    });
    c.bench_function("grid_100x100_has_path_corner_to_corner", |b| {
        b.iter(|| black_box(&directed).has_path(&0, &9_999));
    });
}

fn bench_tree_queries(c: &mut Criterion) {
    let mapping = build_tree_mapping(10_000);

    c.bench_function("tree_10k_from_mapping", |b| {
        b.iter(|| Tree::from_mapping(0, black_box(&mapping)));
    });

    let tree = Tree::from_mapping(0, &mapping).expect("acyclic mapping");
    c.bench_function("tree_10k_diameter", |b| {
        b.iter(|| black_box(&tree).diameter());
    });
    c.bench_function("tree_10k_depth", |b| {
        b.iter(|| black_box(&tree).depth());
    });
    c.bench_function("tree_10k_is_symmetric", |b| {
        b.iter(|| black_box(&tree).is_symmetric());
    });
}

criterion_group!(benches, bench_graph_queries, bench_tree_queries);
criterion_main!(benches);
