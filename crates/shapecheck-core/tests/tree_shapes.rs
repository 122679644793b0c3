use shapecheck_core::tree::{Tree, TreeNode};
use std::collections::HashMap;

fn leaf(v: &'static str) -> TreeNode<&'static str> {
    TreeNode::leaf(v)
}

fn branch(v: &'static str, children: Vec<TreeNode<&'static str>>) -> TreeNode<&'static str> {
    TreeNode::with_children(v, children)
}

#[test]
fn test_single_node_tree() {
    let t = Tree::new("root");
    assert!(!t.is_empty());
    assert_eq!(t.depth(), 1);
    assert_eq!(t.count_leaves(), 1);
    assert_eq!(t.diameter(), 0);
    assert_eq!(t.max_degree(), 0);
    assert!(t.is_full());
    assert!(t.is_symmetric());
    assert!(t.is_binary_tree());
}

#[test]
fn test_mapping_with_two_children() {
    let mapping = HashMap::from([(1, vec![2, 3])]);
    let t = Tree::from_mapping(1, &mapping).unwrap();
    assert_eq!(t.depth(), 2);
    assert_eq!(t.count_leaves(), 2);
    assert_eq!(t.diameter(), 2);
    assert!(t.is_binary_tree());
    assert!(t.is_full());
    assert_eq!(t.count_nodes(), 3);
    assert_eq!(t.root().map(|r| *r.value()), Some(1));
}

#[test]
fn test_mapping_preserves_child_order() {
    let mapping = HashMap::from([("a", vec!["c", "b"]), ("b", vec!["d"])]);
    let t = Tree::from_mapping("a", &mapping).unwrap();
    let root = t.root().unwrap();
    let children: Vec<_> = root.children().iter().map(|c| *c.value()).collect();
    assert_eq!(children, vec!["c", "b"]);
    let values: Vec<_> = t.values().copied().collect();
    assert_eq!(values, vec!["a", "c", "b", "d"]);
}

#[test]
fn test_declared_shape_counts_unreachable_entries() {
    // 10 is never reached from the root but still makes the mapping
    // non-binary.
    let mapping = HashMap::from([(1, vec![2]), (10, vec![11, 12, 13])]);
    let t = Tree::from_mapping(1, &mapping).unwrap();
    assert!(!t.is_binary_tree());
    assert!(t.is_structurally_binary());
    assert_eq!(t.count_nodes(), 2);
    assert!(!t.contains(&11));
}

#[test]
fn test_declared_and_structural_agree_when_reachable() {
    let mapping = HashMap::from([(1, vec![2, 3, 4]), (5, vec![6])]);
    let t = Tree::from_mapping(1, &mapping).unwrap();
    assert!(!t.is_binary_tree());
    assert!(!t.is_structurally_binary());
    assert_eq!(t.max_degree(), 3);
}

#[test]
fn test_root_missing_from_mapping_is_single_node() {
    let mapping: HashMap<u8, Vec<u8>> = HashMap::from([(7, vec![8])]);
    let t = Tree::from_mapping(1, &mapping).unwrap();
    assert_eq!(t.count_nodes(), 1);
    assert_eq!(t.depth(), 1);
}

#[test]
fn test_full_requires_exactly_two_children() {
    let full = Tree::from_root(branch(
        "r",
        vec![branch("a", vec![leaf("c"), leaf("d")]), leaf("b")],
    ));
    assert!(full.is_full());

    let unary = Tree::from_root(branch("r", vec![leaf("a")]));
    assert!(!unary.is_full());

    let ternary = Tree::from_root(branch("r", vec![leaf("a"), leaf("b"), leaf("c")]));
    assert!(!ternary.is_full());
    assert!(!ternary.is_binary_tree());
}

#[test]
fn test_symmetry() {
    let mirror = Tree::from_root(branch(
        "r",
        vec![
            branch("x", vec![leaf("p"), leaf("q")]),
            leaf("m"),
            branch("x", vec![leaf("q"), leaf("p")]),
        ],
    ));
    assert!(mirror.is_symmetric());

    let lopsided = Tree::from_root(branch(
        "r",
        vec![branch("x", vec![leaf("p")]), branch("x", vec![])],
    ));
    assert!(!lopsided.is_symmetric());

    let odd_middle = Tree::from_root(branch("r", vec![leaf("a"), leaf("m"), leaf("b")]));
    assert!(!odd_middle.is_symmetric());
}

#[test]
fn test_counts_on_wide_tree() {
    let t = Tree::from_root(branch(
        "r",
        vec![
            branch("a", vec![leaf("a1"), leaf("a2"), leaf("a3"), leaf("a4")]),
            leaf("b"),
            branch("c", vec![branch("c1", vec![leaf("c11")])]),
        ],
    ));
    assert_eq!(t.count_leaves(), 6);
    assert_eq!(t.max_degree(), 4);
    assert_eq!(t.depth(), 4);
    // a1 -> a -> r -> c -> c1 -> c11
    assert_eq!(t.diameter(), 5);
    assert!(t.any_values_match(|v| v.starts_with("c1")));
    assert!(t.all_values_match(|v| !v.is_empty()));
}

#[test]
fn test_deep_chain_clone_and_compare() {
    let mapping: HashMap<u32, Vec<u32>> = (0..100_000).map(|i| (i, vec![i + 1])).collect();
    let t = Tree::from_mapping(0, &mapping).unwrap();
    let c = t.clone();
    assert_eq!(c, t);
    assert_eq!(c.depth(), 100_001);

    let shorter = Tree::from_mapping(1, &mapping).unwrap();
    assert_ne!(shorter, t);
    assert!(!format!("{t:?}").is_empty());
}

#[test]
fn test_clone_and_equality_follow_structure() {
    let t = Tree::from_root(branch("r", vec![branch("a", vec![leaf("a1")]), leaf("b")]));
    let c = t.clone();
    assert_eq!(c, t);
    assert_eq!(c.values().collect::<Vec<_>>(), vec![&"r", &"a", &"a1", &"b"]);

    let reordered = Tree::from_root(branch("r", vec![leaf("b"), branch("a", vec![leaf("a1")])]));
    assert_ne!(reordered, t);
    let pruned = Tree::from_root(branch("r", vec![leaf("a"), leaf("b")]));
    assert_ne!(pruned, t);
}
