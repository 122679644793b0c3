//! Rooted trees of owned nodes and their shape metrics.
//!
//! All queries walk the node structure with explicit stacks, so a tree that
//! degenerates into a long chain is safe to query.

use crate::error::TreeError;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A value plus the ordered children it exclusively owns.
///
/// `Clone`, `PartialEq` and `Debug` run with explicit stacks, so deep chains
/// can be copied, compared and printed.
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn with_children(value: T, children: Vec<TreeNode<T>>) -> Self {
        Self { value, children }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Unlinks descendants iteratively so dropping a deep chain stays off the
// call stack.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        // (source, clones of its children built so far)
        let mut current: (&TreeNode<T>, Vec<TreeNode<T>>) =
            (self, Vec::with_capacity(self.children.len()));
        let mut parents = Vec::new();
        loop {
            let source = current.0;
            if let Some(child) = source.children.get(current.1.len()) {
                let frame = (child, Vec::with_capacity(child.children.len()));
                parents.push(std::mem::replace(&mut current, frame));
                continue;
            }
            let (source, children) = current;
            let node = TreeNode {
                value: source.value.clone(),
                children,
            };
            match parents.pop() {
                Some(mut parent) => {
                    parent.1.push(node);
                    current = parent;
                }
                None => return node,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value || a.children.len() != b.children.len() {
                return false;
            }
            stack.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a, T> {
            Open(&'a TreeNode<T>),
            Separator,
            Close,
        }

        let mut stack = vec![Step::Open(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node) => {
                    write!(f, "TreeNode {{ value: {:?}, children: [", node.value)?;
                    stack.push(Step::Close);
                    for (i, child) in node.children.iter().enumerate().rev() {
                        stack.push(Step::Open(child));
                        if i > 0 {
                            stack.push(Step::Separator);
                        }
                    }
                }
                Step::Separator => f.write_str(", ")?,
                Step::Close => f.write_str("] }")?,
            }
        }
        Ok(())
    }
}

/// Pre-order walk over borrowed nodes.
struct Preorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A rooted tree, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    root: Option<TreeNode<T>>,
    /// Binary shape as declared by the construction input.
    declared_binary: bool,
}

impl<T> Tree<T> {
    pub fn empty() -> Self {
        Self {
            root: None,
            declared_binary: true,
        }
    }

    /// A tree holding a single node.
    pub fn new(value: T) -> Self {
        Self {
            root: Some(TreeNode::leaf(value)),
            declared_binary: true,
        }
    }

    /// Wrap an already assembled node structure. The declared binary shape
    /// is taken from the structure itself.
    pub fn from_root(root: TreeNode<T>) -> Self {
        let mut tree = Self {
            root: Some(root),
            declared_binary: true,
        };
        tree.declared_binary = tree.is_structurally_binary();
        tree
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: self.root.iter().collect(),
        }
    }

    /// Node values in pre-order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.preorder().map(TreeNode::value)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Binary shape as declared at construction.
    ///
    /// For trees built with [`from_mapping`](Self::from_mapping) this comes
    /// from the mapping, including entries the root never reaches, not from
    /// the assembled nodes. See
    /// [`is_structurally_binary`](Self::is_structurally_binary) for the
    /// shape of the nodes actually present.
    pub fn is_binary_tree(&self) -> bool {
        self.declared_binary
    }

    /// No assembled node has more than two children.
    pub fn is_structurally_binary(&self) -> bool {
        self.max_degree() <= 2
    }

    /// Every internal node has exactly two children.
    pub fn is_full(&self) -> bool {
        self.preorder()
            .all(|n| n.is_leaf() || n.children.len() == 2)
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TreeNode<T>, usize)> = self.root.iter().map(|r| (r, 1)).collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|c| (c, level + 1)));
        }
        deepest
    }

    pub fn count_leaves(&self) -> usize {
        self.preorder().filter(|n| n.is_leaf()).count()
    }

    pub fn count_nodes(&self) -> usize {
        self.preorder().count()
    }

    /// Largest child count of any node. Zero when empty.
    pub fn max_degree(&self) -> usize {
        self.preorder().map(|n| n.children.len()).max().unwrap_or(0)
    }

    /// Number of edges on the longest path between any two nodes.
    ///
    /// Tracks the two tallest child subtrees of every node; the longest path
    /// through a node joins them.
    pub fn diameter(&self) -> usize {
        // Pre-order with parent positions; children always follow parents,
        // so a reverse sweep sees every child before its parent.
        let mut order: Vec<(&TreeNode<T>, Option<usize>)> = Vec::new();
        let mut stack: Vec<(&TreeNode<T>, Option<usize>)> =
            self.root.iter().map(|r| (r, None)).collect();
        while let Some((node, parent)) = stack.pop() {
            let position = order.len();
            order.push((node, parent));
            stack.extend(node.children.iter().map(|c| (c, Some(position))));
        }

        // (tallest, second tallest) child height per node
        let mut tallest = vec![(0usize, 0usize); order.len()];
        let mut diameter = 0;
        for (position, &(_, parent)) in order.iter().enumerate().rev() {
            let (max1, max2) = tallest[position];
            diameter = diameter.max(max1 + max2);
            let height = max1 + 1;
            if let Some(p) = parent {
                let slot = &mut tallest[p];
                if height > slot.0 {
                    *slot = (height, slot.0);
                } else if height > slot.1 {
                    slot.1 = height;
                }
            }
        }
        diameter
    }

    pub fn any_values_match(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.values().any(predicate)
    }

    pub fn all_values_match(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.values().all(predicate)
    }
}

impl<T: PartialEq> Tree<T> {
    /// Whether the tree is its own mirror image: the i-th child on one side
    /// matches the (n-1-i)-th child on the other, with equal values and
    /// child counts at every compared pair.
    pub fn is_symmetric(&self) -> bool {
        let Some(root) = &self.root else {
            return true;
        };
        let mut pairs = vec![(root, root)];
        while let Some((left, right)) = pairs.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            pairs.extend(left.children.iter().zip(right.children.iter().rev()));
        }
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values().any(|v| v == value)
    }
}

impl<T> Tree<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Assemble the nodes reachable from `root` through a parent -> children
    /// mapping.
    ///
    /// The declared binary shape is true iff every mapping entry lists at
    /// most two children, whether or not `root` reaches it. A value that
    /// reappears below itself, or is listed under two parents, is rejected.
    pub fn from_mapping(root: T, mapping: &HashMap<T, Vec<T>>) -> Result<Self, TreeError> {
        let declared_binary = mapping.values().all(|children| children.len() <= 2);

        // Post-order of reachable values, with cycle and sharing guards.
        let mut post_order: Vec<&T> = Vec::new();
        let mut seen: HashSet<&T> = HashSet::from([&root]);
        let mut on_path: HashSet<&T> = HashSet::from([&root]);
        let mut stack: Vec<(&T, usize)> = vec![(&root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (value, next) = *frame;
            let children: &[T] = mapping.get(value).map(Vec::as_slice).unwrap_or_default();
            if let Some(child) = children.get(next) {
                frame.1 += 1;
                if on_path.contains(child) {
                    tracing::debug!(value = ?child, "cyclic tree mapping");
                    return Err(TreeError::CyclicMapping {
                        value: format!("{child:?}"),
                    });
                }
                if !seen.insert(child) {
                    return Err(TreeError::SharedChild {
                        value: format!("{child:?}"),
                    });
                }
                on_path.insert(child);
                stack.push((child, 0));
            } else {
                on_path.remove(value);
                post_order.push(value);
                stack.pop();
            }
        }

        // Children are complete before their parent in post-order.
        let mut built: HashMap<&T, TreeNode<T>> = HashMap::with_capacity(post_order.len());
        for value in post_order {
            let children = mapping
                .get(value)
                .map(|cs| cs.iter().filter_map(|c| built.remove(c)).collect())
                .unwrap_or_default();
            built.insert(value, TreeNode::with_children(value.clone(), children));
        }

        tracing::debug!(nodes = seen.len(), declared_binary, "built tree from mapping");
        Ok(Self {
            root: built.remove(&root),
            declared_binary,
        })
    }
}
