//! Canonical sibling ordering
//!
//! Directories sort before files; within each group names compare
//! lexicographically. Every branch handed to the merge engine must list its
//! children in this order with no repeated (variant, name) pair.

use crate::tree::node::Node;
use std::cmp::Ordering;

/// Total order over siblings. Used only to order, never as equality.
pub fn canonical_cmp(a: &Node, b: &Node) -> Ordering {
    match (a, b) {
        (Node::Branch(_), Node::Leaf(_)) => Ordering::Less,
        (Node::Leaf(_), Node::Branch(_)) => Ordering::Greater,
        _ => a.name().cmp(b.name()),
    }
}

impl Node {
    pub fn canonical_cmp(&self, other: &Node) -> Ordering {
        canonical_cmp(self, other)
    }
}

/// Sort children into canonical order and drop repeated identities, keeping
/// the first occurrence. Tree builders call this; the merge path never does.
pub fn canonicalize(children: &mut Vec<Node>) {
    children.sort_by(canonical_cmp);
    children.dedup_by(|later, earlier| later.shares_identity(earlier));
}

/// True when `children` is strictly increasing under [`canonical_cmp`].
pub fn is_canonical(children: &[Node]) -> bool {
    children
        .windows(2)
        .all(|pair| canonical_cmp(&pair[0], &pair[1]) == Ordering::Less)
}
