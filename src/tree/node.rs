//! Tree node types: a closed two-variant model of files and directories

use crate::tree::state::ChangeState;
use serde::{Deserialize, Serialize};

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    name: String,
    #[serde(default)]
    state: ChangeState,
}

/// Directory node representation
///
/// Children are expected in canonical order (see [`crate::tree::order`]);
/// constructors do not re-sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    name: String,
    #[serde(default)]
    state: ChangeState,
    #[serde(default)]
    children: Vec<Node>,
}

/// Tree node: either a file (leaf) or a directory (branch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Leaf(Leaf),
    Branch(Branch),
}

impl Leaf {
    /// Create an unchanged leaf
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_state(name, ChangeState::Same)
    }

    pub fn with_state(name: impl Into<String>, state: ChangeState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ChangeState {
        self.state
    }

    pub fn copy_stamped(&self, state: ChangeState) -> Leaf {
        Leaf::with_state(self.name.clone(), state)
    }
}

impl Branch {
    /// Create an unchanged branch owning `children`
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_state(name, ChangeState::Same, children)
    }

    pub fn with_state(name: impl Into<String>, state: ChangeState, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            state,
            children,
        }
    }

    /// Create a branch with no children
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ChangeState {
        self.state
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a direct child by name and variant
    pub fn child(&self, name: &str, is_branch: bool) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.name() == name && c.is_branch() == is_branch)
    }

    /// Independent deep copy with `state` applied to every node in the subtree.
    pub fn copy_stamped(&self, state: ChangeState) -> Branch {
        Branch {
            name: self.name.clone(),
            state,
            children: self.children.iter().map(|c| c.copy_stamped(state)).collect(),
        }
    }

    /// Re-tag an owned subtree in place. Intended for building fixtures; merge
    /// results are always produced by [`Branch::copy_stamped`] instead.
    pub fn into_stamped(mut self, state: ChangeState) -> Branch {
        self.stamp(state);
        self
    }

    /// Replace only this branch's own state, leaving children untouched.
    pub fn with_own_state(mut self, state: ChangeState) -> Branch {
        self.state = state;
        self
    }

    fn stamp(&mut self, state: ChangeState) {
        self.state = state;
        for child in &mut self.children {
            match child {
                Node::Leaf(leaf) => leaf.state = state,
                Node::Branch(branch) => branch.stamp(state),
            }
        }
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.name(),
            Node::Branch(branch) => branch.name(),
        }
    }

    pub fn state(&self) -> ChangeState {
        match self {
            Node::Leaf(leaf) => leaf.state(),
            Node::Branch(branch) => branch.state(),
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Node::Branch(branch) => Some(branch),
            Node::Leaf(_) => None,
        }
    }

    /// Human-readable variant name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Leaf(_) => "file",
            Node::Branch(_) => "directory",
        }
    }

    /// Same name and same variant.
    pub fn shares_identity(&self, other: &Node) -> bool {
        self.is_branch() == other.is_branch() && self.name() == other.name()
    }

    pub fn copy_stamped(&self, state: ChangeState) -> Node {
        match self {
            Node::Leaf(leaf) => Node::Leaf(leaf.copy_stamped(state)),
            Node::Branch(branch) => Node::Branch(branch.copy_stamped(state)),
        }
    }

    pub fn into_stamped(self, state: ChangeState) -> Node {
        match self {
            Node::Leaf(leaf) => Node::Leaf(Leaf::with_state(leaf.name, state)),
            Node::Branch(branch) => Node::Branch(branch.into_stamped(state)),
        }
    }

    /// Exact structural comparison: names, states, and child sequences in
    /// order. Nodes of different variants are never equal.
    pub fn structurally_equal(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a.name == b.name && a.state == b.state,
            (Node::Branch(a), Node::Branch(b)) => a.structurally_equal(b),
            _ => false,
        }
    }
}

impl Branch {
    pub fn structurally_equal(&self, other: &Branch) -> bool {
        self.name == other.name
            && self.state == other.state
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.structurally_equal(b))
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Branch> for Node {
    fn from(branch: Branch) -> Self {
        Node::Branch(branch)
    }
}
