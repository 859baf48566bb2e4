//! Merge properties over randomly generated canonical trees

use dirdiff::tree::order::{canonicalize, is_canonical};
use dirdiff::{merge, Branch, ChangeState, Leaf, Node};
use proptest::prelude::*;

/// Short names from a small alphabet so the two sides of a merge overlap
fn name() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = name().prop_map(|n| Node::Leaf(Leaf::new(n)));
    leaf.prop_recursive(4, 48, 6, |inner| {
        (name(), prop::collection::vec(inner, 0..6)).prop_map(|(n, mut children)| {
            canonicalize(&mut children);
            Node::Branch(Branch::new(n, children))
        })
    })
}

fn tree() -> impl Strategy<Value = Branch> {
    prop::collection::vec(node(), 0..8).prop_map(|mut children| {
        canonicalize(&mut children);
        Branch::new("root", children)
    })
}

fn all_nodes(root: &Branch) -> Vec<&Node> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node> = root.children().iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        if let Node::Branch(b) = node {
            stack.extend(b.children());
        }
    }
    out
}

fn all_branches(root: &Branch) -> Vec<&Branch> {
    let mut out = vec![root];
    out.extend(all_nodes(root).into_iter().filter_map(Node::as_branch));
    out
}

/// Swap ADDED and DELETED everywhere
fn mirrored(state: ChangeState) -> ChangeState {
    match state {
        ChangeState::Added => ChangeState::Deleted,
        ChangeState::Deleted => ChangeState::Added,
        s => s,
    }
}

proptest! {
    #[test]
    fn self_merge_is_all_same(t in tree()) {
        let result = merge(&t, &t).unwrap();
        prop_assert!(result.structurally_equal(&t.copy_stamped(ChangeState::Same)));
    }

    #[test]
    fn result_is_canonical(a in tree(), b in tree()) {
        let result = merge(&a, &b).unwrap();
        for branch in all_branches(&result) {
            prop_assert!(is_canonical(branch.children()));
        }
    }

    #[test]
    fn branch_state_is_join_of_children(a in tree(), b in tree()) {
        let result = merge(&a, &b).unwrap();
        // An empty added or deleted directory carries its own state
        for branch in all_branches(&result).into_iter().filter(|b| !b.is_empty()) {
            let joined = ChangeState::fold(branch.children().iter().map(Node::state));
            prop_assert_eq!(branch.state(), joined);
        }
    }

    #[test]
    fn reversing_inputs_mirrors_states(a in tree(), b in tree()) {
        let forward = merge(&a, &b).unwrap();
        let backward = merge(&b, &a).unwrap();

        prop_assert_eq!(backward.state(), mirrored(forward.state()));
        let forward_nodes = all_nodes(&forward);
        let backward_nodes = all_nodes(&backward);
        prop_assert_eq!(forward_nodes.len(), backward_nodes.len());
        for (f, r) in forward_nodes.iter().zip(&backward_nodes) {
            prop_assert_eq!(f.name(), r.name());
            prop_assert_eq!(r.state(), mirrored(f.state()));
        }
    }

    #[test]
    fn merge_against_empty_marks_everything(t in tree()) {
        let empty = Branch::empty("root");
        let deleted = merge(&t, &empty).unwrap();
        let added = merge(&empty, &t).unwrap();
        prop_assert!(all_nodes(&deleted).iter().all(|n| n.state() == ChangeState::Deleted));
        prop_assert!(all_nodes(&added).iter().all(|n| n.state() == ChangeState::Added));
    }

    #[test]
    fn structural_equality_is_reflexive(t in tree()) {
        prop_assert!(t.structurally_equal(&t.clone()));
    }
}
