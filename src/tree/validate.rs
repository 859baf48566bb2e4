//! Input validation for the merge engine
//!
//! The two-pointer merge silently produces a wrong diff when a branch lists
//! its children out of canonical order or repeats a (variant, name) pair, so
//! both inputs are checked up front. The walk uses an explicit stack so that
//! depth is bounded by `max_depth` rather than by the native call stack.

use crate::error::InvalidTreeError;
use crate::tree::node::{Branch, Node};
use crate::tree::order::canonical_cmp;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Default nesting limit applied to merge inputs
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Check canonical order, sibling uniqueness, and nesting depth at every level.
///
/// The root branch is depth 0; a branch nested `max_depth + 1` levels down is
/// rejected.
pub fn validate(root: &Branch, max_depth: usize) -> Result<(), InvalidTreeError> {
    let mut stack: Vec<(&Branch, usize, String)> = vec![(root, 0, root.name().to_string())];
    let mut visited = 0usize;

    while let Some((branch, depth, path)) = stack.pop() {
        visited += 1;
        if depth > max_depth {
            return Err(InvalidTreeError::TooDeep {
                path,
                limit: max_depth,
            });
        }

        check_siblings(branch.children(), &path)?;

        for child in branch.children().iter().rev() {
            if let Node::Branch(sub) = child {
                stack.push((sub, depth + 1, format!("{}/{}", path, sub.name())));
            }
        }
    }

    debug!(root = root.name(), branches = visited, "Tree validated");
    Ok(())
}

fn check_siblings(children: &[Node], parent: &str) -> Result<(), InvalidTreeError> {
    for pair in children.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        match canonical_cmp(previous, next) {
            Ordering::Less => {}
            Ordering::Equal => {
                trace!(parent, name = next.name(), "Duplicate sibling");
                return Err(InvalidTreeError::DuplicateSibling {
                    parent: parent.to_string(),
                    name: next.name().to_string(),
                    kind: next.kind(),
                });
            }
            Ordering::Greater => {
                return Err(InvalidTreeError::OutOfOrder {
                    parent: parent.to_string(),
                    previous: previous.name().to_string(),
                    next: next.name().to_string(),
                });
            }
        }
    }
    Ok(())
}
