//! Per-state node counts over a comparison result

use crate::tree::node::{Branch, Node};
use crate::tree::state::ChangeState;
use serde::Serialize;

/// Number of files and directories carrying each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub files: usize,
    pub directories: usize,
}

/// Tally of a result tree, root included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub same: StateCounts,
    pub added: StateCounts,
    pub deleted: StateCounts,
    pub mixed: StateCounts,
}

impl DiffSummary {
    pub fn of(root: &Branch) -> Self {
        let mut summary = DiffSummary::default();
        summary.bump(root.state(), true);

        let mut stack: Vec<&Node> = root.children().iter().collect();
        while let Some(node) = stack.pop() {
            summary.bump(node.state(), node.is_branch());
            if let Node::Branch(branch) = node {
                stack.extend(branch.children());
            }
        }
        summary
    }

    pub fn get(&self, state: ChangeState) -> StateCounts {
        match state {
            ChangeState::Same => self.same,
            ChangeState::Added => self.added,
            ChangeState::Deleted => self.deleted,
            ChangeState::Mixed => self.mixed,
        }
    }

    pub fn total(&self) -> usize {
        ChangeState::ALL
            .iter()
            .map(|s| {
                let c = self.get(*s);
                c.files + c.directories
            })
            .sum()
    }

    /// True when nothing differs between the two sides
    pub fn is_unchanged(&self) -> bool {
        self.total() == self.same.files + self.same.directories
    }

    fn bump(&mut self, state: ChangeState, is_branch: bool) {
        let counts = match state {
            ChangeState::Same => &mut self.same,
            ChangeState::Added => &mut self.added,
            ChangeState::Deleted => &mut self.deleted,
            ChangeState::Mixed => &mut self.mixed,
        };
        if is_branch {
            counts.directories += 1;
        } else {
            counts.files += 1;
        }
    }
}
