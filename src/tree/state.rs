//! Change states and the lattice join used to roll child outcomes up into a parent

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a node relates to the other side of a comparison.
///
/// The four states form a join-semilattice: `Same` is the bottom (identity),
/// `Added` and `Deleted` are incomparable, `Mixed` is the absorbing top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeState {
    #[default]
    Same,
    Added,
    Deleted,
    Mixed,
}

impl ChangeState {
    pub const ALL: [ChangeState; 4] = [
        ChangeState::Same,
        ChangeState::Added,
        ChangeState::Deleted,
        ChangeState::Mixed,
    ];

    /// Fold any number of states starting from `Same`.
    pub fn fold<I>(states: I) -> ChangeState
    where
        I: IntoIterator<Item = ChangeState>,
    {
        states.into_iter().fold(ChangeState::Same, mesh_states)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeState::Same => "SAME",
            ChangeState::Added => "ADDED",
            ChangeState::Deleted => "DELETED",
            ChangeState::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for ChangeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lattice join over change states.
///
/// Commutative and associative; `Same` is the identity and `Mixed` absorbs.
pub fn mesh_states(old: ChangeState, new: ChangeState) -> ChangeState {
    use ChangeState::*;
    match (old, new) {
        (Mixed, _) | (_, Mixed) => Mixed,
        (a, b) if a == b => a,
        (Same, other) | (other, Same) => other,
        // Added with Deleted, either order
        _ => Mixed,
    }
}
