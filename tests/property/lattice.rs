//! Exhaustive checks of the state join over all four states

use dirdiff::tree::mesh_states;
use dirdiff::ChangeState::{self, *};

const ALL: [ChangeState; 4] = ChangeState::ALL;

#[test]
fn test_same_is_identity() {
    for s in ALL {
        assert_eq!(mesh_states(Same, s), s);
        assert_eq!(mesh_states(s, Same), s);
    }
}

#[test]
fn test_mixed_absorbs() {
    for s in ALL {
        assert_eq!(mesh_states(Mixed, s), Mixed);
        assert_eq!(mesh_states(s, Mixed), Mixed);
    }
}

#[test]
fn test_commutative_and_idempotent() {
    for a in ALL {
        assert_eq!(mesh_states(a, a), a);
        for b in ALL {
            assert_eq!(mesh_states(a, b), mesh_states(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_associative() {
    for a in ALL {
        for b in ALL {
            for c in ALL {
                assert_eq!(
                    mesh_states(mesh_states(a, b), c),
                    mesh_states(a, mesh_states(b, c)),
                    "({a}, {b}, {c})"
                );
            }
        }
    }
}

#[test]
fn test_added_and_deleted_join_to_mixed() {
    assert_eq!(mesh_states(Added, Deleted), Mixed);
    assert_eq!(mesh_states(Deleted, Added), Mixed);
}
