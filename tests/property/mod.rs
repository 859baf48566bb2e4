//! Property-based tests for the state lattice and the merge engine

mod lattice;
mod merge_laws;
