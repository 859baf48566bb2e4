//! Directory Trees
//!
//! Represents a directory hierarchy as a tree of branches (directories) and
//! leaves (files), and compares two such trees into one annotated tree where
//! every entry is marked SAME, ADDED, DELETED, or MIXED.

pub mod builder;
pub mod merge;
pub mod node;
pub mod order;
pub mod path;
pub mod print;
pub mod state;
pub mod summary;
pub mod validate;
pub mod walker;

pub use merge::{merge, MergeOptions, Merger};
pub use node::{Branch, Leaf, Node};
pub use state::{mesh_states, ChangeState};
pub use summary::DiffSummary;
pub use validate::validate;
