//! dirdiff: Two-Way Directory Tree Comparison
//!
//! Builds canonical trees of directories and files, then merges a base tree
//! with another one into a single tree where every entry is marked SAME,
//! ADDED, DELETED, or MIXED.

pub mod cli;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

pub use concurrency::CancelFlag;
pub use error::{ApiError, InvalidTreeError, MergeError, ScanError};
pub use tree::{merge, Branch, ChangeState, DiffSummary, Leaf, MergeOptions, Merger, Node};
