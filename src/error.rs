//! Error types for the directory comparison system.

use thiserror::Error;

/// Input tree violates the canonical-order contract.
///
/// Raised by validation before any merge work begins. `parent` is the
/// slash-joined path of the branch whose children are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTreeError {
    #[error("Children of {parent:?} out of canonical order: {next:?} must come before {previous:?}")]
    OutOfOrder {
        parent: String,
        previous: String,
        next: String,
    },

    #[error("Duplicate {kind} {name:?} under {parent:?}")]
    DuplicateSibling {
        parent: String,
        name: String,
        kind: &'static str,
    },

    #[error("Tree nesting under {path:?} exceeds depth limit of {limit}")]
    TooDeep { path: String, limit: usize },
}

/// Merge-related errors
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Invalid input tree: {0}")]
    InvalidTree(#[from] InvalidTreeError),

    #[error("Merge cancelled")]
    Cancelled,
}

/// Filesystem scan errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Not a directory: {0}")]
    NotADirectory(std::path::PathBuf),

    #[error("Entry name is not valid UTF-8: {0:?}")]
    NonUnicodeName(std::path::PathBuf),

    #[error("Entries under {parent:?} collide as {kind} {name:?} after Unicode normalization")]
    NameCollision {
        parent: String,
        name: String,
        kind: &'static str,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Scan I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tree file {path:?} is not valid JSON: {source}")]
    Json {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Expected a directory at the root of tree file {0:?}")]
    RootNotBranch(std::path::PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<InvalidTreeError> for ApiError {
    fn from(err: InvalidTreeError) -> Self {
        ApiError::Merge(MergeError::InvalidTree(err))
    }
}
