//! Filesystem walker for traversing directory structures

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Anything that is not a directory, symlinks included
    File { path: PathBuf, depth: usize },
    /// A directory entry
    Directory { path: PathBuf, depth: usize },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Directory { path, .. } => path,
        }
    }

    /// Depth below the walk root; direct children are depth 1
    pub fn depth(&self) -> usize {
        match self {
            Entry::File { depth, .. } | Entry::Directory { depth, .. } => *depth,
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Entry names to skip. `*.ext` matches by suffix, anything else must match
    /// a whole file or directory name.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all entries below the root
    ///
    /// Entries come out depth-first, each directory immediately followed by
    /// its contents, siblings sorted by file name. Symbolic links are never
    /// followed and are reported as files.
    pub fn walk(&self) -> Result<Vec<Entry>, ScanError> {
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|e| !self.should_ignore(e))
        {
            let entry = entry?;
            let path = entry.path().to_path_buf();
            let depth = entry.depth();
            if entry.file_type().is_dir() {
                entries.push(Entry::Directory { path, depth });
            } else {
                entries.push(Entry::File { path, depth });
            }
        }

        Ok(entries)
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| matches_pattern(&name, pattern))
    }
}

fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => name.ends_with(suffix),
        None => name == pattern,
    }
}
