//! Tree builder for turning a directory on disk into a canonical tree

use crate::error::ScanError;
use crate::tree::node::{Branch, Leaf, Node};
use crate::tree::order::canonical_cmp;
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Tree builder for constructing comparison inputs from the filesystem
pub struct TreeBuilder {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
        }
    }

    /// Set walker config (ignore patterns, depth). When set, the walker uses
    /// this config instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Build the tree rooted at the configured directory
    ///
    /// Directories become branches, everything else becomes a leaf. Every
    /// node is `Same`, and every branch lists its children in canonical order.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Branch, ScanError> {
        let start = Instant::now();
        info!("Starting tree build");

        let canonical_root = path::canonicalize_path(&self.root)?;
        if !canonical_root.is_dir() {
            error!("Root is not a directory");
            return Err(ScanError::NotADirectory(canonical_root));
        }

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(canonical_root.clone(), config.clone()),
            None => Walker::new(canonical_root.clone()),
        };
        let entries = match walker.walk() {
            Ok(e) => {
                debug!(entry_count = e.len(), "Walked filesystem");
                e
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        // Directories still being filled, outermost first. The root's own
        // children live in `top_level`.
        let mut open: Vec<(String, Vec<Node>)> = Vec::new();
        let mut top_level: Vec<Node> = Vec::new();
        let mut node_count = 1usize;

        let root_name = path::root_name(&canonical_root);

        for entry in entries {
            while open.len() >= entry.depth() {
                close_directory(&root_name, &mut open, &mut top_level)?;
            }

            let name = match entry.path().file_name() {
                Some(name) => match path::normalize_name(name) {
                    Some(name) => name,
                    None => {
                        error!(path = %entry.path().display(), "Entry name is not valid UTF-8");
                        return Err(ScanError::NonUnicodeName(entry.path().to_path_buf()));
                    }
                },
                None => continue,
            };
            node_count += 1;

            match entry {
                Entry::Directory { .. } => open.push((name, Vec::new())),
                Entry::File { .. } => {
                    let leaf = Node::Leaf(Leaf::new(name));
                    match open.last_mut() {
                        Some((_, children)) => children.push(leaf),
                        None => top_level.push(leaf),
                    }
                }
            }
        }
        while !open.is_empty() {
            close_directory(&root_name, &mut open, &mut top_level)?;
        }

        sort_children(&root_name, &mut top_level)?;
        let tree = Branch::new(root_name, top_level);

        info!(
            node_count,
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );
        Ok(tree)
    }
}

/// Seal the innermost open directory and attach it to its parent.
fn close_directory(
    root_name: &str,
    open: &mut Vec<(String, Vec<Node>)>,
    top_level: &mut Vec<Node>,
) -> Result<(), ScanError> {
    let parent: String = std::iter::once(root_name)
        .chain(open.iter().map(|(name, _)| name.as_str()))
        .collect::<Vec<_>>()
        .join("/");
    if let Some((name, mut children)) = open.pop() {
        sort_children(&parent, &mut children)?;
        let branch = Node::Branch(Branch::new(name, children));
        match open.last_mut() {
            Some((_, siblings)) => siblings.push(branch),
            None => top_level.push(branch),
        }
    }
    Ok(())
}

/// Sort into canonical order. Two on-disk names that normalize to the same
/// NFC form would merge into one node, so that is an error.
fn sort_children(parent: &str, children: &mut [Node]) -> Result<(), ScanError> {
    children.sort_by(canonical_cmp);
    if let Some(pair) = children
        .windows(2)
        .find(|pair| pair[0].shares_identity(&pair[1]))
    {
        error!(parent, name = pair[1].name(), "Entries collide after name normalization");
        return Err(ScanError::NameCollision {
            parent: parent.to_string(),
            name: pair[1].name().to_string(),
            kind: pair[1].kind(),
        });
    }
    Ok(())
}
