//! CLI route: single route table and run context. Dispatches to tree services and presentation.

use crate::cli::parse::{ColorChoice, Commands, OutputFormat, RenderArgs, ScanArgs};
use crate::cli::presentation::{format_summary_table, render_tree_text, TextStyle};
use crate::config::{ConfigLoader, DirDiffConfig, ValidationError};
use crate::error::ApiError;
use crate::tree::builder::TreeBuilder;
use crate::tree::walker::WalkerConfig;
use crate::tree::{validate, Branch, DiffSummary, Merger, Node};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON shape of `compare --summary`
#[derive(Serialize)]
struct CompareOutput<'a> {
    tree: &'a Node,
    summary: &'a DiffSummary,
}

/// Runtime context for CLI execution: resolved configuration.
pub struct RunContext {
    config: DirDiffConfig,
}

impl RunContext {
    /// Create run context from an optional config path. Without one, layered
    /// loading starts from the current directory.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                ConfigLoader::load(&cwd)?
            }
        };
        Self::with_config(config)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(config: DirDiffConfig) -> Result<Self, ApiError> {
        config.validate().map_err(validation_failed)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DirDiffConfig {
        &self.config
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Compare {
                base,
                other,
                render,
                scan,
                summary,
            } => self.handle_compare(base, other, render, scan, *summary),
            Commands::Show { path, render, scan } => self.handle_show(path, render, scan),
            Commands::Validate { path } => self.handle_validate(path),
        }
    }

    fn handle_compare(
        &self,
        base: &Path,
        other: &Path,
        render: &RenderArgs,
        scan: &ScanArgs,
        summary: bool,
    ) -> Result<String, ApiError> {
        let first = self.load_tree(base, scan)?;
        let second = self.load_tree(other, scan)?;

        let merger = Merger::new().with_options(self.config.merge.to_options());
        let result = merger.merge(&first, &second)?;
        info!(state = %result.state(), "Comparison finished");

        let counts = summary.then(|| DiffSummary::of(&result));
        match render.format {
            OutputFormat::Json => {
                // Tagged root so the output can be fed back in with --json-input
                let tree = Node::Branch(result);
                match counts {
                    Some(ref summary) => Ok(serde_json::to_string_pretty(&CompareOutput {
                        tree: &tree,
                        summary,
                    })?),
                    None => Ok(serde_json::to_string_pretty(&tree)?),
                }
            }
            OutputFormat::Text => {
                let mut out = render_tree_text(&result, text_style(render));
                if let Some(counts) = counts {
                    out.push_str("\n\n");
                    out.push_str(&format_summary_table(&counts));
                }
                Ok(out)
            }
        }
    }

    fn handle_show(
        &self,
        path: &Path,
        render: &RenderArgs,
        scan: &ScanArgs,
    ) -> Result<String, ApiError> {
        let tree = self.load_tree(path, scan)?;
        validate(&tree, self.config.merge.max_depth)?;
        match render.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Node::Branch(tree))?),
            OutputFormat::Text => Ok(render_tree_text(&tree, text_style(render))),
        }
    }

    fn handle_validate(&self, path: &Path) -> Result<String, ApiError> {
        let tree = load_json_tree(path)?;
        validate(&tree, self.config.merge.max_depth)?;
        Ok(format!("{}: valid", path.display()))
    }

    /// Scan a directory, or read a JSON tree file when `--json-input` is set.
    fn load_tree(&self, path: &Path, scan: &ScanArgs) -> Result<Branch, ApiError> {
        if scan.json_input {
            return load_json_tree(path);
        }
        let walker_config = self.walker_config(scan)?;
        debug!(path = %path.display(), ?walker_config, "Scanning tree");
        Ok(TreeBuilder::new(path.to_path_buf())
            .with_walker_config(walker_config)
            .build()?)
    }

    /// Config file settings with command-line additions layered on top,
    /// held to the same validation as the file.
    fn walker_config(&self, scan: &ScanArgs) -> Result<WalkerConfig, ApiError> {
        let mut config = self.config.clone();
        config.walker.ignore_patterns.extend(scan.ignore.iter().cloned());
        if scan.max_depth.is_some() {
            config.walker.max_depth = scan.max_depth;
        }
        config.validate().map_err(validation_failed)?;
        Ok(config.walker)
    }
}

fn validation_failed(errors: Vec<ValidationError>) -> ApiError {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    ApiError::ConfigError(format!(
        "Configuration validation failed:\n{}",
        messages.join("\n")
    ))
}

/// Read a serialized tree whose root must be a branch.
pub fn load_json_tree(path: &Path) -> Result<Branch, ApiError> {
    let text = std::fs::read_to_string(path)?;
    let node: Node = serde_json::from_str(&text).map_err(|source| ApiError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match node {
        Node::Branch(branch) => Ok(branch),
        Node::Leaf(_) => Err(ApiError::RootNotBranch(path.to_path_buf())),
    }
}

fn text_style(render: &RenderArgs) -> TextStyle {
    let color = match render.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };
    TextStyle {
        include_state: !render.no_state,
        color,
    }
}
