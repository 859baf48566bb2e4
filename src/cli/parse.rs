//! CLI parse: clap types for dirdiff. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dirdiff - Compare two directory trees entry by entry
#[derive(Parser)]
#[command(name = "dirdiff")]
#[command(about = "Compare two directory trees and mark every entry SAME, ADDED, DELETED, or MIXED")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a base directory against another one
    Compare {
        /// Base tree; entries only here are DELETED
        base: PathBuf,
        /// Other tree; entries only here are ADDED
        other: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
        #[command(flatten)]
        scan: ScanArgs,
        /// Append per-state counts
        #[arg(long)]
        summary: bool,
    },
    /// Print the canonical tree of one directory
    Show {
        path: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Check that a JSON tree file is canonically ordered and duplicate-free
    Validate {
        /// Tree file in JSON form
        path: PathBuf,
    },
}

/// Output shaping shared by commands that print trees
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit the (STATE) suffix in text output
    #[arg(long)]
    pub no_state: bool,

    /// Color text output by state
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Scan options shared by commands that read trees
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Read trees from JSON files instead of scanning directories
    #[arg(long)]
    pub json_input: bool,

    /// Extra entry names to skip (repeatable, `*.ext` matches by suffix)
    #[arg(long = "ignore")]
    pub ignore: Vec<String>,

    /// Maximum scan depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
