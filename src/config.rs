//! Configuration System
//!
//! Layered configuration for scanning and comparison: built-in defaults, a
//! user-level file, a per-directory file, and environment overrides.

use crate::logging::LoggingConfig;
use crate::tree::merge::MergeOptions;
use crate::tree::validate::DEFAULT_MAX_DEPTH;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirDiffConfig {
    /// Filesystem scan settings applied to both sides of a comparison
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Merge engine settings
    #[serde(default)]
    pub merge: MergeSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Merge engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Deepest directory nesting accepted in a merge input
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl MergeSettings {
    pub fn to_options(&self) -> MergeOptions {
        MergeOptions {
            max_depth: self.max_depth,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Walker(String),
    Merge(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Walker(msg) => write!(f, "Walker: {}", msg),
            ValidationError::Merge(msg) => write!(f, "Merge: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirDiffConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.walker.max_depth == Some(0) {
            errors.push(ValidationError::Walker(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.walker.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::Walker(
                "ignore patterns cannot be empty".to_string(),
            ));
        }

        if self.merge.max_depth == 0 {
            errors.push(ValidationError::Merge(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if let Some(scan_depth) = self.walker.max_depth {
            if scan_depth > self.merge.max_depth {
                errors.push(ValidationError::Merge(format!(
                    "max_depth {} is shallower than walker max_depth {}",
                    self.merge.max_depth, scan_depth
                )));
            }
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "unknown format '{}'",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "unknown output '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
