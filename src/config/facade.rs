//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::sources::global_file;
use super::DirDiffConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the user-level config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Load configuration from the global file, `<workspace_root>/.dirdiff.toml`,
    /// and environment.
    pub fn load(workspace_root: &Path) -> Result<DirDiffConfig, ConfigError> {
        let global = Self::global_config_path();
        MergeService::load(global.as_deref(), workspace_root)
    }

    /// Load with an explicit global file location instead of the home directory.
    pub fn load_layers(
        global: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<DirDiffConfig, ConfigError> {
        MergeService::load(global, workspace_root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<DirDiffConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
