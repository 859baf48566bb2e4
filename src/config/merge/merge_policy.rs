//! Merge rules: defaults applied beneath every other source.

use crate::tree::validate::DEFAULT_MAX_DEPTH;
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("merge.max_depth", DEFAULT_MAX_DEPTH as i64)?
        .set_default("logging.level", "info")?
        .set_default("logging.output", "stderr")
}
