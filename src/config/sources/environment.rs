//! Environment variable source: DIRDIFF_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses DIRDIFF prefix and __ as separator for nested keys,
/// e.g. DIRDIFF__MERGE__MAX_DEPTH=64.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("DIRDIFF")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
