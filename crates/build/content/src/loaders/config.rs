//! Engine configuration loader.

use std::path::Path;

use build_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing EngineConfig
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let t = &config.weight_classes;
        if !t.is_ascending() {
            anyhow::bail!(
                "weight class bounds must ascend: light {} < medium {} < heavy {}",
                t.light,
                t.medium,
                t.heavy
            );
        }

        Ok(config)
    }
}
