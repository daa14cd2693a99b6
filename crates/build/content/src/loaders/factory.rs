//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use build_core::{CatalogSnapshot, EngineConfig};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all catalog content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ITEMS_FILE: &'static str = "items.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("{} not found, using default config", path.display());
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        let path = self.data_dir.join(Self::ITEMS_FILE);
        ItemLoader::load_snapshot(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
