//! Runtime wrappers around static catalog content.
//!
//! The catalog and engine configuration are immutable once loaded. They are
//! bundled into an [`OracleManager`] and shared behind `Arc` so sessions can
//! be created cheaply.
mod catalog;

use std::sync::Arc;

use build_content::{ContentFactory, LoadResult};
use build_core::{BuildEngine, EngineConfig};

pub use catalog::CatalogOracleImpl;

/// Shared handle to the loaded catalog and configuration.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<CatalogOracleImpl>,
    pub(crate) config: Arc<EngineConfig>,
}

impl OracleManager {
    pub fn new(catalog: CatalogOracleImpl, config: EngineConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// Loads `items.ron` and `config.toml` through a content factory.
    pub fn load(factory: &ContentFactory) -> LoadResult<Self> {
        let config = factory.load_config()?;
        let snapshot = factory.load_catalog()?;
        let catalog = CatalogOracleImpl::from_snapshot(&snapshot);
        tracing::info!(
            "catalog ready: {} items from {}",
            catalog.len(),
            factory.data_dir().display()
        );
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &CatalogOracleImpl {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Engine bound to this manager's catalog.
    pub fn engine(&self) -> BuildEngine<'_, CatalogOracleImpl> {
        BuildEngine::new(self.catalog.as_ref(), (*self.config).clone())
    }
}
