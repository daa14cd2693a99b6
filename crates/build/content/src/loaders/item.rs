//! Item catalog loader.

use std::path::Path;

use anyhow::Context;
use build_core::{CatalogSnapshot, Item};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the raw item records from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`ItemCatalog`]
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse item records from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }

    /// Load and validate a catalog snapshot.
    ///
    /// Fails on duplicate ids or items that link to their own category.
    pub fn load_snapshot(path: &Path) -> LoadResult<CatalogSnapshot> {
        let items = Self::load(path)?;
        let count = items.len();
        let snapshot = CatalogSnapshot::new(items)
            .with_context(|| format!("Invalid item catalog {}", path.display()))?;
        tracing::debug!("loaded {} catalog items from {}", count, path.display());
        Ok(snapshot)
    }
}
