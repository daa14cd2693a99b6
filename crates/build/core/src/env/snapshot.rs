//! Vec-backed catalog snapshot.
//!
//! A serialisable oracle that owns its records. Loaders produce it from data
//! files and tests use it as a fixture catalog. Lookups are linear scans; a
//! catalog of a few thousand records is cheap to scan on every call.

use std::collections::HashSet;

use super::{CatalogOracle, OracleError};
use crate::item::{Item, ItemCategory};

/// Snapshot of catalog data.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSnapshot {
    items: Vec<Item>,
}

impl CatalogSnapshot {
    /// Builds a snapshot, rejecting duplicate ids and self-links.
    pub fn new(items: Vec<Item>) -> Result<Self, OracleError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_item(item)?;
            if !seen.insert(item.id.as_str()) {
                return Err(OracleError::DuplicateItemId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Rejects records whose link points back at their own category.
pub fn validate_item(item: &Item) -> Result<(), OracleError> {
    match &item.linked {
        Some(link) if link.category == item.category() => Err(OracleError::SelfLink {
            id: item.id.clone(),
            category: link.category.to_string(),
        }),
        _ => Ok(()),
    }
}

impl CatalogOracle for CatalogSnapshot {
    fn item(&self, id: &str) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn item_by_name(&self, category: ItemCategory, name: &str) -> Option<Item> {
        self.items
            .iter()
            .find(|item| item.category() == category && item.name == name)
            .cloned()
    }

    fn all_items(&self) -> Vec<Item> {
        self.items.clone()
    }
}
