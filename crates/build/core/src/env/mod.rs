//! Traits describing read-only catalog data.
//!
//! The catalog is the only shared resource the engine touches. It is
//! exposed through [`CatalogOracle`] and passed explicitly to every
//! operation that needs it, so tests can swap in a fixture catalog and no
//! operation depends on process-wide state.
mod error;
mod snapshot;

pub use error::OracleError;
pub use snapshot::{CatalogSnapshot, validate_item};

use crate::item::{Item, ItemCategory};

/// Read-only item lookup.
///
/// Lookups are total: a missing item is `None`, never an error.
pub trait CatalogOracle: Send + Sync {
    /// Looks an item up by its stable id.
    fn item(&self, id: &str) -> Option<Item>;

    /// Looks an item up by display name within one category.
    fn item_by_name(&self, category: ItemCategory, name: &str) -> Option<Item>;

    /// Returns all item records in this oracle.
    fn all_items(&self) -> Vec<Item>;

    /// Returns the item only if its catalog category is `category`.
    fn item_in(&self, category: ItemCategory, id: &str) -> Option<Item> {
        self.item(id).filter(|item| item.category() == category)
    }
}

impl<T: CatalogOracle + ?Sized> CatalogOracle for &T {
    fn item(&self, id: &str) -> Option<Item> {
        (**self).item(id)
    }

    fn item_by_name(&self, category: ItemCategory, name: &str) -> Option<Item> {
        (**self).item_by_name(category, name)
    }

    fn all_items(&self) -> Vec<Item> {
        (**self).all_items()
    }
}
