//! [`build_core::CatalogOracle`] backed by in-memory maps.
use std::collections::HashMap;

use build_core::env::validate_item;
use build_core::{CatalogOracle, CatalogSnapshot, Item, ItemCategory, OracleError};

/// CatalogOracle implementation with id and name indexes.
///
/// Insertion order is kept so listings match the source file.
#[derive(Debug, Default)]
pub struct CatalogOracleImpl {
    items: Vec<Item>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<(ItemCategory, String), usize>,
}

impl CatalogOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an oracle from already-validated snapshot records.
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        let mut catalog = Self::new();
        for item in snapshot.items() {
            catalog.insert(item.clone());
        }
        catalog
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, OracleError> {
        let mut catalog = Self::new();
        for item in items {
            catalog.add_item(item)?;
        }
        Ok(catalog)
    }

    /// Add an item record. Ids must be unique.
    pub fn add_item(&mut self, item: Item) -> Result<(), OracleError> {
        validate_item(&item)?;
        if self.by_id.contains_key(&item.id) {
            return Err(OracleError::DuplicateItemId(item.id));
        }
        self.insert(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one category, in insertion order.
    pub fn items_in(&self, category: ItemCategory) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.category() == category)
    }

    fn insert(&mut self, item: Item) {
        let index = self.items.len();
        self.by_id.insert(item.id.clone(), index);
        // First record wins a name clash, matching snapshot lookup.
        self.by_name
            .entry((item.category(), item.name.clone()))
            .or_insert(index);
        self.items.push(item);
    }
}

impl CatalogOracle for CatalogOracleImpl {
    fn item(&self, id: &str) -> Option<Item> {
        self.by_id.get(id).map(|&index| self.items[index].clone())
    }

    fn item_by_name(&self, category: ItemCategory, name: &str) -> Option<Item> {
        self.by_name
            .get(&(category, name.to_owned()))
            .map(|&index| self.items[index].clone())
    }

    fn all_items(&self) -> Vec<Item> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::ItemKind;

    #[test]
    fn lookups_by_id_and_name() {
        let catalog = CatalogOracleImpl::from_items([
            Item::new("hot_shot", "Hot Shot", ItemKind::Mod),
            Item::new("wrangler", "Wrangler", ItemKind::Weapon),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.item("wrangler").map(|i| i.name), Some("Wrangler".into()));
        assert!(catalog.item_by_name(ItemCategory::Mod, "Hot Shot").is_some());
        assert!(catalog.item_by_name(ItemCategory::Weapon, "Hot Shot").is_none());
        assert!(catalog.item_in(ItemCategory::Weapon, "hot_shot").is_none());
        assert_eq!(catalog.items_in(ItemCategory::Weapon).count(), 1);
    }

    #[test]
    fn rejects_duplicates_and_self_links() {
        let mut catalog = CatalogOracleImpl::new();
        catalog
            .add_item(Item::new("a", "A", ItemKind::Ring))
            .unwrap();
        assert_eq!(
            catalog.add_item(Item::new("a", "B", ItemKind::Ring)),
            Err(OracleError::DuplicateItemId("a".into()))
        );
        let looped = Item::new("w", "W", ItemKind::Weapon).with_link(ItemCategory::Weapon, "W");
        assert!(matches!(
            catalog.add_item(looped),
            Err(OracleError::SelfLink { .. })
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn snapshot_order_is_kept() {
        let snapshot = CatalogSnapshot::new(vec![
            Item::new("b", "B", ItemKind::Ring),
            Item::new("a", "A", ItemKind::Ring),
        ])
        .unwrap();
        let catalog = CatalogOracleImpl::from_snapshot(&snapshot);
        let ids: Vec<_> = catalog.all_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
