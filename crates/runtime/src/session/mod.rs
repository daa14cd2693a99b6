//! Interactive build editing.
//!
//! [`BuildSession`] holds the current resolved build and its stats. Every
//! edit copies the current build, replaces exactly one field (the name, a
//! singleton slot, or a whole slot arena) and re-runs resolve and aggregate
//! over the result. Nothing is updated incrementally.
mod error;

pub use error::SessionError;

use build_core::{
    BuildItemRecord, BuildItems, BuildState, CatalogOracle, EquippedTrait, Item, ItemCategory,
    SlotArray, StatsReport, TraitAmount, codec, records,
};

use crate::oracle::OracleManager;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Current build, its derived stats, and the catalog they were resolved
/// against.
pub struct BuildSession {
    oracles: OracleManager,
    build: BuildState,
    stats: StatsReport,
}

impl BuildSession {
    /// Starts from the empty default build.
    pub fn new(oracles: OracleManager) -> Self {
        Self::with_build(oracles, BuildState::default())
    }

    /// Starts from a decoded query string.
    pub fn from_query(oracles: OracleManager, query: &str) -> Result<Self> {
        let build = codec::decode_query(oracles.catalog(), query)?;
        Ok(Self::with_build(oracles, build))
    }

    fn with_build(oracles: OracleManager, build: BuildState) -> Self {
        let engine = oracles.engine();
        let build = engine.resolve(build);
        let stats = engine.aggregate(&build);
        Self {
            oracles,
            build,
            stats,
        }
    }

    pub fn build(&self) -> &BuildState {
        &self.build
    }

    pub fn stats(&self) -> &StatsReport {
        &self.stats
    }

    /// Canonical query string for the current build.
    pub fn query(&self) -> String {
        codec::encode(&self.build)
    }

    /// Storage rows for the current build.
    pub fn records(&self) -> Vec<BuildItemRecord> {
        records::to_records(&self.build)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::info!("rename build '{}' -> '{}'", self.build.name, name);
        self.commit(BuildState {
            name,
            items: self.build.items.clone(),
        });
    }

    /// Equips catalog item `id` into `category` at `index`.
    ///
    /// Singleton categories ignore `index`. Traits are equipped fully
    /// allocated.
    pub fn equip(&mut self, category: ItemCategory, index: usize, id: &str) -> Result<()> {
        let item = self.lookup(category, id)?;
        tracing::info!("equip {} '{}' at slot {}", category, id, index);

        let items = if category == ItemCategory::Trait {
            let equipped = EquippedTrait::new(item, TraitAmount::default());
            self.with_trait_slot(index, Some(equipped))?
        } else if category.is_singleton() {
            self.with_singleton(category, Some(item))
        } else {
            self.with_sequence_slot(category, index, Some(item))?
        };
        self.commit_items(items);
        Ok(())
    }

    /// Clears the slot. Items the resolver derived from it stay equipped.
    pub fn unequip(&mut self, category: ItemCategory, index: usize) -> Result<()> {
        tracing::info!("unequip {} slot {}", category, index);

        let items = if category == ItemCategory::Trait {
            self.with_trait_slot(index, None)?
        } else if category.is_singleton() {
            self.with_singleton(category, None)
        } else {
            self.with_sequence_slot(category, index, None)?
        };
        self.commit_items(items);
        Ok(())
    }

    /// Sets the points on an equipped trait, clamped into range.
    pub fn set_trait_amount(&mut self, index: usize, amount: u8) -> Result<()> {
        let current = self
            .build
            .items
            .traits()
            .get(index)
            .ok_or(SessionError::EmptyTraitSlot(index))?;
        let amount = TraitAmount::clamped(i64::from(amount));
        tracing::info!(
            "set trait '{}' amount {} -> {}",
            current.item.name,
            current.amount.get(),
            amount.get()
        );

        let equipped = EquippedTrait::new(current.item.clone(), amount);
        let items = self.with_trait_slot(index, Some(equipped))?;
        self.commit_items(items);
        Ok(())
    }

    /// Replaces the whole build with a decoded query string.
    pub fn load_query(&mut self, query: &str) -> Result<()> {
        let build = codec::decode_query(self.oracles.catalog(), query)?;
        tracing::info!("load build '{}' from query", build.name);
        self.commit(build);
        Ok(())
    }

    /// Replaces the whole build with one rebuilt from storage rows.
    pub fn load_records(
        &mut self,
        name: impl Into<String>,
        rows: impl IntoIterator<Item = BuildItemRecord>,
    ) {
        let build = records::from_records(self.oracles.catalog(), name, rows);
        tracing::info!("load build '{}' from records", build.name);
        self.commit(build);
    }

    fn lookup(&self, category: ItemCategory, id: &str) -> Result<Item> {
        let item = self
            .oracles
            .catalog()
            .item(id)
            .ok_or_else(|| SessionError::UnknownItem(id.to_owned()))?;
        if item.category() != category {
            return Err(SessionError::CategoryMismatch {
                id: id.to_owned(),
                expected: category,
                actual: item.category(),
            });
        }
        Ok(item)
    }

    fn with_singleton(&self, category: ItemCategory, item: Option<Item>) -> BuildItems {
        let mut items = self.build.items.clone();
        if let Some(slot) = items.singleton_mut(category) {
            *slot = item;
        }
        items
    }

    fn with_sequence_slot(
        &self,
        category: ItemCategory,
        index: usize,
        item: Option<Item>,
    ) -> Result<BuildItems> {
        let slot_error = |source| SessionError::Slot { category, source };
        let mut items = self.build.items.clone();
        let mut arena = items
            .sequence(category)
            .cloned()
            .unwrap_or_else(|| SlotArray::new(category.slot_count()));
        arena.set(index, item).map_err(slot_error)?;
        items
            .replace_sequence(category, arena)
            .map_err(slot_error)?;
        Ok(items)
    }

    fn with_trait_slot(&self, index: usize, value: Option<EquippedTrait>) -> Result<BuildItems> {
        let slot_error = |source| SessionError::Slot {
            category: ItemCategory::Trait,
            source,
        };
        let mut items = self.build.items.clone();
        let mut traits = items.traits().clone();
        traits.set(index, value).map_err(slot_error)?;
        items.replace_traits(traits).map_err(slot_error)?;
        Ok(items)
    }

    fn commit_items(&mut self, items: BuildItems) {
        self.commit(BuildState {
            name: self.build.name.clone(),
            items,
        });
    }

    fn commit(&mut self, build: BuildState) {
        let engine = self.oracles.engine();
        let build = engine.resolve(build);
        self.stats = engine.aggregate(&build);
        self.build = build;
        tracing::debug!(
            "build '{}' now has {} items, weight class {}",
            self.build.name,
            self.build.items.equipped_count(),
            self.stats.weight_class
        );
    }
}
