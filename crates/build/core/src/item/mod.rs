//! Catalog item records.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every record shares (id, name, stats, link)
//! - [`ItemKind`] holds category-specific payload, so a trait's step fields
//!   cannot appear on a helm
//! - The category of an item is derived from its kind, never stored twice
//!
//! Items are immutable once loaded into a catalog.
mod category;
mod stats;

pub use category::{ItemCategory, SlotLayout};
pub use stats::{
    ResistanceKind, StatContributions, StatField, StepField, TraitData, contribution,
};

/// Armor slot of an armor piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmorSlot {
    Helm,
    Torso,
    Legs,
    Gloves,
}

impl ArmorSlot {
    pub fn category(self) -> ItemCategory {
        match self {
            ArmorSlot::Helm => ItemCategory::Helm,
            ArmorSlot::Torso => ItemCategory::Torso,
            ArmorSlot::Legs => ItemCategory::Legs,
            ArmorSlot::Gloves => ItemCategory::Gloves,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Armor(ArmorSlot),
    Weapon,
    Mod,
    Mutator,
    /// Trait with its per-point contributions.
    Trait(TraitData),
    RelicFragment,
    Ring,
    Archetype,
    Skill,
    Concoction,
    Consumable,
    Amulet,
    Relic,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Armor(slot) => slot.category(),
            ItemKind::Weapon => ItemCategory::Weapon,
            ItemKind::Mod => ItemCategory::Mod,
            ItemKind::Mutator => ItemCategory::Mutator,
            ItemKind::Trait(_) => ItemCategory::Trait,
            ItemKind::RelicFragment => ItemCategory::RelicFragment,
            ItemKind::Ring => ItemCategory::Ring,
            ItemKind::Archetype => ItemCategory::Archetype,
            ItemKind::Skill => ItemCategory::Skill,
            ItemKind::Concoction => ItemCategory::Concoction,
            ItemKind::Consumable => ItemCategory::Consumable,
            ItemKind::Amulet => ItemCategory::Amulet,
            ItemKind::Relic => ItemCategory::Relic,
        }
    }
}

/// Reference to the one item another item auto-equips.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkedItem {
    pub category: ItemCategory,
    pub name: String,
}

impl LinkedItem {
    pub fn new(category: ItemCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

/// Immutable catalog record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatContributions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub linked: Option<LinkedItem>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            stats: StatContributions::default(),
            linked: None,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Trait payload, present only for trait items.
    pub fn trait_data(&self) -> Option<&TraitData> {
        match &self.kind {
            ItemKind::Trait(data) => Some(data),
            _ => None,
        }
    }

    /// Linked item of the given category, if this item declares one.
    pub fn linked_to(&self, category: ItemCategory) -> Option<&LinkedItem> {
        self.linked.as_ref().filter(|link| link.category == category)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stats(mut self, stats: StatContributions) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_stat(mut self, field: StatField, value: f64) -> Self {
        self.stats = self.stats.with(field, value);
        self
    }

    pub fn with_link(mut self, category: ItemCategory, name: impl Into<String>) -> Self {
        self.linked = Some(LinkedItem::new(category, name));
        self
    }
}
