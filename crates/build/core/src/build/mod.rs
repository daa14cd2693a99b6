//! Build state: the aggregate the resolver, aggregator and codec transform.
//!
//! A [`BuildState`] is treated as a value. Callers replace it wholesale on
//! every edit and re-run the pipeline; nothing in this crate keeps a
//! reference to one between calls.
mod slots;
mod traits;

pub use slots::{SlotArray, SlotError};
pub use traits::{EquippedTrait, TraitAmount};

use crate::config::EngineConfig;
use crate::item::{Item, ItemCategory};

/// A named loadout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildState {
    pub name: String,
    pub items: BuildItems,
}

impl BuildState {
    pub fn new() -> Self {
        Self::named(EngineConfig::DEFAULT_BUILD_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: BuildItems::default(),
        }
    }
}

impl Default for BuildState {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of one category's slots.
#[derive(Clone, Copy, Debug)]
pub enum CategorySlots<'a> {
    Singleton(Option<&'a Item>),
    Sequence(&'a SlotArray<Item>),
    Traits(&'a SlotArray<EquippedTrait>),
}

/// Equipped items, one slot per singleton category and one fixed-length
/// arena per sequence category.
///
/// Sequence arenas are private so their lengths cannot drift from
/// [`ItemCategory::slot_count`]; the weapon and mod arenas therefore always
/// line up index for index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildItems {
    pub helm: Option<Item>,
    pub torso: Option<Item>,
    pub legs: Option<Item>,
    pub gloves: Option<Item>,
    pub relic: Option<Item>,
    pub amulet: Option<Item>,
    weapons: SlotArray<Item>,
    rings: SlotArray<Item>,
    archetypes: SlotArray<Item>,
    skills: SlotArray<Item>,
    concoctions: SlotArray<Item>,
    consumables: SlotArray<Item>,
    mods: SlotArray<Item>,
    mutators: SlotArray<Item>,
    relic_fragments: SlotArray<Item>,
    traits: SlotArray<EquippedTrait>,
}

impl Default for BuildItems {
    fn default() -> Self {
        let arena = |category: ItemCategory| SlotArray::new(category.slot_count());
        Self {
            helm: None,
            torso: None,
            legs: None,
            gloves: None,
            relic: None,
            amulet: None,
            weapons: arena(ItemCategory::Weapon),
            rings: arena(ItemCategory::Ring),
            archetypes: arena(ItemCategory::Archetype),
            skills: arena(ItemCategory::Skill),
            concoctions: arena(ItemCategory::Concoction),
            consumables: arena(ItemCategory::Consumable),
            mods: arena(ItemCategory::Mod),
            mutators: arena(ItemCategory::Mutator),
            relic_fragments: arena(ItemCategory::RelicFragment),
            traits: SlotArray::new(ItemCategory::Trait.slot_count()),
        }
    }
}

impl BuildItems {
    pub fn singleton(&self, category: ItemCategory) -> Option<&Option<Item>> {
        match category {
            ItemCategory::Helm => Some(&self.helm),
            ItemCategory::Torso => Some(&self.torso),
            ItemCategory::Legs => Some(&self.legs),
            ItemCategory::Gloves => Some(&self.gloves),
            ItemCategory::Relic => Some(&self.relic),
            ItemCategory::Amulet => Some(&self.amulet),
            _ => None,
        }
    }

    pub fn singleton_mut(&mut self, category: ItemCategory) -> Option<&mut Option<Item>> {
        match category {
            ItemCategory::Helm => Some(&mut self.helm),
            ItemCategory::Torso => Some(&mut self.torso),
            ItemCategory::Legs => Some(&mut self.legs),
            ItemCategory::Gloves => Some(&mut self.gloves),
            ItemCategory::Relic => Some(&mut self.relic),
            ItemCategory::Amulet => Some(&mut self.amulet),
            _ => None,
        }
    }

    /// Item arena of a sequence category. Traits live in [`Self::traits`].
    pub fn sequence(&self, category: ItemCategory) -> Option<&SlotArray<Item>> {
        match category {
            ItemCategory::Weapon => Some(&self.weapons),
            ItemCategory::Ring => Some(&self.rings),
            ItemCategory::Archetype => Some(&self.archetypes),
            ItemCategory::Skill => Some(&self.skills),
            ItemCategory::Concoction => Some(&self.concoctions),
            ItemCategory::Consumable => Some(&self.consumables),
            ItemCategory::Mod => Some(&self.mods),
            ItemCategory::Mutator => Some(&self.mutators),
            ItemCategory::RelicFragment => Some(&self.relic_fragments),
            _ => None,
        }
    }

    pub fn sequence_mut(&mut self, category: ItemCategory) -> Option<&mut SlotArray<Item>> {
        match category {
            ItemCategory::Weapon => Some(&mut self.weapons),
            ItemCategory::Ring => Some(&mut self.rings),
            ItemCategory::Archetype => Some(&mut self.archetypes),
            ItemCategory::Skill => Some(&mut self.skills),
            ItemCategory::Concoction => Some(&mut self.concoctions),
            ItemCategory::Consumable => Some(&mut self.consumables),
            ItemCategory::Mod => Some(&mut self.mods),
            ItemCategory::Mutator => Some(&mut self.mutators),
            ItemCategory::RelicFragment => Some(&mut self.relic_fragments),
            _ => None,
        }
    }

    pub fn slots(&self, category: ItemCategory) -> CategorySlots<'_> {
        if category == ItemCategory::Trait {
            return CategorySlots::Traits(&self.traits);
        }
        match self.sequence(category) {
            Some(sequence) => CategorySlots::Sequence(sequence),
            None => CategorySlots::Singleton(self.singleton(category).and_then(Option::as_ref)),
        }
    }

    pub fn weapons(&self) -> &SlotArray<Item> {
        &self.weapons
    }

    pub fn mods(&self) -> &SlotArray<Item> {
        &self.mods
    }

    pub fn archetypes(&self) -> &SlotArray<Item> {
        &self.archetypes
    }

    pub fn traits(&self) -> &SlotArray<EquippedTrait> {
        &self.traits
    }

    pub fn traits_mut(&mut self) -> &mut SlotArray<EquippedTrait> {
        &mut self.traits
    }

    /// Replaces a whole item arena. The replacement must keep the
    /// category's capacity.
    pub fn replace_sequence(
        &mut self,
        category: ItemCategory,
        arena: SlotArray<Item>,
    ) -> Result<SlotArray<Item>, SlotError> {
        let capacity = category.slot_count();
        if arena.capacity() != capacity {
            return Err(SlotError::OutOfRange {
                index: arena.capacity(),
                capacity,
            });
        }
        let slot = self.sequence_mut(category).ok_or(SlotError::OutOfRange {
            index: 0,
            capacity: 0,
        })?;
        Ok(core::mem::replace(slot, arena))
    }

    /// Replaces the trait arena, keeping its capacity.
    pub fn replace_traits(
        &mut self,
        arena: SlotArray<EquippedTrait>,
    ) -> Result<SlotArray<EquippedTrait>, SlotError> {
        let capacity = ItemCategory::Trait.slot_count();
        if arena.capacity() != capacity {
            return Err(SlotError::OutOfRange {
                index: arena.capacity(),
                capacity,
            });
        }
        Ok(core::mem::replace(&mut self.traits, arena))
    }

    /// Items that feed stat aggregation, in aggregation order.
    ///
    /// Archetypes and skills never contribute stats.
    pub fn stat_sources(&self) -> impl Iterator<Item = &Item> {
        let singletons = [
            &self.helm,
            &self.torso,
            &self.legs,
            &self.gloves,
            &self.amulet,
            &self.relic,
        ]
        .into_iter()
        .flatten();
        let sequences = [
            &self.rings,
            &self.relic_fragments,
            &self.weapons,
            &self.mutators,
            &self.mods,
        ]
        .into_iter()
        .flat_map(|arena| arena.values());

        singletons
            .chain(sequences)
            .chain(self.traits.values().map(|equipped| &equipped.item))
            .chain(self.concoctions.values())
            .chain(self.consumables.values())
    }

    /// Number of equipped entries across every category.
    pub fn equipped_count(&self) -> usize {
        let singletons = [
            &self.helm,
            &self.torso,
            &self.legs,
            &self.gloves,
            &self.relic,
            &self.amulet,
        ]
        .into_iter()
        .filter(|slot| slot.is_some())
        .count();
        let sequences: usize = [
            &self.weapons,
            &self.rings,
            &self.archetypes,
            &self.skills,
            &self.concoctions,
            &self.consumables,
            &self.mods,
            &self.mutators,
            &self.relic_fragments,
        ]
        .into_iter()
        .map(SlotArray::occupied_count)
        .sum();
        singletons + sequences + self.traits.occupied_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ArmorSlot, ItemKind, TraitData};
    use strum::IntoEnumIterator;

    #[test]
    fn default_build_is_empty_and_named() {
        let build = BuildState::default();
        assert_eq!(build.name, "My Build");
        assert_eq!(build.items.equipped_count(), 0);
        assert_eq!(build.items.stat_sources().count(), 0);
    }

    #[test]
    fn arenas_match_category_capacity() {
        let items = BuildItems::default();
        for category in ItemCategory::iter() {
            match items.slots(category) {
                CategorySlots::Singleton(slot) => {
                    assert!(category.is_singleton());
                    assert!(slot.is_none());
                }
                CategorySlots::Sequence(arena) => {
                    assert_eq!(arena.capacity(), category.slot_count());
                }
                CategorySlots::Traits(arena) => {
                    assert_eq!(category, ItemCategory::Trait);
                    assert_eq!(arena.capacity(), category.slot_count());
                }
            }
        }
    }

    #[test]
    fn replace_sequence_keeps_capacity() {
        let mut items = BuildItems::default();
        assert!(
            items
                .replace_sequence(ItemCategory::Weapon, SlotArray::new(5))
                .is_err()
        );
        let mut weapons = SlotArray::new(ItemCategory::Weapon.slot_count());
        weapons
            .set(1, Some(Item::new("w", "Sorrow", ItemKind::Weapon)))
            .unwrap();
        items.replace_sequence(ItemCategory::Weapon, weapons).unwrap();
        assert_eq!(items.weapons().get(1).map(|w| w.id.as_str()), Some("w"));
    }

    #[test]
    fn stat_sources_skip_archetypes_and_skills() {
        let mut items = BuildItems::default();
        items.helm = Some(Item::new("h", "Helm", ItemKind::Armor(ArmorSlot::Helm)));
        items
            .sequence_mut(ItemCategory::Archetype)
            .unwrap()
            .set(0, Some(Item::new("a", "Challenger", ItemKind::Archetype)))
            .unwrap();
        items
            .sequence_mut(ItemCategory::Skill)
            .unwrap()
            .set(0, Some(Item::new("s", "War Stomp", ItemKind::Skill)))
            .unwrap();
        items
            .traits_mut()
            .push(EquippedTrait::new(
                Item::new("t", "Vigor", ItemKind::Trait(TraitData::new())),
                TraitAmount::MIN,
            ))
            .unwrap();

        let ids: Vec<_> = items.stat_sources().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["h", "t"]);
        assert_eq!(items.equipped_count(), 4);
    }
}
